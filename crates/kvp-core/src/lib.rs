pub mod config;
pub mod logging;

// Request-input handling
pub mod kvp;
pub mod token;
pub mod url_model;

// Outbound collaborators
pub mod cookie;
pub mod http_gateway;

pub use kvp::{list_values, required_param, single_value, ParamError, ParamMap};
pub use token::{validate_input_tokens, InvalidToken};
pub use url_model::normalize_url;
