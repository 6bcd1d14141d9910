//! CLI command handlers, one per file.

mod completions;
mod cookie;
mod fetch;
mod input;
mod normalize;

pub use completions::run_completions;
pub use cookie::run_cookie;
pub use fetch::run_fetch;
pub use input::{run_get, run_list, run_param, run_validate};
pub use normalize::run_normalize;
