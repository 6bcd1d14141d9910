//! Errors for required-parameter lookup.

use crate::token::InvalidToken;

/// Why a required parameter could not be returned.
///
/// Callers branch on the variant: a missing parameter and a value with
/// disallowed characters usually map to different client messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("required parameter '{name}' not found")]
    NotFound { name: String },
    #[error("parameter contains {0}")]
    InvalidToken(#[from] InvalidToken),
}

impl ParamError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ParamError::NotFound { .. })
    }
}
