//! Outbound GET error type.

/// Error returned by an outbound GET.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Curl reported an error (bad URL, DNS, timeout, connection, TLS).
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),
    /// The response had a non-2xx status. `body` holds the response text.
    #[error("HTTP {status}")]
    BadStatus { status: u32, body: String },
}

impl GatewayError {
    /// HTTP status for [`GatewayError::BadStatus`], None for transport failures.
    pub fn status(&self) -> Option<u32> {
        match self {
            GatewayError::BadStatus { status, .. } => Some(*status),
            GatewayError::Transport(_) => None,
        }
    }
}
