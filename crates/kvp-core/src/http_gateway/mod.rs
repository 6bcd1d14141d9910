//! Outbound HTTP GET.
//!
//! Uses the curl crate (libcurl easy interface). The body is returned whole;
//! any non-2xx status is an error carrying the status and body. No retries.

mod error;
mod header;

pub use error::GatewayError;
pub use header::parse_header_line;

use std::time::Duration;

use crate::config::HttpConfig;

/// Performs outbound GET requests.
pub trait HttpGateway {
    /// GETs `url` with `headers` added in order and returns the response body.
    fn get(&self, url: &str, headers: &[(String, String)]) -> Result<String, GatewayError>;
}

/// [`HttpGateway`] backed by a fresh libcurl easy handle per request.
///
/// Blocks the current thread; call from `spawn_blocking` if used from async code.
#[derive(Debug, Clone, Default)]
pub struct CurlGateway {
    config: HttpConfig,
}

impl CurlGateway {
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }
}

impl HttpGateway for CurlGateway {
    fn get(&self, url: &str, headers: &[(String, String)]) -> Result<String, GatewayError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(self.config.follow_redirects)?;
        easy.connect_timeout(Duration::from_secs(self.config.connect_timeout_secs))?;
        easy.timeout(Duration::from_secs(self.config.timeout_secs))?;
        easy.useragent(&self.config.user_agent)?;

        if !headers.is_empty() {
            let mut list = curl::easy::List::new();
            for (name, value) in headers {
                tracing::debug!(header = name.as_str(), "adding request header");
                list.append(&format!("{}: {}", name.trim(), value.trim()))?;
            }
            easy.http_headers(list)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        let body = String::from_utf8_lossy(&body).into_owned();
        tracing::debug!(url, status, bytes = body.len(), "GET completed");

        if !(200..300).contains(&status) {
            return Err(GatewayError::BadStatus { status, body });
        }
        Ok(body)
    }
}
