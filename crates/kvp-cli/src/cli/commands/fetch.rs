//! `kvp fetch <url> [-H "Name: value"]...` – outbound GET.

use anyhow::{anyhow, Context, Result};
use kvp_core::config::KvpConfig;
use kvp_core::http_gateway::{parse_header_line, CurlGateway, HttpGateway};

pub fn run_fetch(cfg: &KvpConfig, url: &str, header_args: &[String]) -> Result<()> {
    let headers = header_args
        .iter()
        .map(|h| parse_header_line(h).ok_or_else(|| anyhow!("malformed header '{}'", h)))
        .collect::<Result<Vec<_>>>()?;

    let gateway = CurlGateway::new(cfg.http.clone());
    let body = gateway
        .get(url, &headers)
        .with_context(|| format!("GET {}", url))?;
    print!("{body}");
    Ok(())
}
