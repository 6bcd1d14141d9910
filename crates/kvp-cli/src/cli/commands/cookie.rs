//! `kvp cookie get | set | remove` – read or build cookie headers.

use anyhow::{bail, Result};
use kvp_core::config::KvpConfig;
use kvp_core::cookie;

use crate::cli::CookieAction;

pub fn run_cookie(cfg: &KvpConfig, action: CookieAction) -> Result<()> {
    match action {
        CookieAction::Get { header, name } => match cookie::cookie_from_header(&header, &name) {
            Some(value) => println!("{value}"),
            None => bail!("cookie '{}' not found", name),
        },
        CookieAction::Set {
            name,
            value,
            max_age,
        } => {
            let max_age = max_age.or(cfg.cookie.default_max_age_secs);
            let header = cookie::set_cookie_header(&name, &value, max_age)?;
            println!("Set-Cookie: {}", header.to_str()?);
        }
        CookieAction::Remove { name } => {
            let header = cookie::set_cookie_header(&name, "", Some(0))?;
            println!("Set-Cookie: {}", header.to_str()?);
        }
    }
    Ok(())
}
