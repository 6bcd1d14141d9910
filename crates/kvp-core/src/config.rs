use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Outbound HTTP client settings (`[http]` in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds (0 = no limit).
    pub timeout_secs: u64,
    /// Follow 3xx redirects.
    pub follow_redirects: bool,
    /// `User-Agent` sent on every request.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            follow_redirects: true,
            user_agent: format!("kvp/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Cookie defaults (`[cookie]` in config.toml).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieConfig {
    /// Max-Age applied when a caller sets a cookie without one (None = session cookie).
    #[serde(default)]
    pub default_max_age_secs: Option<u64>,
}

/// Global configuration loaded from `~/.config/kvp/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KvpConfig {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub cookie: CookieConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("kvp")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<KvpConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = KvpConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<KvpConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: KvpConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
