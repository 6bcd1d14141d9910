//! CLI for the kvp query-string toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use kvp_core::config;

use commands::{
    run_completions, run_cookie, run_fetch, run_get, run_list, run_normalize, run_param,
    run_validate,
};

/// Top-level CLI for the kvp toolkit.
#[derive(Debug, Parser)]
#[command(name = "kvp")]
#[command(about = "kvp: query-string extraction, token validation and URL normalization", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check a value against the token whitelist.
    Validate {
        /// Value to check (already decoded).
        input: String,
    },

    /// Print every value of a key, one per line.
    List {
        /// URL or bare query string.
        source: String,
        /// Key to look up (case-insensitive).
        key: String,
    },

    /// Print the first value of a key; fails if the key is absent.
    Get {
        /// URL or bare query string.
        source: String,
        /// Key to look up (case-insensitive).
        key: String,
    },

    /// Look up a required parameter, decoding its value first.
    Param {
        /// URL or bare query string.
        query: String,
        /// Parameter name (case-insensitive).
        name: String,
    },

    /// Print the normalized form of a URL.
    Normalize {
        url: String,
    },

    /// GET a URL and print the response body.
    Fetch {
        url: String,
        /// Extra request header; repeatable.
        #[arg(short = 'H', long = "header", value_name = "NAME: VALUE")]
        headers: Vec<String>,
    },

    /// Read or build cookie headers.
    Cookie {
        #[command(subcommand)]
        action: CookieAction,
    },

    /// Print a shell completion script.
    Completions {
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum CookieAction {
    /// Print the value of a cookie from a raw `Cookie` header.
    Get {
        /// Raw header value, e.g. "session=abc; theme=dark".
        header: String,
        name: String,
    },
    /// Print a `Set-Cookie` header.
    Set {
        name: String,
        value: String,
        /// Max-Age in seconds; defaults to the configured value.
        #[arg(long, value_name = "SECS")]
        max_age: Option<u64>,
    },
    /// Print a `Set-Cookie` header that expires the cookie.
    Remove {
        name: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Validate { input } => run_validate(&input)?,
            CliCommand::List { source, key } => run_list(&source, &key)?,
            CliCommand::Get { source, key } => run_get(&source, &key)?,
            CliCommand::Param { query, name } => run_param(&query, &name)?,
            CliCommand::Normalize { url } => run_normalize(&url),
            CliCommand::Fetch { url, headers } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_fetch(&cfg, &url, &headers)?;
            }
            CliCommand::Cookie { action } => {
                let cfg = config::load_or_init()?;
                run_cookie(&cfg, action)?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
