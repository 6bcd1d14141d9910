//! `kvp normalize <url>` – print the canonical form of a URL.

use kvp_core::url_model::normalize_url;

pub fn run_normalize(url: &str) {
    println!("{}", normalize_url(url));
}
