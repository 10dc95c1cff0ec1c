//! Embedded site configuration.
//!
//! `site.json` is compiled into the crate so the server render and the
//! hydrated client read the same content. It is parsed on first use and the
//! result is shared for the life of the process (or page).

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use std::sync::OnceLock;

use showcase::config::{ConfigError, SiteConfig};

const SITE_JSON: &str = include_str!("../site.json");

static SITE: OnceLock<Result<SiteConfig, ConfigError>> = OnceLock::new();

/// The validated site configuration.
///
/// # Errors
///
/// Returns the [`ConfigError`] produced while parsing the embedded document.
/// The error is computed once and returned on every call.
pub fn site() -> Result<&'static SiteConfig, &'static ConfigError> {
    SITE.get_or_init(|| SiteConfig::from_json(SITE_JSON)).as_ref()
}
