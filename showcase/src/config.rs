//! Site configuration: brand, links, contract address, timings and the
//! video catalog.
//!
//! Content lives in JSON so it can change without touching component code.
//! The document is parsed and validated once; components receive the result
//! by reference.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogError, VideoEntry};
use crate::consts::{COPIED_INDICATOR_MS, INITIAL_VOLUME, PREVIEW_OFFSET_SECS, SCAN_PERIOD_MS};
use crate::player::PlayerSettings;
use crate::supervisor::RetryPolicy;

/// Errors produced while loading the site configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("site config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("invalid timing: {0}")]
    Timing(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub logo_url: String,
    pub logo_alt: String,
}

/// External link shown in the navbar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Timing and level tunables. Missing fields take the crate defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub preview_offset_secs: f64,
    pub initial_volume: f64,
    pub scan_period_ms: u64,
    pub copied_indicator_ms: u64,
    pub retry: RetryPolicy,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            preview_offset_secs: PREVIEW_OFFSET_SECS,
            initial_volume: INITIAL_VOLUME,
            scan_period_ms: SCAN_PERIOD_MS,
            copied_indicator_ms: COPIED_INDICATOR_MS,
            retry: RetryPolicy::default(),
        }
    }
}

impl Timing {
    #[must_use]
    pub fn scan_period(&self) -> Duration {
        Duration::from_millis(self.scan_period_ms)
    }

    #[must_use]
    pub fn copied_indicator(&self) -> Duration {
        Duration::from_millis(self.copied_indicator_ms)
    }

    #[must_use]
    pub fn player_settings(&self) -> PlayerSettings {
        PlayerSettings { preview_offset_secs: self.preview_offset_secs, initial_volume: self.initial_volume }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.preview_offset_secs.is_finite() || self.preview_offset_secs < 0.0 {
            return Err(ConfigError::Timing(format!(
                "preview_offset_secs must be a non-negative number, got {}",
                self.preview_offset_secs
            )));
        }
        if !(0.0..=1.0).contains(&self.initial_volume) {
            return Err(ConfigError::Timing(format!(
                "initial_volume must be within 0..=1, got {}",
                self.initial_volume
            )));
        }
        if self.scan_period_ms == 0 {
            return Err(ConfigError::Timing("scan_period_ms must be positive".to_owned()));
        }
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::Timing("retry.max_attempts must be positive".to_owned()));
        }
        Ok(())
    }
}

/// Everything the page renders that is content rather than behavior.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub brand: Brand,
    pub links: Vec<NavLink>,
    pub contract_address: String,
    pub featured_label: String,
    pub section_title: String,
    pub timing: Timing,
    pub catalog: Catalog,
}

#[derive(Deserialize)]
struct RawSiteConfig {
    brand: Brand,
    #[serde(default)]
    links: Vec<NavLink>,
    contract_address: String,
    #[serde(default = "default_featured_label")]
    featured_label: String,
    #[serde(default = "default_section_title")]
    section_title: String,
    #[serde(default)]
    timing: Timing,
    catalog: Vec<VideoEntry>,
}

fn default_featured_label() -> String {
    "TOP 10".to_owned()
}

fn default_section_title() -> String {
    "What to Watch".to_owned()
}

impl SiteConfig {
    /// Parse and validate a JSON site document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, [`ConfigError::Catalog`]
    /// when the catalog violates its invariants, and [`ConfigError::Timing`]
    /// for out-of-range tunables.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let raw: RawSiteConfig = serde_json::from_str(raw)?;
        raw.timing.validate()?;
        let catalog = Catalog::new(raw.catalog)?;
        Ok(Self {
            brand: raw.brand,
            links: raw.links,
            contract_address: raw.contract_address,
            featured_label: raw.featured_label,
            section_title: raw.section_title,
            timing: raw.timing,
            catalog,
        })
    }
}
