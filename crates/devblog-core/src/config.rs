//! Site configuration.
//!
//! Every field has a default matching the published site, so an empty JSON
//! object (or no file at all) is a valid configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

/// Tunables for the interactive parts of the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Quiet period before a search term is applied
    pub search_quiet_ms: u64,
    /// Throttle interval of the navbar style handler (~60fps)
    pub navbar_throttle_ms: u64,
    /// Throttle interval of the active section handler
    pub section_throttle_ms: u64,
    /// Throttle interval of the back-to-top handler
    pub back_to_top_throttle_ms: u64,
    /// Scroll offset past which the navbar turns solid
    pub navbar_solid_after: f64,
    /// Scroll offset past which the back-to-top button shows
    pub back_to_top_after: f64,
    /// Added to the scroll offset when probing for the active section
    pub section_probe_offset: f64,
    /// Space left above a section when scrolling to an anchor
    pub anchor_offset: f64,
    /// Profile URL encoded in the certificates QR code
    pub qr_target: String,
    /// Edge length of the QR code in pixels
    pub qr_size: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            search_quiet_ms: 300,
            navbar_throttle_ms: 16,
            section_throttle_ms: 100,
            back_to_top_throttle_ms: 100,
            navbar_solid_after: 100.0,
            back_to_top_after: 300.0,
            section_probe_offset: 100.0,
            anchor_offset: 70.0,
            qr_target: "https://www.credly.com/users/2207-nguy-n-minh-nh-t".to_string(),
            qr_size: 150,
        }
    }
}

impl SiteConfig {
    /// Parse a JSON configuration. Missing fields take their defaults.
    pub fn from_json(json: &str) -> SiteResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn load(path: &Path) -> SiteResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values that would make the page misbehave.
    pub fn validate(&self) -> SiteResult<()> {
        if self.qr_target.trim().is_empty() {
            return Err(SiteError::Config("qr_target must not be empty".to_string()));
        }
        if self.qr_size == 0 {
            return Err(SiteError::Config("qr_size must be positive".to_string()));
        }
        for (name, value) in [
            ("navbar_solid_after", self.navbar_solid_after),
            ("back_to_top_after", self.back_to_top_after),
            ("section_probe_offset", self.section_probe_offset),
            ("anchor_offset", self.anchor_offset),
        ] {
            if !value.is_finite() {
                return Err(SiteError::Config(format!("{} must be a finite number", name)));
            }
        }
        Ok(())
    }

    pub fn search_quiet(&self) -> Duration {
        Duration::from_millis(self.search_quiet_ms)
    }

    pub fn navbar_throttle(&self) -> Duration {
        Duration::from_millis(self.navbar_throttle_ms)
    }

    pub fn section_throttle(&self) -> Duration {
        Duration::from_millis(self.section_throttle_ms)
    }

    pub fn back_to_top_throttle(&self) -> Duration {
        Duration::from_millis(self.back_to_top_throttle_ms)
    }
}
