//! Configuration file support for the site.
//!
//! Loads an optional `site.toml`. Every field has a default, so an empty or
//! missing file yields [`SiteConfig::default`].

use crate::error::{Result, SiteError};
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document title
    pub title: String,
    /// Directory (or URL prefix) images are served from
    pub asset_base: String,
    pub layout: LayoutConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            title: "CrimeStoppers".into(),
            asset_base: "assets".into(),
            layout: LayoutConfig::default(),
        }
    }
}

/// Responsive layout settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Breakpoint: widths at or above this mount the desktop presentation.
    pub desktop_min_width: u32,
    /// Width assumed when the viewport cannot be measured.
    pub fallback_width: u32,
    /// Minimum height of the desktop hero, also its assumed bottom edge
    /// until the element can be measured.
    pub hero_height: u32,
    /// Minimum height of the mobile hero.
    pub mobile_hero_height: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            desktop_min_width: 768,
            fallback_width: 768,
            hero_height: 700,
            mobile_hero_height: 350,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("desktop_min_width", self.desktop_min_width),
            ("fallback_width", self.fallback_width),
            ("hero_height", self.hero_height),
            ("mobile_hero_height", self.mobile_hero_height),
        ];
        for (field, value) in checks {
            if value == 0 {
                return Err(SiteError::InvalidLayout {
                    field,
                    reason: "must be greater than zero".into(),
                });
            }
        }
        Ok(())
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self> {
        let config: SiteConfig =
            toml::from_str(content).map_err(|source| SiteError::ConfigParse {
                path: origin.to_path_buf(),
                source,
            })?;
        config.layout.validate()?;
        Ok(config)
    }

    /// Load config from a specific path.
    /// Returns the default config if the file doesn't exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no site config, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| SiteError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Join an asset file name onto `asset_base`.
    pub fn asset(&self, file: &str) -> String {
        let base = self.asset_base.trim_end_matches('/');
        if base.is_empty() {
            file.to_string()
        } else {
            format!("{base}/{file}")
        }
    }
}
