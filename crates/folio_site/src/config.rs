//! Page configuration
//!
//! The `[page]` table of `folio.toml`. Every field is optional; unset
//! thresholds and copy counts fall back to the chosen [`Variant`].

use crate::error::Result;
use folio_theme::ColorScheme;
use serde::{Deserialize, Serialize};

/// Layout revision of the page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Frosted-glass navbar that appears after a longer scroll
    #[default]
    Glass,
    /// Earlier revision: navbar switches almost immediately, denser marquee
    Classic,
}

impl Variant {
    pub fn default_threshold(self) -> f32 {
        match self {
            Variant::Glass => 50.0,
            Variant::Classic => 20.0,
        }
    }

    pub fn default_copies(self) -> usize {
        match self {
            Variant::Glass => 2,
            Variant::Classic => 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub variant: Variant,

    /// Scroll offset (px) at which the navbar switches style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_threshold: Option<f32>,

    /// Number of skill-list copies in the marquee strip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marquee_copies: Option<usize>,

    /// Time for the marquee to travel one copy
    #[serde(default = "default_marquee_duration")]
    pub marquee_duration_ms: u32,

    #[serde(default)]
    pub default_scheme: ColorScheme,

    /// Swallow the context menu and devtools shortcuts
    #[serde(default)]
    pub suppress_devtools: bool,
}

fn default_marquee_duration() -> u32 {
    20_000
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            scroll_threshold: None,
            marquee_copies: None,
            marquee_duration_ms: default_marquee_duration(),
            default_scheme: ColorScheme::default(),
            suppress_devtools: false,
        }
    }
}

impl SiteConfig {
    pub fn variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn threshold(&self) -> f32 {
        self.scroll_threshold
            .unwrap_or_else(|| self.variant.default_threshold())
    }

    pub fn copies(&self) -> usize {
        self.marquee_copies
            .unwrap_or_else(|| self.variant.default_copies())
    }
}
