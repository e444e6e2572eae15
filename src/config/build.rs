//! `[build]` section configuration.
//!
//! Contains build settings: paths, minification, date format and page features.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Page Features
// ============================================================================

/// Optional parts of a post page.
///
/// One page component covers every variant; these flags switch the
/// optional parts on and off.
#[derive(Debug, Clone, Copy, Educe, Serialize, Deserialize, PartialEq, Eq)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PageFeatures {
    /// Translation-notice popup on tag click.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub popup: bool,

    /// Footer with the `[base].copyright` notice.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub footer: bool,

    /// "N min read" next to the publish date.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub reading_time: bool,
}

impl PageFeatures {
    /// Plain page: cover, metadata and body only.
    pub const fn plain() -> Self {
        Self {
            popup: false,
            footer: false,
            reading_time: false,
        }
    }
}

// ============================================================================
// Main BuildConfig
// ============================================================================

/// `[build]` section in slugpress.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// output = "public"
/// assets = "assets"
/// minify = true
///
/// [build.features]
/// popup = true
/// footer = false
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Static assets copied verbatim into the output (cover photos, CSS, logo).
    #[serde(default = "defaults::build::assets")]
    #[educe(Default = defaults::build::assets())]
    pub assets: PathBuf,

    /// Minify HTML output.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// Remove the output directory before building.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    /// `strftime` format of the publish date.
    #[serde(default = "defaults::build::date_format")]
    #[educe(Default = defaults::build::date_format())]
    pub date_format: String,

    /// Optional page parts.
    #[serde(default)]
    pub features: PageFeatures,
}
