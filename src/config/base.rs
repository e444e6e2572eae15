//! `[base]` section configuration.
//!
//! Site-wide page chrome: language, logo, stylesheets and footer text.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in slugpress.toml - page chrome shared by every post.
///
/// # Example
/// ```toml
/// [base]
/// language = "en"
/// logo = "/logo-white.svg"
/// stylesheet = "/blog-style.css"
/// copyright = "2025 Alice"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// BCP 47 language code for the `<html lang>` attribute.
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,

    /// Logo image linking back to the home page.
    #[serde(default = "defaults::base::logo")]
    #[educe(Default = defaults::base::logo())]
    pub logo: String,

    /// Site stylesheet URL.
    #[serde(default = "defaults::base::stylesheet")]
    #[educe(Default = defaults::base::stylesheet())]
    pub stylesheet: String,

    /// External font stylesheet URL. Set to `""` to omit it.
    #[serde(default = "defaults::base::font_stylesheet")]
    #[educe(Default = defaults::base::font_stylesheet())]
    pub font_stylesheet: Option<String>,

    /// Copyright notice for the page footer.
    #[serde(default)]
    pub copyright: String,
}
