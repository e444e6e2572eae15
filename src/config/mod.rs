//! Site configuration management for `slugpress.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[base]`    | Page chrome (language, logo, stylesheets)      |
//! | `[cms]`     | Content API connection (url, key, version)     |
//! | `[build]`   | Output paths, minify, date format, features    |
//! | `[serve]`   | Preview server (port, interface)               |
//!
//! Values are layered: config file, then environment (`GHOST_API_URL`,
//! `GHOST_CONTENT_API_KEY`), then CLI flags.
//!
//! # Example
//!
//! ```toml
//! [cms]
//! url = "https://demo.ghost.io"
//!
//! [build]
//! output = "public"
//! minify = true
//!
//! [build.features]
//! footer = false
//! ```

mod base;
mod build;
mod cms;
pub mod defaults;
mod error;
mod serve;

pub use build::PageFeatures;
pub use cms::CmsConfig;

use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;
use serve::ServeConfig;

use crate::{
    cli::{Cli, Commands},
    utils::date,
};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing slugpress.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Page chrome
    #[serde(default)]
    pub base: BaseConfig,

    /// Content API connection
    #[serde(default)]
    pub cms: CmsConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Preview server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf());
    }

    /// Apply `GHOST_API_URL` / `GHOST_CONTENT_API_KEY` from the process environment.
    pub fn update_with_env(&mut self) {
        self.cms.apply_env(|name| std::env::var(name).ok());
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        self.update_path_with_root(&root, cli);

        if let Some(args) = cli.build_args() {
            Self::update_option(&mut self.build.minify, args.minify.as_ref());
            self.build.clean |= args.clean;
        }

        if let Commands::Serve {
            interface, port, ..
        } = &cli.command
        {
            Self::update_option(&mut self.serve.interface, interface.as_ref());
            Self::update_option(&mut self.serve.port, port.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, cli: &Cli) {
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));

        // `~/site/public` style paths are allowed for output/assets
        self.build.output = Self::normalize_path(&root.join(Self::expand_tilde(&self.build.output)));
        self.build.assets = Self::normalize_path(&root.join(Self::expand_tilde(&self.build.assets)));
    }

    /// Expand a leading `~` to the home directory
    fn expand_tilde(path: &Path) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before fetching anything
    pub fn validate(&self) -> Result<()> {
        if self.cms.url.trim().is_empty() {
            bail!(ConfigError::Validation(format!(
                "[cms.url] is required (or set {})",
                cms::ENV_API_URL
            )));
        }

        if !self.cms.url.starts_with("http://") && !self.cms.url.starts_with("https://") {
            bail!(ConfigError::Validation(
                "[cms.url] must start with http:// or https://".into()
            ));
        }

        if self.cms.key.trim().is_empty() {
            bail!(ConfigError::Validation(format!(
                "[cms.key] is required (or set {})",
                cms::ENV_API_KEY
            )));
        }

        if self.cms.timeout == 0 {
            bail!(ConfigError::Validation(
                "[cms.timeout] must be greater than zero".into()
            ));
        }

        if self.build.date_format.trim().is_empty() {
            bail!(ConfigError::Validation(
                "[build.date_format] must not be empty".into()
            ));
        }

        if date::check_format(&self.build.date_format).is_err() {
            bail!(ConfigError::Validation(format!(
                "[build.date_format] `{}` is not a valid strftime pattern",
                self.build.date_format
            )));
        }

        self.validate_paths()
    }

    /// Reject an assets directory that equals, contains or sits inside the output.
    ///
    /// Copying assets onto themselves truncates them, and `clean` would
    /// delete assets stored under the output directory.
    pub fn validate_paths(&self) -> Result<()> {
        let assets = &self.build.assets;
        let output = &self.build.output;

        if assets == output || assets.starts_with(output) || output.starts_with(assets) {
            bail!(ConfigError::Validation(format!(
                "[build.assets] `{}` must not overlap [build.output] `{}`",
                assets.display(),
                output.display()
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn valid_config() -> SiteConfig {
        SiteConfig::from_str(
            r#"
            [cms]
            url = "https://demo.ghost.io"
            key = "22444f78447824223cefc48062"
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_from_str_empty_uses_defaults() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.cms.version, "v4.0");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let invalid_config = r#"
            [cms
            url = "https://demo.ghost.io"
        "#;
        assert!(SiteConfig::from_str(invalid_config).is_err());
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(SiteConfig::from_str("[deploy]\nprovider = \"github\"").is_err());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SiteConfig::from_path(Path::new("/nonexistent/slugpress.toml")).unwrap_err();
        assert!(format!("{err}").contains("IO error"));
    }

    #[test]
    fn test_validate_ok() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_missing_url() {
        let mut config = valid_config();
        config.cms.url.clear();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[cms.url]"));
        assert!(err.contains("GHOST_API_URL"));
    }

    #[test]
    fn test_validate_bad_scheme() {
        let mut config = valid_config();
        config.cms.url = "ftp://demo.ghost.io".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_missing_key() {
        let mut config = valid_config();
        config.cms.key = "   ".into();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("GHOST_CONTENT_API_KEY"));
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = valid_config();
        config.cms.timeout = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_date_format() {
        let mut config = valid_config();
        config.build.date_format = "%Y-%Q".into();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[build.date_format]"));
    }

    #[test]
    fn test_validate_assets_same_as_output() {
        let mut config = valid_config();
        config.build.assets = PathBuf::from("/site/public");
        config.build.output = PathBuf::from("/site/public");
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[build.assets]"));
    }

    #[test]
    fn test_validate_assets_nested_either_way() {
        let mut config = valid_config();
        config.build.output = PathBuf::from("/site/public");
        config.build.assets = PathBuf::from("/site/public/static");
        assert!(config.validate().is_err());

        config.build.output = PathBuf::from("/site/assets/out");
        config.build.assets = PathBuf::from("/site/assets");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_sibling_dirs_with_shared_prefix() {
        let mut config = valid_config();
        config.build.output = PathBuf::from("/site/public");
        config.build.assets = PathBuf::from("/site/public-assets");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_update_with_cli_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = Cli::parse_from([
            "slugpress", "--root", root, "-o", "dist", "serve", "--minify", "false", "--clean",
            "--port", "9000",
        ]);

        let mut config = valid_config();
        config.update_with_cli(&cli);

        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.build.output, root.join("dist"));
        assert_eq!(config.build.assets, root.join("assets"));
        assert_eq!(config.config_path, root.join("slugpress.toml"));
        assert!(!config.build.minify);
        assert!(config.build.clean);
        assert_eq!(config.serve.port, 9000);
        assert_eq!(config.serve.interface, "127.0.0.1");
    }

    #[test]
    fn test_update_with_cli_keeps_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = Cli::parse_from(["slugpress", "--root", root, "build"]);

        let mut config = valid_config();
        config.build.minify = false;
        config.update_with_cli(&cli);

        assert!(!config.build.minify);
        assert!(!config.build.clean);
        assert_eq!(config.build.output, dir.path().canonicalize().unwrap().join("public"));
    }
}
