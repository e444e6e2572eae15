//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn language() -> String {
        "en".into()
    }

    pub fn logo() -> String {
        "/logo-white.svg".into()
    }

    pub fn stylesheet() -> String {
        "/blog-style.css".into()
    }

    pub fn font_stylesheet() -> Option<String> {
        Some("https://use.typekit.net/zkz4rdl.css".into())
    }
}

// ============================================================================
// [cms] Section Defaults
// ============================================================================

pub mod cms {
    pub fn version() -> String {
        "v4.0".into()
    }

    pub fn timeout() -> u64 {
        30
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn assets() -> PathBuf {
        "assets".into()
    }

    pub fn date_format() -> String {
        "%-m/%-d/%Y".into()
    }
}

// ============================================================================
// [serve] Section Defaults
// ============================================================================

pub mod serve {
    pub fn interface() -> String {
        "127.0.0.1".into()
    }

    pub fn port() -> u16 {
        5277
    }
}
