//! Post and tag records as delivered by the content API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Directory (under the site root) holding per-post cover images.
pub const COVER_DIR: &str = "/cover-photos/";

/// A published post.
///
/// `excerpt`, `html` and `tags` may be absent or `null` in the CMS
/// response; they decode to empty values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,
    /// Pre-rendered body markup. Trusted, embedded verbatim.
    #[serde(default, deserialize_with = "null_as_default")]
    pub html: String,
    pub published_at: DateTime<Utc>,
    /// Estimated reading time in minutes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub reading_time: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
}

impl Post {
    /// Cover image URL, derived from the slug.
    pub fn cover_image(&self) -> String {
        format!("{COVER_DIR}{}-cover.png", self.slug)
    }
}

/// A post tag. Its `name` doubles as a disclosure catalog key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
