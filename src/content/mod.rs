//! Content loading from the headless CMS.
//!
//! The build consumes content through two generation hooks:
//!
//! ```text
//! list_slugs()            ──► every post slug        (path enumeration)
//! get_post(slug, options) ──► one Post with its tags (per-path data fetch)
//! ```
//!
//! Both are hard failures: an unreachable CMS or an unknown slug fails
//! the page, and with it the build.

mod ghost;
mod types;

pub use ghost::GhostClient;
pub use types::{Post, Tag};

use thiserror::Error;

/// Options for a single-post fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Embed the post's tags in the response.
    pub include_tags: bool,
}

impl FetchOptions {
    pub const WITH_TAGS: Self = Self { include_tags: true };
}

/// Content retrieval errors
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("request to content API failed")]
    Http(#[from] reqwest::Error),

    #[error("content API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("post `{0}` not found")]
    NotFound(String),

    #[error("unexpected response from content API")]
    Decode(#[from] serde_json::Error),
}

/// Read-only access to published posts.
pub trait ContentSource: Sync {
    /// Enumerate every known post slug.
    fn list_slugs(&self) -> Result<Vec<String>, ContentError>;

    /// Fetch exactly one post by slug.
    fn get_post(&self, slug: &str, options: FetchOptions) -> Result<Post, ContentError>;
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory content source for tests.

    use super::*;
    use chrono::{TimeZone, Utc};
    use std::sync::Mutex;

    /// Build a post with sensible fixture values.
    pub fn post(slug: &str, tags: &[&str]) -> Post {
        Post {
            slug: slug.to_owned(),
            title: format!("Title of {slug}"),
            excerpt: format!("Excerpt of {slug}"),
            html: format!("<p>Body of {slug}</p>"),
            published_at: Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap(),
            reading_time: 4,
            tags: tags.iter().map(|name| Tag::new(*name)).collect(),
        }
    }

    /// Serves a fixed set of posts; slugs listed in `broken` fail to fetch.
    #[derive(Default)]
    pub struct MemorySource {
        pub posts: Vec<Post>,
        pub broken: Vec<String>,
        pub unreachable: bool,
        pub requests: Mutex<Vec<(String, FetchOptions)>>,
    }

    impl MemorySource {
        pub fn new(posts: Vec<Post>) -> Self {
            Self {
                posts,
                ..Self::default()
            }
        }
    }

    impl ContentSource for MemorySource {
        fn list_slugs(&self) -> Result<Vec<String>, ContentError> {
            if self.unreachable {
                return Err(ContentError::Status {
                    status: 503,
                    message: "unreachable".into(),
                });
            }
            let mut slugs: Vec<_> = self.posts.iter().map(|p| p.slug.clone()).collect();
            slugs.extend(self.broken.iter().cloned());
            Ok(slugs)
        }

        fn get_post(&self, slug: &str, options: FetchOptions) -> Result<Post, ContentError> {
            self.requests
                .lock()
                .unwrap()
                .push((slug.to_owned(), options));
            self.posts
                .iter()
                .find(|p| p.slug == slug)
                .cloned()
                .ok_or_else(|| ContentError::NotFound(slug.to_owned()))
        }
    }
}
