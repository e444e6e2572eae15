//! Ghost Content API client.
//!
//! Two endpoints are used:
//!
//! | Hook        | Request                                                    |
//! |-------------|------------------------------------------------------------|
//! | list slugs  | `GET /ghost/api/content/posts/?fields=slug&limit=all`      |
//! | get post    | `GET /ghost/api/content/posts/slug/{slug}/?include=tags`   |
//!
//! Every request carries the content key as `?key=` and the API version as
//! `Accept-Version`. There are no retries; a failure is final.

use super::{ContentError, ContentSource, FetchOptions, Post};
use crate::config::CmsConfig;
use reqwest::{StatusCode, blocking::Client};
use serde::{Deserialize, de::DeserializeOwned};
use std::time::Duration;

/// Path of the content API below the site URL.
const CONTENT_API_PATH: &str = "ghost/api/content";

/// Blocking client for one Ghost site.
pub struct GhostClient {
    client: Client,
    base_url: String,
    key: String,
    version: String,
}

/// `{"posts": [...]}` envelope of post endpoints.
#[derive(Deserialize)]
struct PostsEnvelope<T> {
    posts: Vec<T>,
}

/// Browse result with only the `slug` field requested.
#[derive(Deserialize)]
struct SlugOnly {
    slug: String,
}

/// `{"errors": [{"message": ..}]}` body of failed requests.
#[derive(Deserialize)]
struct ErrorEnvelope {
    errors: Vec<ErrorItem>,
}

#[derive(Deserialize)]
struct ErrorItem {
    message: String,
}

impl GhostClient {
    pub fn new(config: &CmsConfig) -> Result<Self, ContentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_owned(),
            key: config.key.clone(),
            version: config.version.clone(),
        })
    }

    /// Absolute URL of a content API resource.
    fn endpoint(&self, resource: &str) -> String {
        format!("{}/{CONTENT_API_PATH}/{resource}", self.base_url)
    }

    /// Issue a GET and decode the JSON body.
    ///
    /// A 404 maps to `NotFound(not_found)` when given.
    fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        not_found: Option<&str>,
    ) -> Result<T, ContentError> {
        let response = self
            .client
            .get(url)
            .header("Accept-Version", &self.version)
            .query(&[("key", self.key.as_str())])
            .query(query)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if status == StatusCode::NOT_FOUND
            && let Some(slug) = not_found
        {
            return Err(ContentError::NotFound(slug.to_owned()));
        }

        if !status.is_success() {
            return Err(ContentError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl ContentSource for GhostClient {
    fn list_slugs(&self) -> Result<Vec<String>, ContentError> {
        let envelope: PostsEnvelope<SlugOnly> = self.get(
            &self.endpoint("posts/"),
            &[("fields", "slug"), ("limit", "all")],
            None,
        )?;
        Ok(envelope.posts.into_iter().map(|p| p.slug).collect())
    }

    fn get_post(&self, slug: &str, options: FetchOptions) -> Result<Post, ContentError> {
        let url = self.endpoint(&format!("posts/slug/{}/", urlencoding::encode(slug)));
        let query: &[(&str, &str)] = if options.include_tags {
            &[("include", "tags")]
        } else {
            &[]
        };

        let envelope: PostsEnvelope<Post> = self.get(&url, query, Some(slug))?;
        envelope
            .posts
            .into_iter()
            .next()
            .ok_or_else(|| ContentError::NotFound(slug.to_owned()))
    }
}

/// First error message of a failure body, or the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|e| e.errors.into_iter().next())
        .map(|e| e.message)
        .unwrap_or_else(|| body.trim().to_owned())
}
