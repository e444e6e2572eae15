//! Post page rendering.
//!
//! One component renders every page variant; [`PageFeatures`] switches the
//! optional parts:
//!
//! ```text
//! <head>     title, stylesheet, font stylesheet
//! logo       link back to "/"
//! cover      cover photo, title, excerpt, "Read more"
//! text       date, [reading time], tags, CMS body (verbatim)
//! [popup]    empty popup element + disclosure catalog JSON
//! [footer]   copyright
//! <script>   read-more scroll (+ popup behaviour)
//! ```

mod html;

use crate::{
    config::{PageFeatures, SiteConfig},
    content::Post,
    popup::DisclosureCatalog,
    scroll::{READ_MORE_OFFSET, ScrollRequest},
    utils::date::format_date,
};
use anyhow::{Context, Result};
use html::{HtmlWriter, escape, script_safe_json};

/// Client-side behaviour of a post page.
const POST_SCRIPT: &str = include_str!("../embed/post.js");

/// A post bound to the settings it renders with.
pub struct PostPage<'a> {
    post: &'a Post,
    config: &'a SiteConfig,
    features: PageFeatures,
    catalog: DisclosureCatalog,
}

impl<'a> PostPage<'a> {
    /// Page for `post` with the features configured in `[build.features]`.
    pub fn new(post: &'a Post, config: &'a SiteConfig) -> Self {
        Self {
            post,
            config,
            features: config.build.features,
            catalog: DisclosureCatalog::builtin(),
        }
    }

    pub const fn with_features(mut self, features: PageFeatures) -> Self {
        self.features = features;
        self
    }

    pub const fn with_catalog(mut self, catalog: DisclosureCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Render the complete HTML document.
    pub fn render(&self) -> Result<String> {
        let post = self.post;
        let base = &self.config.base;
        let date = format_date(&post.published_at, &self.config.build.date_format)
            .with_context(|| format!("Failed to format publish date of `{}`", post.slug))?;

        let mut w = HtmlWriter::new();
        w.line("<!DOCTYPE html>");
        w.open(format!(r#"<html lang="{}">"#, escape(&base.language)));

        // head
        w.open("<head>")
            .line(r#"<meta charset="UTF-8">"#)
            .line(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#)
            .line(format!("<title>{}</title>", escape(&post.title)))
            .line(format!(
                r#"<link rel="stylesheet" href="{}">"#,
                escape(&base.stylesheet)
            ));
        if let Some(font) = base.font_stylesheet.as_deref().filter(|f| !f.is_empty()) {
            w.line(format!(r#"<link rel="stylesheet" href="{}">"#, escape(font)));
        }
        w.close("</head>");

        w.open("<body>");

        // logo
        w.open(r#"<div class="logo-container">"#)
            .line(format!(
                r#"<a href="/"><img src="{}" alt="Home"></a>"#,
                escape(&base.logo)
            ))
            .close("</div>");

        let scroll = ScrollRequest::read_more(0.0);

        // cover
        w.open(r#"<div class="cover-container">"#)
            .line(format!(
                r#"<img class="cover-photo" src="{}" alt="Cover Photo">"#,
                escape(&post.cover_image())
            ))
            .text_element("h1", "cover-title", &post.title)
            .text_element("p", "cover-excerpt", &post.excerpt)
            .line(format!(
                r#"<button class="read-more-button" type="button" data-scroll-offset="{READ_MORE_OFFSET}" data-scroll-behavior="{}">Read more</button>"#,
                scroll.behavior.as_str()
            ))
            .close("</div>");

        // text section
        w.open(r#"<div class="text-section" id="text-section">"#);
        w.open(r#"<div class="metadata-container">"#)
            .text_element("p", "publication-date", &date);
        if self.features.reading_time {
            w.text_element(
                "p",
                "reading-time",
                &format!("{} min read", post.reading_time),
            );
        }
        for tag in &post.tags {
            w.line(format!(
                r#"<span class="publication-tags" data-tag="{0}">{0}</span>"#,
                escape(&tag.name)
            ));
        }
        w.close("</div>");
        // trusted CMS markup, embedded as-is
        w.line(format!(
            r#"<div class="markdown-content">{}</div>"#,
            post.html
        ));
        w.close("</div>");

        if self.features.popup {
            w.line(r#"<div class="translation-popup" id="translation-popup" style="position:absolute" hidden></div>"#)
                .line(format!(
                    r#"<script id="disclosure-catalog" type="application/json">{}</script>"#,
                    script_safe_json(&self.catalog.to_json())
                ));
        }

        if self.features.footer {
            w.open(r#"<footer class="site-footer">"#)
                .text_element("p", "copyright", &base.copyright)
                .close("</footer>");
        }

        w.open("<script>").line(POST_SCRIPT.trim_end()).close("</script>");

        w.close("</body>");
        w.close("</html>");
        Ok(w.finish())
    }
}

/// Render `post` with the configured features.
pub fn render_post(post: &Post, config: &SiteConfig) -> Result<String> {
    PostPage::new(post, config).render()
}
