//! Site building orchestration.
//!
//! Drives the two content hooks and writes one page per post.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── prepare_output()   ──► clear output dir (if `clean`)
//!     │
//!     ├── list_slugs()       ──► every post slug
//!     │
//!     └── rayon::join
//!             ├── build_page()   ──► fetch + render + write, per slug in parallel
//!             │                      {output}/{slug}/index.html
//!             └── copy_asset()   ──► cover photos, stylesheet, logo
//! ```

use crate::{
    config::SiteConfig,
    content::{ContentSource, FetchOptions},
    log,
    logger::ProgressBars,
    page::render_post,
    utils::minify::minify_html,
};
use anyhow::{Context, Result, anyhow, bail};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
};
use walkdir::WalkDir;

/// Files never copied from the assets directory
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Page file written inside each slug directory
const PAGE_FILE: &str = "index.html";

/// Fetch every post, render it and copy static assets.
///
/// Returns the slugs that were written. The first failure is logged and
/// fails the whole build.
pub fn build_site(config: &SiteConfig, source: &dyn ContentSource) -> Result<Vec<String>> {
    let output = &config.build.output;
    let assets = &config.build.assets;

    config.validate_paths()?;
    prepare_output(output, config.build.clean)?;

    log!("fetch"; "listing posts...");
    let slugs = source
        .list_slugs()
        .context("Failed to enumerate post slugs")?;
    log!("fetch"; "found {} posts", slugs.len());

    let asset_files = collect_all_files(assets);

    let progress = ProgressBars::new(&[("posts", slugs.len()), ("assets", asset_files.len())]);
    let has_error = AtomicBool::new(false);

    let (pages_result, assets_result) = rayon::join(
        || {
            slugs.par_iter().try_for_each(|slug| {
                if has_error.load(Ordering::Relaxed) {
                    return Err(anyhow!("Aborted"));
                }
                if let Err(e) = build_page(slug, config, source) {
                    if !has_error.swap(true, Ordering::Relaxed) {
                        log!("error"; "{slug}: {:#}", e);
                    }
                    return Err(anyhow!("Build failed"));
                }
                progress.inc(0);
                Ok(())
            })
        },
        || {
            asset_files.par_iter().try_for_each(|path| {
                if has_error.load(Ordering::Relaxed) {
                    return Err(anyhow!("Aborted"));
                }
                if let Err(e) = copy_asset(path, assets, output) {
                    if !has_error.swap(true, Ordering::Relaxed) {
                        log!("error"; "{}: {:#}", path.display(), e);
                    }
                    return Err(anyhow!("Build failed"));
                }
                progress.inc(1);
                Ok(())
            })
        },
    );

    progress.finish();

    pages_result?;
    assets_result?;

    if slugs.is_empty() {
        log!("warn"; "no posts published, output has no pages");
    } else {
        log!("build"; "done");
    }

    Ok(slugs)
}

/// Enumerate post slugs without building anything.
pub fn list_paths(source: &dyn ContentSource) -> Result<Vec<String>> {
    source
        .list_slugs()
        .context("Failed to enumerate post slugs")
}

/// Create the output directory, clearing it first when `clean` is set.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

/// Fetch, render and write the page for one slug.
fn build_page(slug: &str, config: &SiteConfig, source: &dyn ContentSource) -> Result<PathBuf> {
    let dest = page_path(&config.build.output, slug)?;

    let post = source
        .get_post(slug, FetchOptions::WITH_TAGS)
        .with_context(|| format!("Failed to fetch post `{slug}`"))?;
    if post.slug != slug {
        bail!("requested `{slug}` but content API returned `{}`", post.slug);
    }

    let html = render_post(&post, config)?;
    let html = minify_html(html.as_bytes(), config);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&dest, &*html).with_context(|| format!("Failed to write {}", dest.display()))?;
    Ok(dest)
}

/// `{output}/{slug}/index.html`, rejecting slugs that would leave `output`.
fn page_path(output: &Path, slug: &str) -> Result<PathBuf> {
    let invalid = slug.is_empty()
        || slug == "."
        || slug == ".."
        || slug.contains(['/', '\\']);
    if invalid {
        bail!("invalid post slug `{slug}`");
    }
    Ok(output.join(slug).join(PAGE_FILE))
}

/// Copy one asset, keeping its path relative to the assets directory.
fn copy_asset(path: &Path, assets: &Path, output: &Path) -> Result<()> {
    let relative = path
        .strip_prefix(assets)
        .with_context(|| format!("{} is outside {}", path.display(), assets.display()))?;
    let dest = output.join(relative);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::copy(path, &dest).with_context(|| {
        format!("Failed to copy {} to {}", path.display(), dest.display())
    })?;
    Ok(())
}

/// Recursively collect every file under `dir`. A missing directory yields nothing.
pub fn collect_all_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(walkdir::DirEntry::into_path)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::testing::{MemorySource, post};
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.output = dir.path().join("public");
        config.build.assets = dir.path().join("assets");
        config.build.minify = false;
        config
    }

    #[test]
    fn test_writes_one_page_per_slug() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        let source = MemorySource::new(vec![post("first", &["en"]), post("second", &[])]);

        let mut built = build_site(&config, &source).unwrap();
        built.sort();
        assert_eq!(built, ["first", "second"]);

        let first = fs::read_to_string(config.build.output.join("first/index.html")).unwrap();
        assert!(first.contains("<p>Body of first</p>"));
        assert!(first.contains(r#"data-tag="en""#));
        let second = fs::read_to_string(config.build.output.join("second/index.html")).unwrap();
        assert!(second.contains("<title>Title of second</title>"));
    }

    #[test]
    fn test_fetches_each_post_with_tags() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        let source = MemorySource::new(vec![post("a", &[]), post("b", &[])]);

        build_site(&config, &source).unwrap();

        let requests = source.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|(_, options)| *options == FetchOptions::WITH_TAGS));
    }

    #[test]
    fn test_failed_fetch_fails_build() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        let mut source = MemorySource::new(vec![post("ok", &[])]);
        source.broken.push("gone".into());

        assert!(build_site(&config, &source).is_err());
        assert!(!config.build.output.join("gone/index.html").exists());
    }

    #[test]
    fn test_unreachable_source_fails_build() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        let source = MemorySource {
            unreachable: true,
            ..MemorySource::default()
        };

        let err = build_site(&config, &source).unwrap_err();
        assert!(format!("{err:#}").contains("enumerate"));
    }

    #[test]
    fn test_mismatched_slug_fails() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        let wrong = post("other", &[]);

        struct Renamed(crate::content::Post);
        impl ContentSource for Renamed {
            fn list_slugs(&self) -> Result<Vec<String>, crate::content::ContentError> {
                Ok(vec!["asked".into()])
            }
            fn get_post(
                &self,
                _slug: &str,
                _options: FetchOptions,
            ) -> Result<crate::content::Post, crate::content::ContentError> {
                Ok(self.0.clone())
            }
        }

        assert!(build_site(&config, &Renamed(wrong)).is_err());
    }

    #[test]
    fn test_no_posts_builds_nothing() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        let built = build_site(&config, &MemorySource::default()).unwrap();
        assert!(built.is_empty());
        assert!(config.build.output.is_dir());
    }

    #[test]
    fn test_copies_assets() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        let covers = config.build.assets.join("cover-photos");
        fs::create_dir_all(&covers).unwrap();
        fs::write(covers.join("a-cover.png"), b"png").unwrap();
        fs::write(config.build.assets.join("blog-style.css"), "body{}").unwrap();
        fs::write(config.build.assets.join(".DS_Store"), "").unwrap();

        build_site(&config, &MemorySource::new(vec![post("a", &[])])).unwrap();

        let out = &config.build.output;
        assert_eq!(fs::read(out.join("cover-photos/a-cover.png")).unwrap(), b"png");
        assert!(out.join("blog-style.css").is_file());
        assert!(!out.join(".DS_Store").exists());
    }

    #[test]
    fn test_clean_removes_stale_pages() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        let stale = config.build.output.join("old-post");
        fs::create_dir_all(&stale).unwrap();
        fs::write(stale.join("index.html"), "stale").unwrap();

        build_site(&config, &MemorySource::default()).unwrap();
        assert!(stale.exists());

        config.build.clean = true;
        build_site(&config, &MemorySource::default()).unwrap();
        assert!(!stale.exists());
    }

    #[test]
    fn test_minified_output() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config.build.minify = true;

        build_site(&config, &MemorySource::new(vec![post("m", &[])])).unwrap();
        let html = fs::read_to_string(config.build.output.join("m/index.html")).unwrap();
        assert!(!html.contains("\n  <div"));
        assert!(html.contains("Body of m"));
    }

    #[test]
    fn test_assets_equal_to_output_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        let site = dir.path().join("site");
        fs::create_dir_all(&site).unwrap();
        fs::write(site.join("blog-style.css"), "body{color:red}").unwrap();
        config.build.assets = site.clone();
        config.build.output = site.clone();

        assert!(build_site(&config, &MemorySource::new(vec![post("a", &[])])).is_err());
        assert_eq!(
            fs::read_to_string(site.join("blog-style.css")).unwrap(),
            "body{color:red}"
        );
    }

    #[test]
    fn test_clean_never_removes_assets_inside_output() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config.build.assets = config.build.output.join("static");
        config.build.clean = true;
        fs::create_dir_all(&config.build.assets).unwrap();
        fs::write(config.build.assets.join("logo-white.svg"), "<svg/>").unwrap();

        assert!(build_site(&config, &MemorySource::default()).is_err());
        assert!(config.build.assets.join("logo-white.svg").is_file());
    }

    #[test]
    fn test_page_path_rejects_escaping_slugs() {
        let out = Path::new("/site/public");
        assert_eq!(
            page_path(out, "hello-world").unwrap(),
            Path::new("/site/public/hello-world/index.html")
        );
        for slug in ["", ".", "..", "a/b", "..\\x"] {
            assert!(page_path(out, slug).is_err(), "{slug:?}");
        }
    }

    #[test]
    fn test_list_paths() {
        let source = MemorySource::new(vec![post("a", &[]), post("b", &[])]);
        assert_eq!(list_paths(&source).unwrap(), ["a", "b"]);
    }
}
