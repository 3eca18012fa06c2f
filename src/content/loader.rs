//! Content loader - loads posts from the content root
//!
//! Every call reads straight from disk. Nothing is cached between calls, so
//! edits to the content root show up on the next load.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::category::filter_by_category;
use super::{ContentError, FrontMatter, Post};
use crate::config::SiteConfig;

pub type Result<T> = std::result::Result<T, ContentError>;

/// A document that was skipped while building the catalog
#[derive(Debug)]
pub struct SkippedPost {
    pub slug: String,
    pub error: ContentError,
}

/// Outcome of a catalog scan
#[derive(Debug, Default)]
pub struct CatalogReport {
    /// Loaded posts, newest date first
    pub posts: Vec<Post>,
    /// Documents that failed to load, in file name order
    pub skipped: Vec<SkippedPost>,
}

/// Loads posts from a single content directory
#[derive(Debug, Clone)]
pub struct ContentLoader {
    root: PathBuf,
    suffix: String,
}

impl ContentLoader {
    /// Create a loader for `root`, picking up files with `extension`
    ///
    /// The extension may be given with or without its leading dot.
    pub fn new<P: Into<PathBuf>>(root: P, extension: &str) -> Self {
        Self {
            root: root.into(),
            suffix: format!(".{}", extension.trim_start_matches('.')),
        }
    }

    /// Create a loader from site configuration, resolving the content
    /// directory against `base_dir`
    pub fn from_config(base_dir: &Path, config: &SiteConfig) -> Self {
        Self::new(base_dir.join(&config.content_dir), &config.extension)
    }

    /// The content root this loader reads from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Source path for a slug
    pub fn post_path(&self, slug: &str) -> PathBuf {
        self.root.join(format!("{}{}", slug, self.suffix))
    }

    /// Load a single post by slug
    pub fn load_post(&self, slug: &str) -> Result<Post> {
        let path = self.post_path(slug);
        let bytes = fs::read(&path).map_err(|source| ContentError::NotFound {
            slug: slug.to_string(),
            path: path.clone(),
            source,
        })?;
        // Stray non UTF-8 bytes become U+FFFD instead of dropping the post
        let source = String::from_utf8_lossy(&bytes);

        let (fm, body) =
            FrontMatter::parse(&source).map_err(|source| ContentError::Parse { path, source })?;

        Ok(Post::from_parts(slug, fm.as_ref(), body))
    }

    /// Load every post in the content root, newest first
    ///
    /// Documents that fail to load are logged and left out.
    pub fn load_catalog(&self) -> Result<Vec<Post>> {
        self.scan().map(|report| report.posts)
    }

    /// Load the catalog and keep only posts in category `name`
    ///
    /// No match is an empty list, not an error.
    pub fn load_catalog_by_category(&self, name: &str) -> Result<Vec<Post>> {
        let posts = self.load_catalog()?;
        Ok(filter_by_category(posts, name))
    }

    /// Load every post in the content root, reporting the ones that failed
    pub fn scan(&self) -> Result<CatalogReport> {
        match fs::metadata(&self.root) {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ContentError::RootNotFound(self.root.clone()));
            }
            Err(e) => return Err(ContentError::Io(self.root.clone(), e)),
        }

        let names = self.list_entries()?;
        if names.is_empty() {
            return Err(ContentError::Empty(self.root.clone()));
        }

        let mut report = CatalogReport::default();

        for name in &names {
            let Some(name) = name.to_str() else {
                tracing::debug!("Skipping non UTF-8 file name {:?}", name);
                continue;
            };
            let Some(slug) = name.strip_suffix(self.suffix.as_str()) else {
                continue;
            };

            match self.load_post(slug) {
                Ok(post) => report.posts.push(post),
                Err(error) => {
                    tracing::warn!("Failed to load post {}: {}", slug, error);
                    report.skipped.push(SkippedPost {
                        slug: slug.to_string(),
                        error,
                    });
                }
            }
        }

        if report.posts.is_empty() {
            return Err(ContentError::Empty(self.root.clone()));
        }

        // Sort by date descending (newest first), ties keep file name order
        report.posts.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!(
            "Loaded {} posts from {:?} ({} skipped)",
            report.posts.len(),
            self.root,
            report.skipped.len()
        );

        Ok(report)
    }

    /// File names directly under the root, sorted
    fn list_entries(&self) -> Result<Vec<OsString>> {
        let io_err = |e| ContentError::Io(self.root.clone(), e);

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(io_err)? {
            names.push(entry.map_err(io_err)?.file_name());
        }
        names.sort();

        Ok(names)
    }
}
