//! postshelf: a minimal content engine
//!
//! Turns a directory of text files with YAML front-matter into an ordered
//! catalog of posts, with lookup by slug and by category. Rendering and
//! serving are left to the caller.

pub mod commands;
pub mod config;
pub mod content;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{Category, ContentError, ContentLoader, Post};

/// The main application handle
#[derive(Debug, Clone)]
pub struct PostShelf {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content root
    pub content_dir: PathBuf,
}

impl PostShelf {
    /// Create a new instance from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        Self {
            config,
            base_dir,
            content_dir,
        }
    }

    /// Loader bound to this site's content root
    pub fn loader(&self) -> ContentLoader {
        ContentLoader::from_config(&self.base_dir, &self.config)
    }

    /// Load every post, newest first
    pub fn load_catalog(&self) -> Result<Vec<Post>, ContentError> {
        self.loader().load_catalog()
    }

    /// Load a single post by slug
    pub fn load_post(&self, slug: &str) -> Result<Post, ContentError> {
        self.loader().load_post(slug)
    }

    /// Load the posts in one category, newest first
    pub fn load_catalog_by_category(&self, name: &str) -> Result<Vec<Post>, ContentError> {
        self.loader().load_catalog_by_category(name)
    }

    /// Count posts per category, ordered by name
    pub fn build_category_index(posts: &[Post]) -> Vec<Category> {
        content::build_index(posts)
    }
}
