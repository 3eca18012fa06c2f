//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, shown by the CLI
    pub title: String,

    /// Content root, relative to the base directory
    pub content_dir: String,

    /// Extension of post files, without the dot
    pub extension: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "PostShelf".to_string(),
            content_dir: "content".to_string(),
            extension: "md".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "PostShelf");
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.extension, "md");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
content_dir: posts
author: Test User
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.content_dir, "posts");
        assert_eq!(config.extension, "md");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = SiteConfig::load(dir.path().join("_config.yml")).unwrap_err();
        assert!(err.to_string().contains("_config.yml"));
    }
}
