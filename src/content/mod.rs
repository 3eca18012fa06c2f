//! Content module - handles posts, categories, and content loading

pub mod category;
mod error;
mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use category::build_index;
pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use loader::{CatalogReport, ContentLoader, SkippedPost};
pub use markdown::MarkdownRenderer;
pub use post::{Category, Post};
