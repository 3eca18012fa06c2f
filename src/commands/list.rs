//! List site content

use anyhow::Result;
use std::fmt::Write as _;

use crate::content::{build_index, Category, Post};
use crate::PostShelf;

/// List site content by type
pub fn run(shelf: &PostShelf, content_type: &str, json: bool) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let report = shelf.loader().scan()?;
            if !report.skipped.is_empty() {
                tracing::info!("{} posts skipped", report.skipped.len());
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&report.posts)?);
            } else {
                println!("{}", shelf.config.title);
                print!("{}", format_posts(&report.posts));
            }
        }
        "category" | "categories" => {
            let posts = shelf.load_catalog()?;
            let categories = build_index(&posts);
            if json {
                println!("{}", serde_json::to_string_pretty(&categories)?);
            } else {
                println!("{}", shelf.config.title);
                print!("{}", format_categories(&categories));
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category",
                content_type
            );
        }
    }

    Ok(())
}

/// One line per post: date, title, slug
pub fn format_posts(posts: &[Post]) -> String {
    let mut out = format!("Posts ({}):\n", posts.len());
    for post in posts {
        let date = match post.published_on() {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None if post.date.is_empty() => "----------".to_string(),
            None => post.date.clone(),
        };
        let _ = writeln!(out, "  {} - {} [{}]", date, post.title, post.slug);
    }
    out
}

/// One line per category with its post count
pub fn format_categories(categories: &[Category]) -> String {
    let mut out = format!("Categories ({}):\n", categories.len());
    for cat in categories {
        let _ = writeln!(out, "  {} ({})", cat.name, cat.count);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_posts() {
        let mut dated = Post::new("a", "");
        dated.title = "Hello".to_string();
        dated.date = "2024-01-01T09:00:00Z".to_string();
        let undated = Post::new("b", "");

        let out = format_posts(&[dated, undated]);
        assert!(out.starts_with("Posts (2):\n"));
        assert!(out.contains("  2024-01-01 - Hello [a]\n"));
        assert!(out.contains("  ---------- - b [b]\n"));
    }

    #[test]
    fn test_format_categories() {
        let out = format_categories(&[Category::new("x", 2), Category::new("y", 1)]);
        assert_eq!(out, "Categories (2):\n  x (2)\n  y (1)\n");
    }
}
