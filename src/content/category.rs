//! Category index

use std::collections::BTreeMap;

use super::{Category, Post};

/// Count category memberships across `posts`, ordered by name
///
/// A post listing the same name twice counts twice.
pub fn build_index(posts: &[Post]) -> Vec<Category> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

    for post in posts {
        for cat in &post.categories {
            *counts.entry(cat.as_str()).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|(name, count)| Category::new(name, count))
        .collect()
}

/// Posts tagged with `name`, keeping their relative order
pub fn filter_by_category(posts: Vec<Post>, name: &str) -> Vec<Post> {
    posts.into_iter().filter(|p| p.in_category(name)).collect()
}
