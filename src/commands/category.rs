//! List the posts in one category

use anyhow::Result;

use super::list::format_posts;
use crate::PostShelf;

/// Print the posts tagged with `name`
pub fn run(shelf: &PostShelf, name: &str, json: bool) -> Result<()> {
    let posts = shelf.load_catalog_by_category(name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
    } else if posts.is_empty() {
        println!("No posts in category {:?}", name);
    } else {
        println!("Category: {}", name);
        print!("{}", format_posts(&posts));
    }

    Ok(())
}
