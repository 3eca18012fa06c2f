//! Post and Category models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::FrontMatter;

/// Prefix of a body line that can stand in for a missing title
const HEADING_PREFIX: &str = "# ";

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Body with the front-matter block stripped
    pub content: String,

    /// Slug (file name without extension)
    pub slug: String,

    /// Free-form date string, compared as text when sorting
    pub date: String,

    /// Post categories, in front-matter order
    pub categories: Vec<String>,
}

impl Post {
    /// Create a post with the defaults used before front-matter is applied
    pub fn new(slug: &str, content: &str) -> Self {
        Self {
            title: slug.to_string(),
            content: content.to_string(),
            slug: slug.to_string(),
            date: String::new(),
            categories: Vec::new(),
        }
    }

    /// Build a post from its slug and the parsed pieces of its source file
    pub fn from_parts(slug: &str, front_matter: Option<&FrontMatter>, body: &str) -> Self {
        let mut post = Self::new(slug, body);

        if let Some(fm) = front_matter {
            post.apply_front_matter(fm);
        }

        // Only consult the body when nothing replaced the default title
        if post.title == post.slug {
            if let Some(heading) = leading_heading(body) {
                post.title = heading.to_string();
            }
        }

        post
    }

    /// Overwrite fields with the string-typed values found in front-matter
    fn apply_front_matter(&mut self, fm: &FrontMatter) {
        if let Some(title) = fm.as_string("title") {
            self.title = title.to_string();
        }
        if let Some(date) = fm.as_string("date") {
            self.date = date.to_string();
        }
        if let Some(categories) = fm.as_string_sequence("categories") {
            self.categories = categories.into_iter().map(str::to_string).collect();
        }
    }

    /// Whether the post is tagged with `name` (exact, case-sensitive)
    pub fn in_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// Best-effort calendar date for display
    ///
    /// Ordering never uses this; it only reads the leading `YYYY-MM-DD` or
    /// `YYYY/MM/DD` of the date string.
    pub fn published_on(&self) -> Option<NaiveDate> {
        let s = self.date.trim();
        let head = s.get(..10).unwrap_or(s);
        ["%Y-%m-%d", "%Y/%m/%d"]
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(head, fmt).ok())
    }
}

/// Title from a first body line of the form `# Heading`
fn leading_heading(body: &str) -> Option<&str> {
    let first = body.split('\n').next().unwrap_or_default().trim();
    first.strip_prefix(HEADING_PREFIX)
}

/// A category with the number of posts referencing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub count: usize,
}

impl Category {
    pub fn new(name: &str, count: usize) -> Self {
        Self {
            name: name.to_string(),
            count,
        }
    }
}
