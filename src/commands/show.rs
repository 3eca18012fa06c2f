//! Show a single post

use anyhow::Result;

use crate::content::{MarkdownRenderer, Post};
use crate::PostShelf;

/// How `show` prints a post
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowOptions {
    /// Render the body from Markdown to HTML
    pub html: bool,
    /// Typographic quotes and dashes when rendering HTML
    pub smart: bool,
    /// Print the post as JSON
    pub json: bool,
}

/// Print one post, optionally with its body rendered to HTML
pub fn run(shelf: &PostShelf, slug: &str, options: ShowOptions) -> Result<()> {
    let mut post = shelf.load_post(slug)?;
    tracing::debug!("Loaded {:?}", shelf.loader().post_path(slug));

    if options.html {
        post.content = render_html(&post.content, options.smart);
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else {
        print!("{}", format_post(&post));
    }

    Ok(())
}

/// Render a post body to HTML
pub fn render_html(content: &str, smart: bool) -> String {
    let renderer = MarkdownRenderer::new();
    if smart {
        renderer.with_smart_punctuation().render(content)
    } else {
        renderer.render(content)
    }
}

/// Header lines followed by the body
pub fn format_post(post: &Post) -> String {
    let mut out = format!("{}\n", post.title);
    if !post.date.is_empty() {
        out.push_str(&format!("date: {}\n", post.date));
    }
    if !post.categories.is_empty() {
        out.push_str(&format!("categories: {}\n", post.categories.join(", ")));
    }
    out.push('\n');
    out.push_str(&post.content);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_post() {
        let mut post = Post::new("a", "Body A");
        post.title = "Hello".to_string();
        post.date = "2024-01-01".to_string();
        post.categories = vec!["x".to_string(), "y".to_string()];

        assert_eq!(
            format_post(&post),
            "Hello\ndate: 2024-01-01\ncategories: x, y\n\nBody A\n"
        );
    }

    #[test]
    fn test_render_html_smart_option() {
        let plain = render_html("# Title\n\n\"quoted\"", false);
        assert!(plain.contains("<h1>Title</h1>"));
        assert!(!plain.contains('\u{201c}'));

        let smart = render_html("\"quoted\"", true);
        assert!(smart.contains('\u{201c}'));
    }

    #[test]
    fn test_format_post_without_metadata() {
        let post = Post::new("b", "text\n");
        assert_eq!(format_post(&post), "b\n\ntext\n");
    }
}
