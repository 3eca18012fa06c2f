//! Markdown rendering for post bodies

use pulldown_cmark::{html, Options, Parser};

/// Renders post content to HTML
#[derive(Debug, Clone, Copy)]
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a renderer with GitHub-flavoured extensions enabled
    pub fn new() -> Self {
        // No YAML metadata blocks: front-matter is stripped before rendering
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        Self { options }
    }

    /// Also turn quotes and dashes into their typographic forms
    pub fn with_smart_punctuation(mut self) -> Self {
        self.options |= Options::ENABLE_SMART_PUNCTUATION;
        self
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let html = MarkdownRenderer::new().render("# Hello World\n\nThis is a test.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_table() {
        let html = MarkdownRenderer::new().render("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let html = MarkdownRenderer::new().render("<div class=\"note\">hi</div>\n");
        assert!(html.contains("<div class=\"note\">hi</div>"));
    }

    #[test]
    fn test_smart_punctuation() {
        let plain = MarkdownRenderer::new().render("\"quoted\"");
        let smart = MarkdownRenderer::new()
            .with_smart_punctuation()
            .render("\"quoted\"");
        assert!(!plain.contains('\u{201c}'));
        assert!(smart.contains('\u{201c}'));
    }
}
