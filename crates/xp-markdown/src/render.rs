//! Parse, transform and render in one call.

use crate::html::{first_heading, render_html};
use crate::parse::parse;
use crate::transform::{CodeTitles, SolutionTransform, TransformReport};
use crate::tree::Document;

/// Result of rendering one markdown source.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// Transformed tree.
    pub document: Document,
    pub html: String,
    /// Text of the first level-one heading, if any.
    pub title: Option<String>,
    pub report: TransformReport,
    /// Syntax warnings collected while parsing.
    pub warnings: Vec<String>,
}

/// Markdown to HTML with the solution/code-block transform applied.
///
/// # Example
///
/// ```
/// use xp_markdown::MarkdownRenderer;
///
/// let rendered = MarkdownRenderer::default().render("# Hi\n\n```go\nx\n```\n");
/// assert_eq!(rendered.title.as_deref(), Some("Hi"));
/// assert!(rendered.html.contains("<summary>Go Code</summary>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    transform: SolutionTransform,
}

impl MarkdownRenderer {
    #[must_use]
    pub fn new(titles: CodeTitles) -> Self {
        Self {
            transform: SolutionTransform::new(titles),
        }
    }

    #[must_use]
    pub fn render(&self, markdown: &str) -> Rendered {
        let parsed = parse(markdown);
        let mut document = parsed.document;
        let report = self.transform.apply(&mut document);
        let html = render_html(&document);
        let title = first_heading(&document);
        Rendered {
            document,
            html,
            title,
            report,
            warnings: parsed.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_titles_flow_through() {
        let renderer = MarkdownRenderer::new(CodeTitles::default().with_label("go", "Golang"));
        let rendered = renderer.render("```go\nx\n```\n");
        assert!(rendered.html.contains("<summary>Golang Code</summary>"));
        assert_eq!(rendered.report.wrapped, 1);
        assert_eq!(rendered.title, None);
    }

    #[test]
    fn test_warnings_are_reported() {
        let rendered = MarkdownRenderer::default().render(":::solution\nopen\n");
        assert_eq!(rendered.warnings.len(), 1);
        assert!(rendered.html.starts_with(r#"<details class="collapsible">"#));
    }
}
