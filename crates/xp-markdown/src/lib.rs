//! Markdown processing for XP lesson content.
//!
//! Markdown (with generic directive syntax) is parsed into an arena-backed
//! document tree with explicit parent links. [`SolutionTransform`] then
//! rewrites the tree so every code block renders as a collapsible:
//!
//! - `:::solution` directives become a collapsible titled "Solution"
//! - code blocks outside a solution are wrapped in a collapsible titled
//!   after their language
//!
//! # Example
//!
//! ```
//! use xp_markdown::{SolutionTransform, parse, render_html};
//!
//! let mut doc = parse(":::solution\n```python\nprint(1)\n```\n:::\n").document;
//! let report = SolutionTransform::default().apply(&mut doc);
//! assert_eq!(report.solutions, 1);
//! assert_eq!(report.wrapped, 0);
//! assert!(render_html(&doc).contains("<summary>Solution</summary>"));
//! ```

mod directive;
mod html;
mod lesson;
mod parse;
mod render;
mod transform;
mod tree;

pub use directive::parse_attributes;
pub use html::{escape_html, first_heading, render_html};
pub use lesson::{Lesson, LessonError, LessonLanguage, LessonMeta, load_lessons, sort_lessons};
pub use parse::{Parsed, parse, parser_options};
pub use render::{MarkdownRenderer, Rendered};
pub use transform::{
    CODE_BLOCK_CLASS, CodeTitles, SOLUTION_DIRECTIVE, SOLUTION_TITLE, SolutionTransform,
    TransformReport,
};
pub use tree::{
    AttrValue, Attributes, COLLAPSIBLE, Code, Directive, DirectiveKind, Document, Element, Node,
    NodeId, NodeKind, RenderHint,
};
