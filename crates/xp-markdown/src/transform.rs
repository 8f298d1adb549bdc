//! Solution and code-block transform.
//!
//! Two rewrites on a parsed [`Document`]:
//!
//! 1. Every directive named `solution` is re-tagged to render as a
//!    collapsible titled "Solution", closed by default. Its own attributes
//!    are kept; `title` and `defaultOpen` are forced.
//! 2. Every code block that is not already inside a `solution` directive or
//!    a collapsible element is wrapped, in place, as
//!    `Collapsible { title: "<Lang> Code", defaultOpen: false }` holding a
//!    paragraph with class `code-block` that holds the original code node.
//!
//! Running the transform twice yields the same tree as running it once.

use std::collections::BTreeMap;

use tracing::debug;

use crate::tree::{
    AttrValue, COLLAPSIBLE, Document, Element, NodeId, NodeKind, RenderHint,
};

/// Directive name that marks an exercise answer.
pub const SOLUTION_DIRECTIVE: &str = "solution";

/// Title of a re-tagged solution directive.
pub const SOLUTION_TITLE: &str = "Solution";

/// Class of the paragraph wrapped around a code block.
pub const CODE_BLOCK_CLASS: &str = "code-block";

/// Language used when a code block has none.
const FALLBACK_LANG: &str = "text";

/// Display names for code block languages.
///
/// Languages without an entry are shown with their first letter uppercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTitles {
    labels: BTreeMap<String, String>,
}

impl Default for CodeTitles {
    fn default() -> Self {
        let labels = [("csharp", "C#"), ("python", "Python"), ("go", "Go")]
            .into_iter()
            .map(|(lang, label)| (lang.to_owned(), label.to_owned()))
            .collect();
        Self { labels }
    }
}

impl CodeTitles {
    /// Mapping without any built-in entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            labels: BTreeMap::new(),
        }
    }

    /// Add or replace one label.
    #[must_use]
    pub fn with_label(mut self, lang: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(lang.into(), label.into());
        self
    }

    /// Add or replace several labels.
    #[must_use]
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels
            .extend(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Display name of `lang`.
    #[must_use]
    pub fn label(&self, lang: &str) -> String {
        self.labels
            .get(lang)
            .cloned()
            .unwrap_or_else(|| capitalize(lang))
    }

    /// Collapsible title for a code block in `lang`.
    #[must_use]
    pub fn title(&self, lang: Option<&str>) -> String {
        let lang = lang.filter(|l| !l.is_empty()).unwrap_or(FALLBACK_LANG);
        format!("{} Code", self.label(lang))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// What a transform run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// Solution directives re-tagged.
    pub solutions: usize,
    /// Code blocks wrapped in a collapsible.
    pub wrapped: usize,
    /// Code blocks left alone because an ancestor already collapses them.
    pub skipped: usize,
}

/// The solution/code-block rewrite.
#[derive(Debug, Clone, Default)]
pub struct SolutionTransform {
    titles: CodeTitles,
}

impl SolutionTransform {
    #[must_use]
    pub fn new(titles: CodeTitles) -> Self {
        Self { titles }
    }

    #[must_use]
    pub fn titles(&self) -> &CodeTitles {
        &self.titles
    }

    /// Rewrite `doc` in place.
    pub fn apply(&self, doc: &mut Document) -> TransformReport {
        let mut report = TransformReport::default();
        let root = doc.root();

        for id in doc.descendants(root) {
            if let NodeKind::Directive(directive) = doc.kind_mut(id)
                && directive.name == SOLUTION_DIRECTIVE
            {
                let mut properties = directive.attributes.clone();
                properties.insert("title".to_owned(), AttrValue::from(SOLUTION_TITLE));
                properties.insert("defaultOpen".to_owned(), AttrValue::Bool(false));
                directive.hint = Some(RenderHint {
                    component: COLLAPSIBLE.to_owned(),
                    properties,
                });
                report.solutions += 1;
            }
        }

        // Collect first: wrapping adds nodes to the arena.
        let code_blocks: Vec<NodeId> = doc
            .descendants(root)
            .into_iter()
            .filter(|&id| matches!(doc.kind(id), NodeKind::Code(_)))
            .collect();

        for code in code_blocks {
            if is_collapsed(doc, code) {
                report.skipped += 1;
                continue;
            }
            let Some((parent, index)) = doc.index_in_parent(code) else {
                continue;
            };
            let lang = match doc.kind(code) {
                NodeKind::Code(c) => c.lang.clone(),
                _ => None,
            };
            let title = self.titles.title(lang.as_deref());

            let collapsible = doc.create(NodeKind::Element(Element::collapsible(title, false)));
            let paragraph = doc.create(NodeKind::Paragraph {
                class_name: Some(CODE_BLOCK_CLASS.to_owned()),
            });
            doc.replace_child(parent, index, collapsible);
            doc.attach(collapsible, paragraph);
            doc.attach(paragraph, code);
            report.wrapped += 1;
        }

        debug!(
            solutions = report.solutions,
            wrapped = report.wrapped,
            skipped = report.skipped,
            "Solution transform applied"
        );
        report
    }
}

/// Whether an ancestor of `id` already renders as a collapsible.
fn is_collapsed(doc: &Document, id: NodeId) -> bool {
    doc.ancestors(id).any(|ancestor| match doc.kind(ancestor) {
        NodeKind::Directive(directive) => directive.name == SOLUTION_DIRECTIVE,
        NodeKind::Element(element) => element.is_collapsible(),
        _ => false,
    })
}
