//! Markdown to document tree.
//!
//! Parsing runs in two layers. A line scanner cuts the source at container
//! and leaf directive lines (ignoring fenced code), then every markdown
//! segment between them goes through pulldown-cmark and is appended under the
//! innermost open container.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use tracing::debug;

use crate::directive::{
    DirectiveHead, DirectiveLine, FenceState, InlinePiece, parse_directive_line,
    split_text_directives,
};
use crate::tree::{Code, Directive, DirectiveKind, Document, NodeId, NodeKind};

/// Parsed document plus problems found in the source.
#[derive(Debug, Clone)]
pub struct Parsed {
    pub document: Document,
    /// Human-readable warnings (unclosed or stray container fences).
    pub warnings: Vec<String>,
}

/// pulldown-cmark options: GFM tables, strikethrough and task lists.
#[must_use]
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM
}

struct OpenContainer {
    node: NodeId,
    name: String,
    colons: usize,
    line: usize,
}

/// Parse markdown with directive syntax into a document tree.
#[must_use]
pub fn parse(markdown: &str) -> Parsed {
    let mut document = Document::new();
    let mut warnings = Vec::new();
    let mut open: Vec<OpenContainer> = Vec::new();
    let mut fence = FenceState::default();
    let mut segment = String::new();

    for (index, line) in markdown.lines().enumerate() {
        let line_no = index + 1;
        let parent = open.last().map_or(document.root(), |c| c.node);

        // At top level a line indented four columns is indented code.
        let indented_code = open.is_empty() && indent_width(line) >= 4;
        if !fence.inside()
            && !indented_code
            && let Some(directive) = parse_directive_line(line)
        {
            match directive {
                DirectiveLine::ContainerOpen { head, colons } => {
                    append_markdown(&mut document, parent, &segment);
                    segment.clear();
                    let name = head.name.clone();
                    let node =
                        document.append(parent, directive_node(DirectiveKind::Container, head));
                    open.push(OpenContainer {
                        node,
                        name,
                        colons,
                        line: line_no,
                    });
                    continue;
                }
                DirectiveLine::ContainerClose { colons } => {
                    if open.last().is_some_and(|c| colons >= c.colons) {
                        append_markdown(&mut document, parent, &segment);
                        segment.clear();
                        open.pop();
                        continue;
                    }
                    warnings.push(format!(
                        "line {line_no}: closing fence without an open container"
                    ));
                }
                DirectiveLine::Leaf(head) => {
                    append_markdown(&mut document, parent, &segment);
                    segment.clear();
                    document.append(parent, directive_node(DirectiveKind::Leaf, head));
                    continue;
                }
            }
        }

        fence.advance(line);
        segment.push_str(line);
        segment.push('\n');
    }

    let parent = open.last().map_or(document.root(), |c| c.node);
    append_markdown(&mut document, parent, &segment);

    for container in open.iter().rev() {
        warnings.push(format!(
            "line {}: container directive `{}` is never closed",
            container.line, container.name
        ));
    }

    debug!(
        nodes = document.len(),
        warnings = warnings.len(),
        "Markdown parsed"
    );
    Parsed { document, warnings }
}

/// Leading indentation in columns, tabs advancing to the next multiple of four.
fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width += 4 - width % 4,
            _ => break,
        }
    }
    width
}

fn directive_node(kind: DirectiveKind, head: DirectiveHead) -> NodeKind {
    let mut directive = Directive::new(kind, head.name);
    directive.label = head.label;
    directive.attributes = head.attributes;
    NodeKind::Directive(directive)
}

/// Parse a markdown segment and append its blocks under `parent`.
fn append_markdown(document: &mut Document, parent: NodeId, source: &str) {
    if source.trim().is_empty() {
        return;
    }
    let mut builder = TreeBuilder {
        document,
        stack: vec![parent],
        text: String::new(),
    };
    for event in Parser::new_ext(source, parser_options()) {
        builder.event(event);
    }
    builder.flush_text();
}

struct TreeBuilder<'a> {
    document: &'a mut Document,
    stack: Vec<NodeId>,
    /// Adjacent text events, merged before directive splitting.
    text: String,
}

impl TreeBuilder<'_> {
    fn top(&self) -> NodeId {
        self.stack[self.stack.len() - 1]
    }

    fn event(&mut self, event: Event<'_>) {
        if let Event::Text(text) = &event {
            self.text(text);
            return;
        }
        self.flush_text();

        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Code(code) => self.leaf(NodeKind::InlineCode(code.into_string())),
            Event::Html(html) | Event::InlineHtml(html) => {
                self.leaf(NodeKind::Html(html.into_string()));
            }
            Event::SoftBreak => self.leaf(NodeKind::SoftBreak),
            Event::HardBreak => self.leaf(NodeKind::HardBreak),
            Event::Rule => self.leaf(NodeKind::ThematicBreak),
            Event::TaskListMarker(checked) => self.leaf(NodeKind::TaskMarker(checked)),
            Event::FootnoteReference(raw) | Event::InlineMath(raw) | Event::DisplayMath(raw) => {
                self.leaf(NodeKind::Text(raw.into_string()));
            }
            Event::Text(_) => {}
        }
    }

    fn leaf(&mut self, kind: NodeKind) {
        let parent = self.top();
        self.document.append(parent, kind);
    }

    fn text(&mut self, text: &str) {
        let top = self.top();
        if let NodeKind::Code(code) = self.document.kind_mut(top) {
            code.value.push_str(text);
        } else {
            self.text.push_str(text);
        }
    }

    fn flush_text(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text);
        for piece in split_text_directives(&text) {
            match piece {
                InlinePiece::Text(run) => self.leaf(NodeKind::Text(run.to_owned())),
                InlinePiece::Directive(head) => {
                    self.leaf(directive_node(DirectiveKind::Text, head));
                }
            }
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let kind = match tag {
            Tag::Paragraph => NodeKind::Paragraph { class_name: None },
            Tag::Heading { level, .. } => NodeKind::Heading {
                level: heading_level(level),
            },
            Tag::BlockQuote(_) => NodeKind::BlockQuote,
            Tag::CodeBlock(kind) => NodeKind::Code(code_from_info(&kind)),
            Tag::List(start) => NodeKind::List {
                ordered: start.is_some(),
                start,
            },
            Tag::Item => NodeKind::ListItem,
            Tag::Table(_) => NodeKind::Table,
            Tag::TableHead => NodeKind::TableHead,
            Tag::TableRow => NodeKind::TableRow,
            Tag::TableCell => NodeKind::TableCell,
            Tag::Emphasis => NodeKind::Emphasis,
            Tag::Strong => NodeKind::Strong,
            Tag::Strikethrough => NodeKind::Strikethrough,
            Tag::Link {
                dest_url, title, ..
            } => NodeKind::Link {
                url: dest_url.into_string(),
                title: title.into_string(),
            },
            Tag::Image {
                dest_url, title, ..
            } => NodeKind::Image {
                url: dest_url.into_string(),
                title: title.into_string(),
            },
            _ => {
                // Unmodelled wrappers are flattened into the current parent.
                let top = self.top();
                self.stack.push(top);
                return;
            }
        };
        let parent = self.top();
        let node = self.document.append(parent, kind);
        self.stack.push(node);
    }

    fn end(&mut self, tag: TagEnd) {
        if self.stack.len() <= 1 {
            return;
        }
        let node = self.top();
        if matches!(tag, TagEnd::CodeBlock)
            && let NodeKind::Code(code) = self.document.kind_mut(node)
            && code.value.ends_with('\n')
        {
            code.value.pop();
        }
        self.stack.pop();
    }
}

fn code_from_info(kind: &CodeBlockKind<'_>) -> Code {
    let (lang, meta) = match kind {
        CodeBlockKind::Fenced(info) => {
            let info = info.trim();
            match info.split_once(char::is_whitespace) {
                Some((lang, meta)) => (Some(lang), Some(meta.trim())),
                None => (Some(info), None),
            }
        }
        CodeBlockKind::Indented => (None, None),
    };
    Code {
        lang: lang.filter(|l| !l.is_empty()).map(str::to_owned),
        meta: meta.filter(|m| !m.is_empty()).map(str::to_owned),
        value: String::new(),
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::AttrValue;
    use pretty_assertions::assert_eq;

    fn kinds_under(doc: &Document, id: NodeId) -> Vec<NodeKind> {
        doc.children(id).iter().map(|&c| doc.kind(c).clone()).collect()
    }

    fn find_code(doc: &Document) -> Vec<Code> {
        doc.descendants(doc.root())
            .into_iter()
            .filter_map(|id| match doc.kind(id) {
                NodeKind::Code(code) => Some(code.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_plain_markdown() {
        let parsed = parse("# Title\n\nHello *world*.\n");
        let doc = &parsed.document;
        let root_children = doc.children(doc.root());
        assert_eq!(root_children.len(), 2);
        assert_eq!(doc.kind(root_children[0]), &NodeKind::Heading { level: 1 });
        assert_eq!(doc.text_content(root_children[1]), "Hello world.");
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_fenced_code_lang_and_meta() {
        let parsed = parse("```go title=\"main.go\"\nfunc main() {}\n```\n");
        assert_eq!(
            find_code(&parsed.document),
            vec![Code {
                lang: Some("go".to_owned()),
                meta: Some("title=\"main.go\"".to_owned()),
                value: "func main() {}".to_owned(),
            }]
        );
    }

    #[test]
    fn test_fence_without_lang() {
        let parsed = parse("```\nplain\n```\n");
        let code = &find_code(&parsed.document)[0];
        assert_eq!(code.lang, None);
        assert_eq!(code.value, "plain");
    }

    #[test]
    fn test_container_directive_holds_blocks() {
        let md = "Intro\n\n:::solution{#s1}\n```python\nprint(1)\n```\n:::\n\nOutro\n";
        let parsed = parse(md);
        let doc = &parsed.document;
        let top = doc.children(doc.root());
        assert_eq!(top.len(), 3);

        let NodeKind::Directive(directive) = doc.kind(top[1]) else {
            panic!("expected directive");
        };
        assert_eq!(directive.kind, DirectiveKind::Container);
        assert_eq!(directive.name, "solution");
        assert_eq!(
            directive.attributes.get("id"),
            Some(&AttrValue::String("s1".to_owned()))
        );

        let inner = kinds_under(doc, top[1]);
        assert_eq!(inner.len(), 1);
        assert!(matches!(&inner[0], NodeKind::Code(code) if code.lang.as_deref() == Some("python")));
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_nested_containers() {
        let md = "::::outer\n:::inner\ntext\n:::\n::::\n";
        let parsed = parse(md);
        let doc = &parsed.document;
        let outer = doc.children(doc.root())[0];
        let inner = doc.children(outer)[0];
        assert!(matches!(doc.kind(inner), NodeKind::Directive(d) if d.name == "inner"));
        assert_eq!(doc.text_content(inner), "text");
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_directive_markers_inside_code_are_literal() {
        let md = "```md\n:::solution\n:::\n```\n";
        let parsed = parse(md);
        let code = &find_code(&parsed.document)[0];
        assert_eq!(code.value, ":::solution\n:::");
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_indented_directive_line_is_code() {
        let parsed = parse("Example:\n\n    :::solution\n    print(1)\n    :::\n");
        let doc = &parsed.document;
        let directives = doc
            .descendants(doc.root())
            .into_iter()
            .filter(|&id| matches!(doc.kind(id), NodeKind::Directive(_)))
            .count();
        assert_eq!(directives, 0);
        let code = find_code(doc);
        assert_eq!(code.len(), 1);
        assert!(code[0].value.starts_with(":::solution\n"));
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_indented_directive_inside_container() {
        let parsed = parse(":::outer\n    :::inner\n    text\n    :::\n:::\n");
        let doc = &parsed.document;
        let outer = doc.children(doc.root())[0];
        let inner = doc.children(outer)[0];
        assert!(matches!(doc.kind(inner), NodeKind::Directive(d) if d.name == "inner"));
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_indent_width() {
        assert_eq!(indent_width(":::"), 0);
        assert_eq!(indent_width("   :::"), 3);
        assert_eq!(indent_width("\t:::"), 4);
        assert_eq!(indent_width("  \t:::"), 4);
    }

    #[test]
    fn test_unclosed_container_warns() {
        let parsed = parse(":::solution\ntext\n");
        assert_eq!(parsed.warnings.len(), 1);
        assert!(parsed.warnings[0].contains("solution"));
        let doc = &parsed.document;
        let directive = doc.children(doc.root())[0];
        assert_eq!(doc.text_content(directive), "text");
    }

    #[test]
    fn test_stray_close_is_text() {
        let parsed = parse("before\n:::\n");
        assert_eq!(parsed.warnings.len(), 1);
        assert!(parsed.document.text_content(parsed.document.root()).contains(":::"));
    }

    #[test]
    fn test_leaf_directive() {
        let parsed = parse("::divider{.thick}\n");
        let doc = &parsed.document;
        let NodeKind::Directive(directive) = doc.kind(doc.children(doc.root())[0]) else {
            panic!("expected directive");
        };
        assert_eq!(directive.kind, DirectiveKind::Leaf);
        assert_eq!(directive.name, "divider");
    }

    #[test]
    fn test_text_directive_in_paragraph() {
        let parsed = parse("Press :kbd[Ctrl+C] now.\n");
        let doc = &parsed.document;
        let paragraph = doc.children(doc.root())[0];
        let kinds = kinds_under(doc, paragraph);
        assert_eq!(kinds.len(), 3);
        assert!(matches!(
            &kinds[1],
            NodeKind::Directive(d) if d.kind == DirectiveKind::Text && d.label.as_deref() == Some("Ctrl+C")
        ));
    }

    #[test]
    fn test_parent_links_consistent() {
        let md = "- a\n- b\n\n> quote with `code`\n\n:::solution\n```go\nx\n```\n:::\n";
        let parsed = parse(md);
        let doc = &parsed.document;
        for id in doc.descendants(doc.root()) {
            let parent = doc.parent(id).unwrap();
            assert!(doc.children(parent).contains(&id));
        }
    }
}
