//! Document tree.
//!
//! Nodes live in an arena owned by [`Document`] and are addressed by
//! [`NodeId`]. Each node stores its parent id and an ordered child list, so
//! upward walks need no borrowing gymnastics and the tree stays acyclic by
//! construction: nodes are only ever attached through [`Document::append`] and
//! [`Document::replace_child`], which keep both directions of the link in sync.

use std::collections::BTreeMap;
use std::fmt;

/// Component name of the disclosure widget.
pub const COLLAPSIBLE: &str = "Collapsible";

/// Index of a node inside its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Attribute value: directive attributes are strings or flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    String(String),
    Bool(bool),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Ordered attribute mapping.
pub type Attributes = BTreeMap<String, AttrValue>;

/// Directive flavor, by number of leading colons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// `:name[label]{attrs}` inside text.
    Text,
    /// `::name[label]{attrs}` on its own line.
    Leaf,
    /// `:::name[label]{attrs}` … `:::` wrapping block content.
    Container,
}

/// How a node should be rendered instead of its default markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderHint {
    /// Component name, e.g. [`COLLAPSIBLE`].
    pub component: String,
    /// Component properties.
    pub properties: Attributes,
}

/// Authored custom block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub name: String,
    /// Bracketed label, if any.
    pub label: Option<String>,
    pub attributes: Attributes,
    /// Set by transforms that re-tag the directive as a component.
    pub hint: Option<RenderHint>,
}

impl Directive {
    /// Create an unhinted directive.
    #[must_use]
    pub fn new(kind: DirectiveKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            label: None,
            attributes: Attributes::new(),
            hint: None,
        }
    }
}

/// Fenced or indented code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    /// Language tag (first word of the info string).
    pub lang: Option<String>,
    /// Rest of the info string.
    pub meta: Option<String>,
    pub value: String,
}

/// Component element inserted by transforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Attributes,
}

impl Element {
    /// Disclosure widget with the given title.
    #[must_use]
    pub fn collapsible(title: impl Into<String>, default_open: bool) -> Self {
        let mut attributes = Attributes::new();
        attributes.insert("title".to_owned(), AttrValue::String(title.into()));
        attributes.insert("defaultOpen".to_owned(), AttrValue::Bool(default_open));
        Self {
            name: COLLAPSIBLE.to_owned(),
            attributes,
        }
    }

    /// Whether this is a disclosure widget.
    #[must_use]
    pub fn is_collapsible(&self) -> bool {
        self.name == COLLAPSIBLE
    }
}

/// Node type and its own data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    /// Paragraph; a class turns it into a styled block wrapper.
    Paragraph {
        class_name: Option<String>,
    },
    Heading {
        level: u8,
    },
    Text(String),
    InlineCode(String),
    Code(Code),
    Emphasis,
    Strong,
    Strikethrough,
    Link {
        url: String,
        title: String,
    },
    /// Image; the alt text is the text content of its children.
    Image {
        url: String,
        title: String,
    },
    List {
        ordered: bool,
        start: Option<u64>,
    },
    ListItem,
    TaskMarker(bool),
    BlockQuote,
    Table,
    TableHead,
    TableRow,
    TableCell,
    ThematicBreak,
    SoftBreak,
    HardBreak,
    Html(String),
    Directive(Directive),
    Element(Element),
}

/// Arena slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    /// Parent id; `None` for the root and detached nodes.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child ids in document order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Rooted document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document holding only the root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the arena (including detached ones).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the root has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes[0].children.is_empty()
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[must_use]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    pub fn kind_mut(&mut self, id: NodeId) -> &mut NodeKind {
        &mut self.nodes[id.0].kind
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Create a node that is not yet attached anywhere.
    pub fn create(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Create a node and append it as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = self.create(kind);
        self.attach(parent, id);
        id
    }

    /// Append a detached node as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `child` already has a parent.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) {
        assert!(
            self.nodes[child.0].parent.is_none(),
            "node is already attached"
        );
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Put `replacement` at `index` of `parent`'s child list.
    ///
    /// The previous child is detached and returned; `replacement` must be
    /// detached.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds or `replacement` is attached.
    pub fn replace_child(&mut self, parent: NodeId, index: usize, replacement: NodeId) -> NodeId {
        assert!(
            self.nodes[replacement.0].parent.is_none(),
            "replacement is already attached"
        );
        let old = std::mem::replace(&mut self.nodes[parent.0].children[index], replacement);
        self.nodes[old.0].parent = None;
        self.nodes[replacement.0].parent = Some(parent);
        old
    }

    /// Position of `child` in its parent's child list.
    #[must_use]
    pub fn index_in_parent(&self, child: NodeId) -> Option<(NodeId, usize)> {
        let parent = self.parent(child)?;
        let index = self.children(parent).iter().position(|&c| c == child)?;
        Some((parent, index))
    }

    /// Walk from the parent of `id` up to the root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            doc: self,
            next: self.parent(id),
        }
    }

    /// All nodes below `id` (excluding `id`) in document order.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    /// Concatenated text of all `Text` and `InlineCode` nodes below `id`.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node in self.descendants(id) {
            match self.kind(node) {
                NodeKind::Text(text) | NodeKind::InlineCode(text) => out.push_str(text),
                NodeKind::SoftBreak | NodeKind::HardBreak => out.push(' '),
                _ => {}
            }
        }
        out
    }
}

/// Iterator over ancestors, nearest first.
pub struct Ancestors<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.doc.parent(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph() -> NodeKind {
        NodeKind::Paragraph { class_name: None }
    }

    #[test]
    fn test_new_document_has_root_only() {
        let doc = Document::new();
        assert_eq!(doc.len(), 1);
        assert!(doc.is_empty());
        assert_eq!(doc.kind(doc.root()), &NodeKind::Root);
        assert_eq!(doc.parent(doc.root()), None);
    }

    #[test]
    fn test_append_sets_both_links() {
        let mut doc = Document::new();
        let root = doc.root();
        let p = doc.append(root, paragraph());
        let t = doc.append(p, NodeKind::Text("hi".to_owned()));

        assert_eq!(doc.children(root), &[p]);
        assert_eq!(doc.parent(p), Some(root));
        assert_eq!(doc.parent(t), Some(p));
        assert_eq!(doc.index_in_parent(t), Some((p, 0)));
    }

    #[test]
    fn test_descendants_document_order() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = doc.append(root, paragraph());
        let a1 = doc.append(a, NodeKind::Text("a1".to_owned()));
        let a2 = doc.append(a, NodeKind::Text("a2".to_owned()));
        let b = doc.append(root, NodeKind::ThematicBreak);

        assert_eq!(doc.descendants(root), vec![a, a1, a2, b]);
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let mut doc = Document::new();
        let root = doc.root();
        let quote = doc.append(root, NodeKind::BlockQuote);
        let p = doc.append(quote, paragraph());
        let t = doc.append(p, NodeKind::Text("x".to_owned()));

        assert_eq!(doc.ancestors(t).collect::<Vec<_>>(), vec![p, quote, root]);
        assert_eq!(doc.ancestors(root).count(), 0);
    }

    #[test]
    fn test_replace_child_moves_links() {
        let mut doc = Document::new();
        let root = doc.root();
        let old = doc.append(root, NodeKind::ThematicBreak);
        let new = doc.create(paragraph());

        let returned = doc.replace_child(root, 0, new);
        assert_eq!(returned, old);
        assert_eq!(doc.parent(old), None);
        assert_eq!(doc.parent(new), Some(root));
        assert_eq!(doc.children(root), &[new]);

        doc.attach(new, old);
        assert_eq!(doc.parent(old), Some(new));
    }

    #[test]
    #[should_panic(expected = "already attached")]
    fn test_attach_twice_panics() {
        let mut doc = Document::new();
        let root = doc.root();
        let p = doc.append(root, paragraph());
        doc.attach(root, p);
    }

    #[test]
    fn test_text_content() {
        let mut doc = Document::new();
        let root = doc.root();
        let p = doc.append(root, paragraph());
        doc.append(p, NodeKind::Text("Use ".to_owned()));
        doc.append(p, NodeKind::InlineCode("cargo".to_owned()));
        doc.append(p, NodeKind::SoftBreak);
        doc.append(p, NodeKind::Text("now".to_owned()));
        assert_eq!(doc.text_content(root), "Use cargo now");
    }

    #[test]
    fn test_collapsible_element() {
        let element = Element::collapsible("Go Code", false);
        assert!(element.is_collapsible());
        assert_eq!(
            element.attributes.get("title"),
            Some(&AttrValue::String("Go Code".to_owned()))
        );
        assert_eq!(
            element.attributes.get("defaultOpen"),
            Some(&AttrValue::Bool(false))
        );
    }
}
