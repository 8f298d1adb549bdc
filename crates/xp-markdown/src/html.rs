//! HTML output for document trees.
//!
//! Produces semantic HTML5:
//! - collapsibles (hinted directives and `Collapsible` elements) become
//!   `<details class="collapsible">` with a `<summary>`
//! - a paragraph with a class becomes a `<div>` so it can hold block content
//! - other directives become `<div>`/`<span>` with `directive directive-NAME`

use std::fmt::Write;

use crate::tree::{
    AttrValue, Attributes, COLLAPSIBLE, Directive, DirectiveKind, Document, NodeId, NodeKind,
};

/// Escape text for HTML content and attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the whole document.
#[must_use]
pub fn render_html(doc: &Document) -> String {
    let mut out = String::new();
    render_children(doc, doc.root(), &mut out);
    out
}

/// Text of the first level-one heading.
#[must_use]
pub fn first_heading(doc: &Document) -> Option<String> {
    doc.descendants(doc.root())
        .into_iter()
        .find(|&id| matches!(doc.kind(id), NodeKind::Heading { level: 1 }))
        .map(|id| doc.text_content(id).trim().to_owned())
}

fn render_children(doc: &Document, id: NodeId, out: &mut String) {
    for &child in doc.children(id) {
        render_node(doc, child, out);
    }
}

fn wrap(doc: &Document, id: NodeId, open: &str, close: &str, out: &mut String) {
    out.push_str(open);
    render_children(doc, id, out);
    out.push_str(close);
}

fn render_node(doc: &Document, id: NodeId, out: &mut String) {
    match doc.kind(id) {
        NodeKind::Root => render_children(doc, id, out),
        NodeKind::Paragraph { class_name: None } => wrap(doc, id, "<p>", "</p>", out),
        NodeKind::Paragraph {
            class_name: Some(class),
        } => {
            write!(out, r#"<div class="{}">"#, escape_html(class)).unwrap();
            render_children(doc, id, out);
            out.push_str("</div>");
        }
        NodeKind::Heading { level } => {
            write!(out, "<h{level}>").unwrap();
            render_children(doc, id, out);
            write!(out, "</h{level}>").unwrap();
        }
        NodeKind::Text(text) => out.push_str(&escape_html(text)),
        NodeKind::InlineCode(code) => {
            write!(out, "<code>{}</code>", escape_html(code)).unwrap();
        }
        NodeKind::Code(code) => match code.lang.as_deref() {
            Some(lang) => write!(
                out,
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                escape_html(lang),
                escape_html(&code.value)
            )
            .unwrap(),
            None => write!(out, "<pre><code>{}</code></pre>", escape_html(&code.value)).unwrap(),
        },
        NodeKind::Emphasis => wrap(doc, id, "<em>", "</em>", out),
        NodeKind::Strong => wrap(doc, id, "<strong>", "</strong>", out),
        NodeKind::Strikethrough => wrap(doc, id, "<del>", "</del>", out),
        NodeKind::Link { url, title } => {
            write!(out, r#"<a href="{}""#, escape_html(url)).unwrap();
            if !title.is_empty() {
                write!(out, r#" title="{}""#, escape_html(title)).unwrap();
            }
            out.push('>');
            render_children(doc, id, out);
            out.push_str("</a>");
        }
        NodeKind::Image { url, title } => {
            write!(
                out,
                r#"<img src="{}" alt="{}""#,
                escape_html(url),
                escape_html(&doc.text_content(id))
            )
            .unwrap();
            if !title.is_empty() {
                write!(out, r#" title="{}""#, escape_html(title)).unwrap();
            }
            out.push('>');
        }
        NodeKind::List { ordered: false, .. } => wrap(doc, id, "<ul>", "</ul>", out),
        NodeKind::List {
            ordered: true,
            start,
        } => {
            match start {
                Some(n) if *n != 1 => write!(out, r#"<ol start="{n}">"#).unwrap(),
                _ => out.push_str("<ol>"),
            }
            render_children(doc, id, out);
            out.push_str("</ol>");
        }
        NodeKind::ListItem => wrap(doc, id, "<li>", "</li>", out),
        NodeKind::TaskMarker(checked) => {
            if *checked {
                out.push_str(r#"<input type="checkbox" disabled checked> "#);
            } else {
                out.push_str(r#"<input type="checkbox" disabled> "#);
            }
        }
        NodeKind::BlockQuote => wrap(doc, id, "<blockquote>", "</blockquote>", out),
        NodeKind::Table => render_table(doc, id, out),
        NodeKind::TableHead => wrap(doc, id, "<thead><tr>", "</tr></thead>", out),
        NodeKind::TableRow => wrap(doc, id, "<tr>", "</tr>", out),
        NodeKind::TableCell => {
            let in_head = doc
                .parent(id)
                .is_some_and(|p| matches!(doc.kind(p), NodeKind::TableHead));
            if in_head {
                wrap(doc, id, "<th>", "</th>", out);
            } else {
                wrap(doc, id, "<td>", "</td>", out);
            }
        }
        NodeKind::ThematicBreak => out.push_str("<hr>"),
        NodeKind::SoftBreak => out.push('\n'),
        NodeKind::HardBreak => out.push_str("<br>"),
        NodeKind::Html(html) => out.push_str(html),
        NodeKind::Directive(directive) => render_directive(doc, id, directive, out),
        NodeKind::Element(element) => {
            if element.name == COLLAPSIBLE {
                render_collapsible(doc, id, &element.attributes, out);
            } else {
                write!(
                    out,
                    r#"<div data-component="{}">"#,
                    escape_html(&element.name)
                )
                .unwrap();
                render_children(doc, id, out);
                out.push_str("</div>");
            }
        }
    }
}

fn render_table(doc: &Document, id: NodeId, out: &mut String) {
    out.push_str("<table>");
    let (head, rows): (Vec<NodeId>, Vec<NodeId>) = doc
        .children(id)
        .iter()
        .copied()
        .partition(|&c| matches!(doc.kind(c), NodeKind::TableHead));
    for child in head {
        render_node(doc, child, out);
    }
    if !rows.is_empty() {
        out.push_str("<tbody>");
        for row in rows {
            render_node(doc, row, out);
        }
        out.push_str("</tbody>");
    }
    out.push_str("</table>");
}

fn render_directive(doc: &Document, id: NodeId, directive: &Directive, out: &mut String) {
    if let Some(hint) = &directive.hint
        && hint.component == COLLAPSIBLE
    {
        render_collapsible(doc, id, &hint.properties, out);
        return;
    }

    let tag = match directive.kind {
        DirectiveKind::Text => "span",
        DirectiveKind::Leaf | DirectiveKind::Container => "div",
    };
    let name = escape_html(&directive.name);
    write!(out, r#"<{tag} class="directive directive-{name}"#).unwrap();
    if let Some(AttrValue::String(class)) = directive.attributes.get("class") {
        write!(out, " {}", escape_html(class)).unwrap();
    }
    out.push('"');
    write_attributes(&directive.attributes, &["class"], out);
    out.push('>');
    if let Some(label) = &directive.label {
        if directive.kind == DirectiveKind::Container {
            write!(out, r#"<p class="directive-label">{}</p>"#, escape_html(label)).unwrap();
        } else {
            out.push_str(&escape_html(label));
        }
    }
    render_children(doc, id, out);
    write!(out, "</{tag}>").unwrap();
}

fn render_collapsible(doc: &Document, id: NodeId, properties: &Attributes, out: &mut String) {
    let title = properties
        .get("title")
        .map(ToString::to_string)
        .unwrap_or_default();
    let open = matches!(properties.get("defaultOpen"), Some(AttrValue::Bool(true)));

    out.push_str(r#"<details class="collapsible"#);
    if let Some(AttrValue::String(class)) = properties.get("class") {
        write!(out, " {}", escape_html(class)).unwrap();
    }
    out.push('"');
    write_attributes(properties, &["class", "title", "defaultOpen"], out);
    if open {
        out.push_str(" open");
    }
    write!(out, "><summary>{}</summary>", escape_html(&title)).unwrap();
    render_children(doc, id, out);
    out.push_str("</details>");
}

/// Write attributes other than `skip`: `id` as is, the rest as `data-*`.
fn write_attributes(attributes: &Attributes, skip: &[&str], out: &mut String) {
    for (key, value) in attributes {
        if skip.contains(&key.as_str()) {
            continue;
        }
        let name = if key == "id" {
            key.clone()
        } else {
            format!("data-{}", key.to_lowercase())
        };
        match value {
            AttrValue::Bool(true) => write!(out, " {name}").unwrap(),
            AttrValue::Bool(false) => {}
            AttrValue::String(s) => write!(out, r#" {name}="{}""#, escape_html(s)).unwrap(),
        }
    }
}
