//! Directive syntax recognition.
//!
//! Recognizes the three generic directive forms:
//!
//! - container: a line `:::name[label]{attrs}`, closed by a line of at least
//!   as many colons
//! - leaf: a line `::name[label]{attrs}`
//! - text: `:name[label]{attrs}` anywhere inside text

use super::attrs::parse_attributes;
use crate::tree::Attributes;

/// Name, label and attributes shared by all forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DirectiveHead {
    pub name: String,
    pub label: Option<String>,
    pub attributes: Attributes,
}

/// Result of classifying a whole line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DirectiveLine {
    ContainerOpen { head: DirectiveHead, colons: usize },
    ContainerClose { colons: usize },
    Leaf(DirectiveHead),
}

/// Piece of a text run after splitting out text directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InlinePiece<'a> {
    Text(&'a str),
    Directive(DirectiveHead),
}

/// Classify a line as a container fence or leaf directive.
pub(crate) fn parse_directive_line(line: &str) -> Option<DirectiveLine> {
    let trimmed = line.trim();
    let colons = trimmed.chars().take_while(|&c| c == ':').count();
    if colons < 2 {
        return None;
    }
    let after = &trimmed[colons..];

    if colons >= 3 && after.trim().is_empty() {
        return Some(DirectiveLine::ContainerClose { colons });
    }

    let (head, consumed) = parse_head(after)?;
    // Leaf and container openers must take the whole line.
    if !after[consumed..].trim().is_empty() {
        return None;
    }

    if colons == 2 {
        Some(DirectiveLine::Leaf(head))
    } else {
        Some(DirectiveLine::ContainerOpen { head, colons })
    }
}

/// Split `text` into plain runs and text directives.
///
/// A text directive needs a bracketed label or braced attributes, and its
/// colon must not follow an alphanumeric character or another colon, so
/// times (`10:30`) and URLs (`https://`) stay text.
pub(crate) fn split_text_directives(text: &str) -> Vec<InlinePiece<'_>> {
    let mut pieces = Vec::new();
    let mut plain_start = 0;
    let mut search_from = 0;

    while let Some(offset) = text[search_from..].find(':') {
        let colon = search_from + offset;
        search_from = colon + 1;

        let preceded_ok = text[..colon]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric() && c != ':');
        let after = &text[colon + 1..];
        if !preceded_ok || after.starts_with(':') {
            continue;
        }

        let Some((head, consumed)) = parse_head(after) else {
            continue;
        };
        if head.label.is_none() && !after[..consumed].ends_with('}') {
            continue;
        }

        if colon > plain_start {
            pieces.push(InlinePiece::Text(&text[plain_start..colon]));
        }
        pieces.push(InlinePiece::Directive(head));
        plain_start = colon + 1 + consumed;
        search_from = plain_start;
    }

    if plain_start < text.len() {
        pieces.push(InlinePiece::Text(&text[plain_start..]));
    }
    pieces
}

/// Parse `name[label]{attrs}` at the start of `s`.
///
/// Returns the head and the number of bytes consumed.
fn parse_head(s: &str) -> Option<(DirectiveHead, usize)> {
    if !s.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let name_end = s
        .find(|c: char| !(c.is_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(s.len());
    let name = &s[..name_end];
    let mut pos = name_end;

    let label = match balanced(&s[pos..], '[', ']') {
        Some((inner, used)) => {
            pos += used;
            Some(inner.to_owned())
        }
        None => None,
    };

    let attributes = match balanced(&s[pos..], '{', '}') {
        Some((inner, used)) => {
            pos += used;
            parse_attributes(inner)
        }
        None => Attributes::new(),
    };

    Some((
        DirectiveHead {
            name: name.to_owned(),
            label,
            attributes,
        },
        pos,
    ))
}

/// Content between a balanced pair of delimiters at the start of `s`.
fn balanced(s: &str, open: char, close: char) -> Option<(&str, usize)> {
    if !s.starts_with(open) {
        return None;
    }
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Some((&s[open.len_utf8()..i], i + close.len_utf8()));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::AttrValue;
    use pretty_assertions::assert_eq;

    fn head(name: &str, label: Option<&str>) -> DirectiveHead {
        DirectiveHead {
            name: name.to_owned(),
            label: label.map(str::to_owned),
            attributes: Attributes::new(),
        }
    }

    #[test]
    fn test_container_open() {
        let line = parse_directive_line(":::solution[Uitwerking]{.wide}").unwrap();
        let DirectiveLine::ContainerOpen { head, colons } = line else {
            panic!("expected container open");
        };
        assert_eq!(colons, 3);
        assert_eq!(head.name, "solution");
        assert_eq!(head.label.as_deref(), Some("Uitwerking"));
        assert_eq!(
            head.attributes.get("class"),
            Some(&AttrValue::String("wide".to_owned()))
        );
    }

    #[test]
    fn test_container_close() {
        assert_eq!(
            parse_directive_line(":::"),
            Some(DirectiveLine::ContainerClose { colons: 3 })
        );
        assert_eq!(
            parse_directive_line("  ::::  "),
            Some(DirectiveLine::ContainerClose { colons: 4 })
        );
    }

    #[test]
    fn test_leaf() {
        assert_eq!(
            parse_directive_line("::divider"),
            Some(DirectiveLine::Leaf(head("divider", None)))
        );
    }

    #[test]
    fn test_not_a_directive_line() {
        assert_eq!(parse_directive_line("plain text"), None);
        assert_eq!(parse_directive_line(":single[x]"), None);
        assert_eq!(parse_directive_line("::: 123"), None);
        assert_eq!(parse_directive_line("::leaf trailing words"), None);
    }

    #[test]
    fn test_split_text_directive() {
        let pieces = split_text_directives("Press :kbd[Ctrl+C] to copy.");
        assert_eq!(
            pieces,
            vec![
                InlinePiece::Text("Press "),
                InlinePiece::Directive(head("kbd", Some("Ctrl+C"))),
                InlinePiece::Text(" to copy."),
            ]
        );
    }

    #[test]
    fn test_split_keeps_times_and_urls() {
        let text = "Meet at 10:30 on https://xprtz.net: agenda";
        assert_eq!(split_text_directives(text), vec![InlinePiece::Text(text)]);
    }

    #[test]
    fn test_split_requires_label_or_attributes() {
        let text = "Note:this is prose";
        assert_eq!(split_text_directives(text), vec![InlinePiece::Text(text)]);
        let bare = "word :abbr{title=x} end";
        assert_eq!(split_text_directives(bare).len(), 3);
    }

    #[test]
    fn test_nested_label_brackets() {
        let pieces = split_text_directives(":hint[see [docs]]");
        assert_eq!(
            pieces,
            vec![InlinePiece::Directive(head("hint", Some("see [docs]")))]
        );
    }
}
