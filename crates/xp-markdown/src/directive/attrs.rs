//! Directive attribute parsing.
//!
//! Parses the body of `{#id .class key="value" flag}` into an ordered map.
//! `#id` lands under `id`, all `.class` shorthands are joined under `class`
//! and a bare key becomes the flag `true`. An unterminated quote ends
//! parsing; everything from its key on is dropped.

use crate::tree::{AttrValue, Attributes};

/// Parse the text between `{` and `}`.
#[must_use]
pub fn parse_attributes(input: &str) -> Attributes {
    let mut attributes = Attributes::new();
    let mut classes: Vec<&str> = Vec::new();
    let mut rest = input.trim();

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('#') {
            let (id, tail) = split_shorthand(after);
            if !id.is_empty() {
                attributes.insert("id".to_owned(), AttrValue::from(id));
            }
            rest = tail;
        } else if let Some(after) = rest.strip_prefix('.') {
            let (class, tail) = split_shorthand(after);
            if !class.is_empty() {
                classes.push(class);
            }
            rest = tail;
        } else {
            match parse_pair(rest) {
                Pair::Parsed(key, value, tail) => {
                    attributes.insert(key.to_owned(), value);
                    rest = tail;
                }
                Pair::Unterminated => break,
                Pair::Invalid => {
                    // Unparseable character.
                    let skip = rest.chars().next().map_or(1, char::len_utf8);
                    rest = &rest[skip..];
                }
            }
        }
        rest = rest.trim_start();
    }

    if !classes.is_empty() {
        let joined = match attributes.remove("class") {
            Some(AttrValue::String(existing)) if !existing.is_empty() => {
                format!("{existing} {}", classes.join(" "))
            }
            _ => classes.join(" "),
        };
        attributes.insert("class".to_owned(), AttrValue::String(joined));
    }

    attributes
}

fn split_shorthand(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| c.is_whitespace() || c == '.' || c == '#')
        .unwrap_or(s.len());
    (&s[..end], &s[end..])
}

enum Pair<'a> {
    Parsed(&'a str, AttrValue, &'a str),
    Unterminated,
    Invalid,
}

/// `key="v"`, `key='v'`, `key=v` or bare `key`.
fn parse_pair(s: &str) -> Pair<'_> {
    let key_end = s
        .find(|c: char| c == '=' || c.is_whitespace())
        .unwrap_or(s.len());
    let key = &s[..key_end];
    if key.is_empty() || !key.chars().all(is_key_char) {
        return Pair::Invalid;
    }

    let Some(after_eq) = s[key_end..].strip_prefix('=') else {
        return Pair::Parsed(key, AttrValue::Bool(true), &s[key_end..]);
    };

    for quote in ['"', '\''] {
        if let Some(quoted) = after_eq.strip_prefix(quote) {
            return match quoted.find(quote) {
                Some(close) => {
                    Pair::Parsed(key, AttrValue::from(&quoted[..close]), &quoted[close + 1..])
                }
                None => Pair::Unterminated,
            };
        }
    }

    let end = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
    Pair::Parsed(key, AttrValue::from(&after_eq[..end]), &after_eq[end..])
}

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | ':')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn string(value: &str) -> AttrValue {
        AttrValue::String(value.to_owned())
    }

    #[test]
    fn test_empty() {
        assert!(parse_attributes("").is_empty());
        assert!(parse_attributes("   ").is_empty());
    }

    #[test]
    fn test_id_and_classes() {
        let attrs = parse_attributes("#answer .hint .wide");
        assert_eq!(attrs.get("id"), Some(&string("answer")));
        assert_eq!(attrs.get("class"), Some(&string("hint wide")));
    }

    #[test]
    fn test_quoted_and_unquoted_values() {
        let attrs = parse_attributes(r#"title="Show me" lang='go' width=560"#);
        assert_eq!(attrs.get("title"), Some(&string("Show me")));
        assert_eq!(attrs.get("lang"), Some(&string("go")));
        assert_eq!(attrs.get("width"), Some(&string("560")));
    }

    #[test]
    fn test_bare_key_is_flag() {
        let attrs = parse_attributes("open title=Tip");
        assert_eq!(attrs.get("open"), Some(&AttrValue::Bool(true)));
        assert_eq!(attrs.get("title"), Some(&string("Tip")));
    }

    #[test]
    fn test_class_shorthand_merges_with_class_key() {
        let attrs = parse_attributes(r#"class="base" .extra"#);
        assert_eq!(attrs.get("class"), Some(&string("base extra")));
    }

    #[test]
    fn test_unterminated_quote_drops_rest() {
        assert!(parse_attributes(r#"title="oops"#).is_empty());

        let attrs = parse_attributes(r#"#answer open title='oops more words"#);
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("id"), Some(&string("answer")));
        assert_eq!(attrs.get("open"), Some(&AttrValue::Bool(true)));
    }
}
