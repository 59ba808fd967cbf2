//! Tag and attribute name checks.
//!
//! Names reach the output unescaped, so anything outside the HTML name
//! grammar is refused before it is written.

/// An attribute name: non-empty, with no whitespace, controls, quotes,
/// `<`, `>`, `/`, or `=`.
pub(crate) fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_name_char)
}

/// A tag name: an ASCII letter followed by attribute-name characters.
pub(crate) fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(is_name_char),
        _ => false,
    }
}

fn is_name_char(c: char) -> bool {
    !(c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '='))
}
