//! Markup output for mounted elements.

use bake_core::{PropValue, Props, CLASS_NAME};

use crate::element::{Child, Element};
use crate::names::{is_valid_attribute_name, is_valid_tag_name};

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Write an element tree as markup.
///
/// `className` is written as `class` and `htmlFor` as `for`. Nullish, `false`,
/// and non-data attributes (element kinds, nodes) are omitted; `true` is
/// written as a bare attribute. Map values are written as style declarations.
/// Elements with an invalid tag name and attributes with an invalid name are
/// skipped.
pub fn to_markup(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

fn write_element(element: &Element, out: &mut String) {
    if !is_valid_tag_name(&element.tag) {
        tracing::warn!(tag = %element.tag, "skipping element with an invalid tag name");
        return;
    }

    out.push('<');
    out.push_str(&element.tag);
    write_attributes(&element.attributes, out);
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag.as_str()) {
        return;
    }

    for child in &element.children {
        match child {
            Child::Text(text) => out.push_str(&escape_xml(text)),
            Child::Element(inner) => write_element(inner, out),
        }
    }

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn write_attributes(attributes: &Props, out: &mut String) {
    for (name, value) in attributes.iter() {
        let name = match name {
            CLASS_NAME => "class",
            "htmlFor" => "for",
            other => other,
        };
        if !is_valid_attribute_name(name) {
            tracing::warn!(attribute = %name, "skipping attribute with an invalid name");
            continue;
        }
        match value {
            PropValue::Bool(true) => {
                out.push(' ');
                out.push_str(name);
            }
            PropValue::String(s) => push_attribute(out, name, s),
            PropValue::Number(n) => push_attribute(out, name, &n.to_string()),
            PropValue::List(items) => {
                let joined: Vec<String> = items.iter().filter_map(scalar_text).collect();
                push_attribute(out, name, &joined.join(" "));
            }
            PropValue::Map(map) => push_attribute(out, name, &style_text(map)),
            _ => {}
        }
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_xml(value));
    out.push('"');
}

fn scalar_text(value: &PropValue) -> Option<String> {
    match value {
        PropValue::String(s) => Some(s.clone()),
        PropValue::Number(n) => Some(n.to_string()),
        PropValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `{ backgroundColor: "red" }` becomes `background-color: red;`.
fn style_text(map: &Props) -> String {
    map.iter()
        .filter_map(|(key, value)| {
            scalar_text(value).map(|text| format!("{}: {};", kebab_case(key), text))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
