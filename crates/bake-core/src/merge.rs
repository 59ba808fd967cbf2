//! Prop merging.
//!
//! Sources are applied left to right as shallow overrides. The one exception
//! is `className`, whose values are concatenated in source order. Nested maps
//! such as `style` are replaced whole, never combined.

use smallvec::SmallVec;

use crate::props::{PropValue, Props, CLASS_NAME};

/// Merge partial prop bags, later sources winning on key collision.
///
/// `className` values are joined with a single space instead of replaced.
/// Absent, nullish, and empty class values contribute nothing; when no source
/// contributes a class the result has no `className` entry.
pub fn merge_props<I>(sources: I) -> Props
where
    I: IntoIterator<Item = Props>,
{
    let mut merged = Props::new();
    let mut classes: SmallVec<[String; 4]> = SmallVec::new();

    for source in sources {
        for (key, value) in source {
            if key == CLASS_NAME {
                if let Some(class) = class_value(&value) {
                    if classes.is_empty() {
                        // Reserve the slot so the class keeps its first position.
                        merged.insert(CLASS_NAME, PropValue::Undefined);
                    }
                    classes.push(class);
                }
                continue;
            }
            merged.insert(key, value);
        }
    }

    if !classes.is_empty() {
        merged.insert(CLASS_NAME, classes.join(" "));
    }
    merged
}

/// Join class fragments with single spaces, skipping empty ones.
pub fn join_classes<'a, I>(classes: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let parts: SmallVec<[&str; 8]> = classes
        .into_iter()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();
    parts.join(" ")
}

/// Class text contributed by one `className` value. Scalars are written as
/// text; lists contribute their scalar items.
fn class_value(value: &PropValue) -> Option<String> {
    let class = match value {
        PropValue::List(items) => {
            let parts: SmallVec<[String; 4]> = items.iter().filter_map(class_text).collect();
            join_classes(parts.iter().map(String::as_str))
        }
        other => join_classes([class_text(other)?.as_str()]),
    };
    (!class.is_empty()).then_some(class)
}

fn class_text(value: &PropValue) -> Option<String> {
    match value {
        PropValue::String(s) => Some(s.clone()),
        PropValue::Number(n) => Some(n.to_string()),
        PropValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
