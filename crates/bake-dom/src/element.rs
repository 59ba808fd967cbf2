//! Mounted element trees.

use bake_core::{PropValue, Props, CLASS_NAME};

/// An intrinsic element after all component kinds have been expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    /// Every prop except `children`.
    pub attributes: Props,
    pub children: Vec<Child>,
}

/// Mounted content of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Text(String),
    Element(Element),
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Props::new(),
            children: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&PropValue> {
        self.attributes.get(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Classes from the `className` attribute.
    pub fn class_list(&self) -> Vec<&str> {
        self.attributes
            .get(CLASS_NAME)
            .and_then(PropValue::as_str)
            .map(|class| class.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// True when every class in `classes` (space-separated) is present.
    pub fn has_class(&self, classes: &str) -> bool {
        let list = self.class_list();
        classes.split_whitespace().all(|class| list.contains(&class))
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        collect_text(self, &mut text);
        text
    }

    /// Depth-first search for the first element whose `name` attribute is the
    /// string `value`, including this one.
    pub fn find_by_attribute(&self, name: &str, value: &str) -> Option<&Element> {
        if self.attribute(name).and_then(PropValue::as_str) == Some(value) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Child::Element(element) => element.find_by_attribute(name, value),
            Child::Text(_) => None,
        })
    }

    pub fn find_by_test_id(&self, id: &str) -> Option<&Element> {
        self.find_by_attribute("data-testid", id)
    }
}

fn collect_text(element: &Element, out: &mut String) {
    for child in &element.children {
        match child {
            Child::Text(text) => out.push_str(text),
            Child::Element(inner) => collect_text(inner, out),
        }
    }
}
