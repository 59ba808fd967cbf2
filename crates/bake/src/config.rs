//! Factory configuration: style sources, bake options, and injection maps.

use std::fmt;
use std::rc::Rc;

use bake_core::{PropValue, Props};
use bake_recipe::{Recipe, RuntimeRecipe};
use indexmap::IndexMap;

/// Where a baked component gets its class from.
#[derive(Clone)]
pub enum StyleSource {
    /// A fixed class string.
    Literal(String),
    /// Fixed classes, joined with single spaces in order.
    LiteralList(Vec<String>),
    /// A recipe evaluated on every render.
    Dynamic(Rc<dyn Recipe>),
}

impl StyleSource {
    pub fn recipe<R: Recipe + 'static>(recipe: R) -> Self {
        StyleSource::Dynamic(Rc::new(recipe))
    }

    /// Short name of the source's shape, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            StyleSource::Literal(_) => "literal",
            StyleSource::LiteralList(_) => "literal-list",
            StyleSource::Dynamic(_) => "recipe",
        }
    }
}

impl fmt::Debug for StyleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleSource::Literal(class) => f.debug_tuple("Literal").field(class).finish(),
            StyleSource::LiteralList(classes) => {
                f.debug_tuple("LiteralList").field(classes).finish()
            }
            StyleSource::Dynamic(recipe) => f
                .debug_tuple("Dynamic")
                .field(&recipe.variant_keys())
                .finish(),
        }
    }
}

impl From<&str> for StyleSource {
    fn from(class: &str) -> Self {
        StyleSource::Literal(class.to_string())
    }
}

impl From<String> for StyleSource {
    fn from(class: String) -> Self {
        StyleSource::Literal(class)
    }
}

impl From<Vec<String>> for StyleSource {
    fn from(classes: Vec<String>) -> Self {
        StyleSource::LiteralList(classes)
    }
}

impl From<Vec<&str>> for StyleSource {
    fn from(classes: Vec<&str>) -> Self {
        StyleSource::LiteralList(classes.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for StyleSource {
    fn from(classes: [&str; N]) -> Self {
        StyleSource::LiteralList(classes.iter().map(|c| c.to_string()).collect())
    }
}

impl From<RuntimeRecipe> for StyleSource {
    fn from(recipe: RuntimeRecipe) -> Self {
        StyleSource::recipe(recipe)
    }
}

impl From<Rc<dyn Recipe>> for StyleSource {
    fn from(recipe: Rc<dyn Recipe>) -> Self {
        StyleSource::Dynamic(recipe)
    }
}

/// Turns the value a caller passed for an injected prop into extra props.
pub type InjectFn = Rc<dyn Fn(&PropValue) -> Props>;

/// Injected prop name -> transform, in declaration order.
#[derive(Clone, Default)]
pub struct InjectMap {
    transforms: IndexMap<String, InjectFn>,
}

impl InjectMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with<F>(mut self, key: impl Into<String>, transform: F) -> Self
    where
        F: Fn(&PropValue) -> Props + 'static,
    {
        self.insert(key, transform);
        self
    }

    /// Insert or replace a transform. A replaced key keeps its position.
    pub fn insert<F>(&mut self, key: impl Into<String>, transform: F)
    where
        F: Fn(&PropValue) -> Props + 'static,
    {
        self.transforms.insert(key.into(), Rc::new(transform));
    }

    pub fn get(&self, key: &str) -> Option<&InjectFn> {
        self.transforms.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.transforms.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.transforms.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InjectFn)> {
        self.transforms.iter().map(|(k, f)| (k.as_str(), f))
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Layer `overrides` on top of `self`.
    ///
    /// Whole transforms move: on a shared key the override replaces the
    /// default in the default's position, and new keys are appended.
    pub fn merge(&self, overrides: &InjectMap) -> InjectMap {
        let mut merged = self.clone();
        for (key, transform) in &overrides.transforms {
            merged.transforms.insert(key.clone(), Rc::clone(transform));
        }
        merged
    }
}

impl fmt::Debug for InjectMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.transforms.keys()).finish()
    }
}

/// Options for [`bake`](crate::bake).
#[derive(Debug, Clone, Default)]
pub struct BakeConfig {
    /// Variant keys callers are expected to supply. Declarative only: a
    /// missing required variant still renders.
    pub required: Vec<String>,
    /// Variant keys that stay on the rendered props after the recipe
    /// consumes them.
    pub forward: Vec<String>,
    pub inject: InjectMap,
}

impl BakeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn forward<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forward.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn inject<F>(mut self, key: impl Into<String>, transform: F) -> Self
    where
        F: Fn(&PropValue) -> Props + 'static,
    {
        self.inject.insert(key, transform);
        self
    }

    pub fn inject_map(mut self, inject: InjectMap) -> Self {
        self.inject = inject;
        self
    }
}
