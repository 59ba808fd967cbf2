//! The component factory.

use std::fmt;
use std::rc::Rc;

use bake_core::{
    merge_props, Component, ConfigError, ElementKind, Node, NodeRef, PropValue, Props, AS,
    CLASS_NAME,
};
use bake_recipe::{partition_variants, Recipe, VariantSelection};

use crate::config::{BakeConfig, InjectFn, StyleSource};
use crate::Result;

/// Bake an element kind and an optional style source into a component.
///
/// The style source is resolved here, once. Malformed configuration fails
/// now rather than on first render; rendering itself never fails.
pub fn bake(
    kind: impl Into<ElementKind>,
    style: Option<StyleSource>,
    config: Option<BakeConfig>,
) -> Result<BakedComponent> {
    let kind = kind.into();
    let config = config.unwrap_or_default();

    if config.inject.contains_key(AS) {
        let key = AS.to_string();
        return Err(ConfigError::ReservedInjectKey { key }.into());
    }

    let style = match style {
        None => ResolvedStyle::None,
        Some(StyleSource::Literal(class)) => ResolvedStyle::Fixed(class),
        Some(StyleSource::LiteralList(classes)) => ResolvedStyle::Fixed(classes.join(" ")),
        Some(StyleSource::Dynamic(recipe)) => ResolvedStyle::Dynamic(recipe),
    };

    if !matches!(style, ResolvedStyle::Dynamic(_)) {
        if let Some(key) = config.forward.first() {
            let key = key.clone();
            return Err(ConfigError::ForwardWithoutRecipe { key }.into());
        }
    }

    let name = format!("Baked({})", kind.name());
    tracing::debug!(
        component = %name,
        style = style.kind_name(),
        forward = config.forward.len(),
        inject = config.inject.len(),
        "baked component"
    );

    Ok(BakedComponent {
        inner: Rc::new(Baked {
            name,
            kind,
            style,
            config,
        }),
    })
}

/// A style source after construction-time resolution.
enum ResolvedStyle {
    None,
    Fixed(String),
    Dynamic(Rc<dyn Recipe>),
}

impl ResolvedStyle {
    fn kind_name(&self) -> &'static str {
        match self {
            ResolvedStyle::None => "none",
            ResolvedStyle::Fixed(_) => "fixed",
            ResolvedStyle::Dynamic(_) => "recipe",
        }
    }
}

struct Baked {
    name: String,
    kind: ElementKind,
    style: ResolvedStyle,
    config: BakeConfig,
}

/// A component produced by [`bake`].
///
/// Cheap to clone; clones are the same component. Use it directly as an
/// element kind, or pass it through another component's `as` prop.
#[derive(Clone)]
pub struct BakedComponent {
    inner: Rc<Baked>,
}

impl BakedComponent {
    /// The element kind rendered when no `as` override is given.
    pub fn element_kind(&self) -> &ElementKind {
        &self.inner.kind
    }

    pub fn config(&self) -> &BakeConfig {
        &self.inner.config
    }

    /// Compute the element kind and final props for one render.
    pub fn compose(&self, mut props: Props) -> (ElementKind, Props) {
        let baked = &*self.inner;

        // Injection reads the caller's values before anything is consumed.
        let injections: Vec<(&InjectFn, PropValue)> = baked
            .config
            .inject
            .iter()
            .filter_map(|(key, transform)| {
                props.get(key).map(|value| (transform, value.clone()))
            })
            .collect();

        let class_name = match &baked.style {
            ResolvedStyle::None => None,
            ResolvedStyle::Fixed(class) => Some(class.clone()),
            ResolvedStyle::Dynamic(recipe) => {
                let keys = recipe.variant_keys();
                let (selection, remainder) = partition_variants(&props, &keys);
                self.note_missing_required(&selection);
                let class = recipe.apply(&selection);

                // Declared but unset variants stay present as `Undefined`.
                props.extend(remainder);
                for key in selection.keys() {
                    if !baked.config.forward.iter().any(|f| f == key) {
                        props.remove(key);
                    }
                }
                Some(class)
            }
        };

        let kind = match props.remove(AS) {
            Some(PropValue::Kind(kind)) => kind,
            Some(PropValue::String(tag)) if !tag.is_empty() => ElementKind::Intrinsic(tag),
            Some(other) => {
                if !other.is_nullish() {
                    tracing::debug!(
                        component = %baked.name,
                        found = other.type_name(),
                        "ignoring element override that is not an element kind"
                    );
                }
                baked.kind.clone()
            }
            None => baked.kind.clone(),
        };

        for key in baked.config.inject.keys() {
            props.remove(key);
        }

        let mut sources = Vec::with_capacity(2 + injections.len());
        sources.push(Props::new().with(CLASS_NAME, class_name));
        sources.push(props);
        for (transform, value) in injections {
            let mut injected = transform(&value);
            if injected.remove(AS).is_some() {
                tracing::warn!(
                    component = %baked.name,
                    "injection produced the reserved element override; discarding it"
                );
            }
            sources.push(injected);
        }

        let merged = merge_props(sources);
        tracing::trace!(
            component = %baked.name,
            kind = kind.name(),
            class = merged.class_name().unwrap_or_default(),
            props = merged.len(),
            "composed props"
        );
        (kind, merged)
    }

    fn note_missing_required(&self, selection: &VariantSelection) {
        for key in &self.inner.config.required {
            if !selection.contains_key(key) {
                tracing::debug!(
                    component = %self.inner.name,
                    variant = %key,
                    "required variant not supplied; using recipe default"
                );
            }
        }
    }
}

impl Component for BakedComponent {
    fn render(&self, props: Props, node_ref: Option<NodeRef>) -> Node {
        let (kind, merged) = self.compose(props);
        Node::create(kind, merged, node_ref)
    }

    fn display_name(&self) -> &str {
        &self.inner.name
    }
}

impl fmt::Debug for BakedComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BakedComponent")
            .field("kind", &self.inner.kind)
            .field("style", &self.inner.style.kind_name())
            .field("config", &self.inner.config)
            .finish()
    }
}

impl From<BakedComponent> for ElementKind {
    fn from(component: BakedComponent) -> Self {
        ElementKind::component(component)
    }
}

impl From<BakedComponent> for PropValue {
    fn from(component: BakedComponent) -> Self {
        PropValue::Kind(component.into())
    }
}
