//! Bake an element kind and an optional style recipe into a component.
//!
//! A baked component accepts the base element's props, the recipe's variant
//! props, and any injected props. On each render it splits out the variant
//! selection, computes the class, strips consumed variants, resolves the `as`
//! override, runs injection transforms, and merges everything into a single
//! node descriptor.
//!
//! # Example
//!
//! ```
//! use bake::{bake, mount, props, Node, RecipeBuilder, StyleSource};
//!
//! let recipe = RecipeBuilder::new("btn")
//!     .base("btn")
//!     .variant("tone", ["primary", "ghost"])
//!     .default_variant("tone", "primary")
//!     .build()?;
//!
//! let button = bake("button", Some(StyleSource::from(recipe)), None)?;
//! let element = mount(&Node::new(button, props! { "tone" => "ghost" }))?;
//!
//! assert!(element.has_class("btn btn_tone_ghost"));
//! assert!(!element.has_attribute("tone"));
//! # Ok::<(), bake::BakeError>(())
//! ```

mod baker;
mod config;
mod factory;

pub use baker::{make_bake, Baker};
pub use config::{BakeConfig, InjectFn, InjectMap, StyleSource};
pub use factory::{bake, BakedComponent};

pub use bake_core::{
    merge_props, props, BakeError, Component, ConfigError, ElementKind, Node, NodeRef, PropValue,
    Props, RecipeError, RenderError, AS, CHILDREN, CLASS_NAME,
};
pub use bake_dom::{mount, render_to_string, to_markup, Child, Element};
pub use bake_recipe::{
    partition_variants, Recipe, RecipeBuilder, RecipeDefinition, RuntimeRecipe, VariantSelection,
};

/// Result type alias for bake operations.
pub type Result<T> = std::result::Result<T, BakeError>;
