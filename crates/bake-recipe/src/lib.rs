//! Variant recipes for baked components.
//!
//! This crate handles:
//! - The [`Recipe`] capability (known variant keys, selection to class name)
//! - A data-driven recipe runtime, buildable in code or loaded from JSON
//! - Partitioning a props bag into a variant selection and a remainder

mod partition;
mod recipe;
mod runtime;

pub use partition::partition_variants;
pub use recipe::{Recipe, VariantSelection};
pub use runtime::{CompoundVariant, RecipeBuilder, RecipeDefinition, RuntimeRecipe};

/// Result type alias for recipe construction.
pub type Result<T> = std::result::Result<T, bake_core::RecipeError>;
