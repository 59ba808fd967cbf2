//! Error types for baked components.

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum BakeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Recipe(#[from] RecipeError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Malformed factory configuration, reported when a component is baked.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Inject key '{key}' is reserved for the element override")]
    ReservedInjectKey { key: String },

    #[error("Cannot forward variant '{key}': the style source is not a recipe")]
    ForwardWithoutRecipe { key: String },
}

/// Malformed recipe definitions.
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Unknown variant group '{group}' in {context}")]
    UnknownVariantGroup { group: String, context: String },

    #[error("Unknown option '{option}' for variant group '{group}'")]
    UnknownVariantOption { group: String, option: String },

    #[error("Invalid recipe definition at line {line}, column {column}: {message}")]
    InvalidDefinition {
        message: String,
        line: usize,
        column: usize,
    },
}

/// Errors while mounting node descriptors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Maximum component nesting depth ({depth}) exceeded")]
    MaxDepthExceeded { depth: u32 },

    #[error("Invalid element tag name '{tag}'")]
    InvalidTagName { tag: String },
}
