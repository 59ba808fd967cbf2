//! Core types for baked components.
//!
//! This crate provides the foundational types shared by the other bake crates:
//! - [`PropValue`] and the insertion-ordered [`Props`] bag
//! - Node descriptors, element kinds, and forwarded refs
//! - Prop merging with `className` concatenation
//! - Error types

pub mod errors;
pub mod merge;
pub mod node;
pub mod props;

#[cfg(feature = "serde")]
mod serde_impls;

pub use errors::*;
pub use merge::{join_classes, merge_props};
pub use node::{Component, ElementKind, FnComponent, Node, NodeRef};
pub use props::{PropValue, Props, AS, CHILDREN, CLASS_NAME};
