//! A minimal renderer for baked components.
//!
//! This crate handles:
//! - Expanding component kinds until intrinsic elements remain
//! - Attaching forwarded refs to the elements they land on
//! - Writing element trees out as markup

mod element;
mod markup;
mod mount;
mod names;

pub use element::{Child, Element};
pub use markup::to_markup;
pub use mount::{mount, MAX_EXPANSION_DEPTH};

use bake_core::{Node, RenderError};

/// Mount a node and write it out as markup.
pub fn render_to_string(node: &Node) -> Result<String, RenderError> {
    mount(node).map(|element| to_markup(&element))
}
