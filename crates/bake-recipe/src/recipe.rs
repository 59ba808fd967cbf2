//! The recipe capability.

use std::rc::Rc;

use bake_core::Props;

/// A mapping from variant keys to the values a caller selected.
///
/// Keys the caller did not supply are absent; filling them in is the
/// recipe's job.
pub type VariantSelection = Props;

/// Maps a variant selection to a class name.
pub trait Recipe {
    /// The declared variant keys. Stable for the lifetime of the recipe.
    fn variant_keys(&self) -> Vec<String>;

    /// Compute the class name for `selection`, using the recipe's own
    /// defaults for unspecified keys.
    fn apply(&self, selection: &VariantSelection) -> String;
}

impl<R: Recipe + ?Sized> Recipe for Rc<R> {
    fn variant_keys(&self) -> Vec<String> {
        (**self).variant_keys()
    }

    fn apply(&self, selection: &VariantSelection) -> String {
        (**self).apply(selection)
    }
}
