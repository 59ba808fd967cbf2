//! Splitting a props bag into variant selections.

use bake_core::{PropValue, Props};

use crate::recipe::VariantSelection;

/// Partition `props` by the declared `variant_keys`.
///
/// Every variant key with an own entry in `props` (even one whose value is
/// `Undefined`) moves into the selection. Every variant key without one is
/// recorded in the remainder as an explicit `Undefined` entry. Props that are
/// not variant keys appear in neither output.
pub fn partition_variants<S: AsRef<str>>(
    props: &Props,
    variant_keys: &[S],
) -> (VariantSelection, Props) {
    let mut selection = VariantSelection::new();
    let mut remainder = Props::new();

    for key in variant_keys {
        let key = key.as_ref();
        match props.get(key) {
            Some(value) => {
                selection.insert(key, value.clone());
            }
            None => {
                remainder.insert(key, PropValue::Undefined);
            }
        }
    }

    (selection, remainder)
}
