//! Pre-configured factories.

use bake_core::ElementKind;

use crate::config::{BakeConfig, InjectMap, StyleSource};
use crate::factory::{bake, BakedComponent};
use crate::Result;

/// Build a [`Baker`] whose components all carry `default_inject`.
pub fn make_bake(default_inject: InjectMap) -> Baker {
    Baker::new(default_inject)
}

/// A [`bake`] with a default injection map.
///
/// A call-site `inject` map is layered on top of the default, whole
/// transforms replacing defaults that share a key.
#[derive(Debug, Clone, Default)]
pub struct Baker {
    default_inject: InjectMap,
}

impl Baker {
    pub fn new(default_inject: InjectMap) -> Self {
        Self { default_inject }
    }

    pub fn default_inject(&self) -> &InjectMap {
        &self.default_inject
    }

    /// Same contract as [`bake`], with the default injection map applied.
    pub fn bake(
        &self,
        kind: impl Into<ElementKind>,
        style: Option<StyleSource>,
        config: Option<BakeConfig>,
    ) -> Result<BakedComponent> {
        let mut config = config.unwrap_or_default();
        config.inject = self.default_inject.merge(&config.inject);
        bake(kind, style, Some(config))
    }
}
