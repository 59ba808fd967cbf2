//! A data-driven recipe runtime.
//!
//! A recipe declares base classes, variant groups with one class per option,
//! default options, and compound variants that add a class when several
//! options are selected together.

use std::borrow::Cow;

use bake_core::{join_classes, PropValue, RecipeError};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

use crate::recipe::{Recipe, VariantSelection};
use crate::Result;

/// Declarative recipe data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeDefinition {
    /// Classes applied to every selection.
    #[serde(deserialize_with = "one_or_many")]
    pub base: Vec<String>,
    /// Variant group -> option -> class.
    pub variants: IndexMap<String, IndexMap<String, String>>,
    /// Variant group -> option used when the caller selects nothing.
    #[serde(deserialize_with = "option_keys")]
    pub default_variants: IndexMap<String, String>,
    pub compound_variants: Vec<CompoundVariant>,
}

/// A class applied when every listed group resolves to the listed option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompoundVariant {
    #[serde(deserialize_with = "option_keys")]
    pub variants: IndexMap<String, String>,
    pub class: String,
}

/// A validated recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeRecipe {
    definition: RecipeDefinition,
}

impl RuntimeRecipe {
    /// Validate a definition.
    ///
    /// Defaults and compound conditions must name declared groups and options.
    pub fn new(definition: RecipeDefinition) -> Result<Self> {
        for (group, option) in &definition.default_variants {
            check_option(&definition, group, option, "defaultVariants")?;
        }
        for compound in &definition.compound_variants {
            for (group, option) in &compound.variants {
                check_option(&definition, group, option, "compoundVariants")?;
            }
        }
        Ok(Self { definition })
    }

    /// Parse and validate a JSON definition.
    pub fn from_json(json: &str) -> Result<Self> {
        let definition: RecipeDefinition =
            serde_json::from_str(json).map_err(|e| RecipeError::InvalidDefinition {
                message: e.to_string(),
                line: e.line(),
                column: e.column(),
            })?;
        Self::new(definition)
    }

    pub fn definition(&self) -> &RecipeDefinition {
        &self.definition
    }

    /// Resolve each declared group to its selected option, falling back to
    /// the default.
    fn resolve<'a>(&'a self, selection: &'a VariantSelection) -> IndexMap<&'a str, Cow<'a, str>> {
        let mut resolved = IndexMap::with_capacity(self.definition.variants.len());
        for group in self.definition.variants.keys() {
            let chosen = selection
                .get(group)
                .filter(|value| !value.is_nullish())
                .and_then(option_key)
                .or_else(|| {
                    self.definition
                        .default_variants
                        .get(group)
                        .map(|option| Cow::Borrowed(option.as_str()))
                });
            if let Some(option) = chosen {
                resolved.insert(group.as_str(), option);
            }
        }
        resolved
    }
}

impl Recipe for RuntimeRecipe {
    fn variant_keys(&self) -> Vec<String> {
        self.definition.variants.keys().cloned().collect()
    }

    fn apply(&self, selection: &VariantSelection) -> String {
        let resolved = self.resolve(selection);
        let mut classes: SmallVec<[&str; 8]> =
            self.definition.base.iter().map(String::as_str).collect();

        for (group, option) in &resolved {
            match self.definition.variants[*group].get(&**option) {
                Some(class) => classes.push(class),
                None => {
                    tracing::trace!(group, option = %option, "selection names no declared option")
                }
            }
        }

        for compound in &self.definition.compound_variants {
            let matches = compound.variants.iter().all(|(group, option)| {
                resolved
                    .get(group.as_str())
                    .is_some_and(|chosen| chosen == option)
            });
            if matches {
                classes.push(&compound.class);
            }
        }

        join_classes(classes)
    }
}

/// Builds recipes in code.
///
/// Options declared through [`RecipeBuilder::variant`] get the generated class
/// `{debug_id}_{group}_{option}`.
#[derive(Debug, Clone)]
pub struct RecipeBuilder {
    debug_id: String,
    definition: RecipeDefinition,
}

impl RecipeBuilder {
    pub fn new(debug_id: impl Into<String>) -> Self {
        Self {
            debug_id: debug_id.into(),
            definition: RecipeDefinition::default(),
        }
    }

    /// Add a base class.
    pub fn base(mut self, class: impl Into<String>) -> Self {
        self.definition.base.push(class.into());
        self
    }

    /// Declare a variant group whose option classes are generated.
    pub fn variant<I, S>(mut self, group: &str, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let classes = options
            .into_iter()
            .map(|option| {
                let option = option.into();
                let class = format!("{}_{}_{}", self.debug_id, group, option);
                (option, class)
            })
            .collect();
        self.definition.variants.insert(group.to_string(), classes);
        self
    }

    /// Declare a variant group with explicit option classes.
    pub fn variant_classes<I, O, C>(mut self, group: &str, options: I) -> Self
    where
        I: IntoIterator<Item = (O, C)>,
        O: Into<String>,
        C: Into<String>,
    {
        let classes = options
            .into_iter()
            .map(|(option, class)| (option.into(), class.into()))
            .collect();
        self.definition.variants.insert(group.to_string(), classes);
        self
    }

    pub fn default_variant(mut self, group: &str, option: &str) -> Self {
        self.definition
            .default_variants
            .insert(group.to_string(), option.to_string());
        self
    }

    pub fn compound_variant(
        mut self,
        conditions: &[(&str, &str)],
        class: impl Into<String>,
    ) -> Self {
        self.definition.compound_variants.push(CompoundVariant {
            variants: conditions
                .iter()
                .map(|(group, option)| (group.to_string(), option.to_string()))
                .collect(),
            class: class.into(),
        });
        self
    }

    pub fn build(self) -> Result<RuntimeRecipe> {
        RuntimeRecipe::new(self.definition)
    }
}

fn check_option(
    definition: &RecipeDefinition,
    group: &str,
    option: &str,
    context: &str,
) -> Result<()> {
    let options = definition
        .variants
        .get(group)
        .ok_or_else(|| RecipeError::UnknownVariantGroup {
            group: group.to_string(),
            context: context.to_string(),
        })?;
    if !options.contains_key(option) {
        return Err(RecipeError::UnknownVariantOption {
            group: group.to_string(),
            option: option.to_string(),
        });
    }
    Ok(())
}

/// The option name a selected value refers to. Booleans select the
/// `"true"`/`"false"` options.
fn option_key(value: &PropValue) -> Option<Cow<'_, str>> {
    match value {
        PropValue::String(s) => Some(Cow::Borrowed(s.as_str())),
        PropValue::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        PropValue::Number(n) => Some(Cow::Owned(n.to_string())),
        _ => None,
    }
}

fn one_or_many<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(class) => vec![class],
        OneOrMany::Many(classes) => classes,
    })
}

/// Option names may be written as strings, booleans, or numbers.
fn option_keys<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<IndexMap<String, String>, D::Error> {
    let raw = IndexMap::<String, serde_json::Value>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(group, value)| {
            let option = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Number(n) => n.to_string(),
                other => {
                    return Err(serde::de::Error::custom(format!(
                        "variant option for '{}' must be a string, boolean, or number, found {}",
                        group, other
                    )))
                }
            };
            Ok((group, option))
        })
        .collect()
}
