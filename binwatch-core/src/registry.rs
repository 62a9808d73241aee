//! Ordered registry of waste categories and heading resolution.

use serde::{Deserialize, Serialize};

use crate::model::{CategoryColor, CategoryDefinition};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Immutable, ordered set of category definitions.
///
/// Declaration order matters: when a heading contains label variants of more
/// than one category, the earlier definition wins.
pub struct CategoryRegistry {
    definitions: Vec<CategoryDefinition>,
}

impl CategoryRegistry {
    /// Build a registry from an ordered definition list.
    #[must_use]
    pub fn new(definitions: Vec<CategoryDefinition>) -> Self {
        Self { definitions }
    }

    /// The four North Lanarkshire bin categories, in display order.
    #[must_use]
    pub fn north_lanarkshire() -> Self {
        Self::new(vec![
            definition(
                "general",
                "General Waste",
                &["general waste", "general"],
                CategoryColor::Green,
            ),
            definition(
                "blue",
                "Blue-lidded Recycling Bin",
                &[
                    "blue-lidded recycling bin",
                    "blue-lidded recycling",
                    "blue recycling",
                ],
                CategoryColor::Blue,
            ),
            definition(
                "food",
                "Food and Garden",
                &["food and garden", "food & garden", "food and garden waste"],
                CategoryColor::Brown,
            ),
            definition(
                "glass",
                "Glass, Metals, Plastics and Cartons",
                &[
                    "glass, metals, plastics and cartons",
                    "glass, metals, plastics",
                    "glass",
                ],
                CategoryColor::Grey,
            ),
        ])
    }

    /// Definitions in declaration order.
    #[must_use]
    pub fn definitions(&self) -> &[CategoryDefinition] {
        &self.definitions
    }

    /// Resolve a block heading to a category definition.
    ///
    /// The heading is lowercased and tested for substring containment against
    /// each definition's label variants in declaration order; the first
    /// definition with any matching variant wins. `None` means the block
    /// belongs to no registered category and should be skipped.
    #[must_use]
    pub fn resolve(&self, heading: &str) -> Option<&CategoryDefinition> {
        let normalized = heading.to_lowercase();
        self.definitions.iter().find(|candidate| {
            candidate
                .label_variants
                .iter()
                .any(|variant| normalized.contains(variant.as_str()))
        })
    }
}

fn definition(
    key: &str,
    display_name: &str,
    label_variants: &[&str],
    color: CategoryColor,
) -> CategoryDefinition {
    CategoryDefinition {
        key: key.to_owned(),
        display_name: display_name.to_owned(),
        label_variants: label_variants.iter().map(|&variant| variant.to_owned()).collect(),
        color,
    }
}
