//! Bundled Catalog
//!
//! Demo category lists embedded at compile time.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::models::FoodList;

/// Catalog JSON shipped with the app
const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.json");

/// All lists shown by the app shell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub lists: Vec<FoodList>,
}

impl Catalog {
    /// Parse and validate a catalog document
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load the catalog embedded in the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Categories must be non-blank; ids must be unique within a list.
    fn validate(&self) -> Result<()> {
        for (index, list) in self.lists.iter().enumerate() {
            if list.category.trim().is_empty() {
                return Err(CatalogError::empty_category(index));
            }
            let mut seen = HashSet::new();
            for item in &list.items {
                if !seen.insert(item.id) {
                    return Err(CatalogError::duplicate_id(&list.category, item.id));
                }
            }
        }
        Ok(())
    }

    /// Total item count across all lists
    pub fn item_count(&self) -> usize {
        self.lists.iter().map(|list| list.items.len()).sum()
    }
}
