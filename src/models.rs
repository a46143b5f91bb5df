//! Frontend Models
//!
//! Data structures shown by the list components.

use serde::{Deserialize, Serialize};

/// A named, calorie-valued record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub calories: u32,
}

/// One catalog section: a category label and its items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodList {
    pub category: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Separator between an entry's name and its calories
pub const ENTRY_SEPARATOR: &str = " : \u{a0} ";

/// Display projection of an item inside an ordered list
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    /// Identity key (the item id)
    pub key: u32,
    pub name: String,
    pub calories: String,
}

impl From<&Item> for ListEntry {
    fn from(item: &Item) -> Self {
        Self {
            key: item.id,
            name: item.name.clone(),
            calories: item.calories.to_string(),
        }
    }
}

impl ListEntry {
    /// Plain-text rendering of the entry
    pub fn text(&self) -> String {
        format!("{}{}{}", self.name, ENTRY_SEPARATOR, self.calories)
    }
}

/// Project items into list entries, preserving input order
pub fn list_entries(items: &[Item]) -> Vec<ListEntry> {
    items.iter().map(ListEntry::from).collect()
}
