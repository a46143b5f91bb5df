//! Catalog error types

use thiserror::Error;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading the bundled catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog JSON could not be parsed
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A list has a blank category label
    #[error("list #{index} has an empty category")]
    EmptyCategory {
        /// Position of the list in the catalog
        index: usize,
    },

    /// Two items in the same list share an id
    #[error("duplicate item id {id} in category '{category}'")]
    DuplicateId {
        /// Category of the offending list
        category: String,
        /// The repeated id
        id: u32,
    },
}

impl CatalogError {
    /// Create an EmptyCategory error
    #[inline]
    pub fn empty_category(index: usize) -> Self {
        Self::EmptyCategory { index }
    }

    /// Create a DuplicateId error
    #[inline]
    pub fn duplicate_id(category: impl Into<String>, id: u32) -> Self {
        Self::DuplicateId {
            category: category.into(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_category_error() {
        let err = CatalogError::empty_category(2);
        assert!(err.to_string().contains("#2"));
        assert!(err.to_string().contains("empty category"));
    }

    #[test]
    fn test_duplicate_id_error() {
        let err = CatalogError::duplicate_id("Fruits", 7);
        assert!(err.to_string().contains("Fruits"));
        assert!(err.to_string().contains("duplicate item id 7"));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: CatalogError = json_err.into();
        assert!(err.to_string().starts_with("malformed catalog"));
    }
}
