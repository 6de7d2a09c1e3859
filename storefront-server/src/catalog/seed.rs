//! Catalog seed file
//!
//! The seed is plain JSON: a category list plus one configurator bundle
//! per product, in the exact shape the detail endpoint serves. Array
//! order is meaningful for tents and accessories (listing order drives
//! the default-tent fallback), so the loader never reorders them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use shared::catalog::{Category, ProductDetail};
use shared::{AppError, AppResult};

/// Deserialized seed file content, unvalidated
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<ProductDetail>,
}

impl CatalogSeed {
    /// Read and parse a seed file
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::catalog_source(format!(
                "Failed to read catalog seed {}: {}",
                path.display(),
                e
            ))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            AppError::catalog_source(format!(
                "Failed to parse catalog seed {}: {}",
                path.display(),
                e
            ))
        })
    }
}
