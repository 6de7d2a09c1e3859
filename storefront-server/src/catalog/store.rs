//! Validated in-memory catalog store
//!
//! Loads the seed once, validates it, sorts products and categories by
//! display order and serves read-only lookups to the API handlers.
//! Tent and accessory association lists keep their seed order.

use std::collections::HashSet;

use tracing::warn;

use shared::catalog::{Category, Product, ProductDetail};
use shared::{AppError, AppResult, ErrorCode};

use super::seed::CatalogSeed;

/// Upper bound for any price field, in whole rubles
pub const MAX_PRICE: i64 = 100_000_000;

/// Immutable catalog loaded at startup
#[derive(Debug)]
pub struct CatalogStore {
    categories: Vec<Category>,
    products: Vec<ProductDetail>,
}

impl CatalogStore {
    /// Load, validate and index a seed file
    pub fn load_file(path: &str) -> AppResult<Self> {
        let seed = CatalogSeed::from_path(path)?;
        let store = Self::from_seed(seed)?;
        tracing::info!(
            products = store.product_count(),
            categories = store.category_count(),
            path,
            "Catalog loaded"
        );
        Ok(store)
    }

    /// Build a store from an already-parsed seed
    pub fn from_seed(seed: CatalogSeed) -> AppResult<Self> {
        validate(&seed)?;

        let mut categories = seed.categories;
        categories.sort_by_key(|c| c.display_order);

        let mut products = seed.products;
        products.sort_by_key(|d| d.product.display_order);

        Ok(Self {
            categories,
            products,
        })
    }

    /// Categories in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Product records in display order
    pub fn products(&self) -> Vec<Product> {
        self.products.iter().map(|d| d.product.clone()).collect()
    }

    /// Product records of one category, in display order
    pub fn products_in_category(&self, category_id: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|d| d.product.category_id.as_deref() == Some(category_id))
            .map(|d| d.product.clone())
            .collect()
    }

    /// Full configurator bundle for one product
    pub fn detail(&self, product_id: &str) -> Option<&ProductDetail> {
        self.products.iter().find(|d| d.product.id == product_id)
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

/// Reject malformed seeds at startup instead of serving bad data.
/// Multiple default-flagged tents are tolerated (resolution takes the
/// first flagged row) but logged, since the source data should carry
/// exactly one.
fn validate(seed: &CatalogSeed) -> AppResult<()> {
    let mut category_ids = HashSet::new();
    for category in &seed.categories {
        if !category_ids.insert(category.id.as_str()) {
            return Err(AppError::with_message(
                ErrorCode::DuplicateCategoryId,
                format!("Duplicate category id {:?} in catalog seed", category.id),
            ));
        }
    }

    let mut product_ids = HashSet::new();
    for detail in &seed.products {
        let product = &detail.product;
        if !product_ids.insert(product.id.as_str()) {
            return Err(AppError::with_message(
                ErrorCode::DuplicateProductId,
                format!("Duplicate product id {:?} in catalog seed", product.id),
            ));
        }

        if let Some(category_id) = &product.category_id
            && !category_ids.contains(category_id.as_str())
        {
            return Err(AppError::with_message(
                ErrorCode::CategoryNotFound,
                format!(
                    "Product {} references unknown category {:?}",
                    product.id, category_id
                ),
            ));
        }

        if !(0..=MAX_PRICE).contains(&product.base_price) {
            return Err(price_error(&product.id, "base_price", product.base_price));
        }
        if let Some(old_price) = product.old_price
            && !(0..=MAX_PRICE).contains(&old_price)
        {
            return Err(price_error(&product.id, "old_price", old_price));
        }

        for (field, group) in [
            ("wheel_options", &detail.wheel_options),
            ("hub_options", &detail.hub_options),
        ] {
            if let Some(default) = &group.default
                && !group.contains(default)
            {
                return Err(AppError::with_message(
                    ErrorCode::OptionDefaultNotListed,
                    format!(
                        "Product {}: {} default {:?} is not a listed option",
                        product.id, field, default
                    ),
                ));
            }
        }

        let mut tent_ids = HashSet::new();
        for tent in &detail.tents {
            if !tent_ids.insert(tent.tent_id.as_str()) {
                return Err(AppError::with_message(
                    ErrorCode::DuplicateTentId,
                    format!(
                        "Product {}: duplicate tent id {:?}",
                        product.id, tent.tent_id
                    ),
                ));
            }
            // Tent prices are signed deltas
            if !(-MAX_PRICE..=MAX_PRICE).contains(&tent.price) {
                return Err(price_error(&product.id, "tent price", tent.price));
            }
        }

        let mut accessory_ids = HashSet::new();
        for accessory in &detail.accessories {
            if !accessory_ids.insert(accessory.accessory_id.as_str()) {
                return Err(AppError::with_message(
                    ErrorCode::DuplicateAccessoryId,
                    format!(
                        "Product {}: duplicate accessory id {:?}",
                        product.id, accessory.accessory_id
                    ),
                ));
            }
            if !(0..=MAX_PRICE).contains(&accessory.price) {
                return Err(price_error(&product.id, "accessory price", accessory.price));
            }
        }

        let flagged = detail.tents.iter().filter(|t| t.is_default).count();
        if flagged > 1 {
            warn!(
                product_id = %product.id,
                flagged,
                "Catalog seed flags multiple default tents"
            );
        } else if flagged == 0 && !detail.tents.is_empty() {
            warn!(
                product_id = %product.id,
                "Catalog seed flags no default tent, first row will be used"
            );
        }
    }

    Ok(())
}

fn price_error(product_id: &str, field: &str, value: i64) -> AppError {
    AppError::with_message(
        ErrorCode::ProductInvalidPrice,
        format!("Product {}: {} {} is out of range", product_id, field, value),
    )
    .with_detail("product_id", product_id)
    .with_detail("field", field)
    .with_detail("value", value)
}
