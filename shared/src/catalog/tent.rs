//! Tent Option Model

use serde::{Deserialize, Serialize};

/// Tent offered for a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TentOption {
    pub tent_id: String,
    pub name: String,
    /// Signed delta against the product base price, whole rubles.
    /// Negative means this tent is cheaper than the priced-in one.
    pub price: i64,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
