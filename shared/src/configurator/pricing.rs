//! Price computation
//!
//! Totals are additive over the current selection: base price, the
//! selected tent's signed delta, and the selected accessory prices.
//! Wheel and hub choices never contribute to the total.

use serde::{Deserialize, Serialize};

/// Compute the configured total in whole rubles.
///
/// `tent_price` is 0 when the product has no tents; `accessory_prices`
/// holds one entry per selected accessory, in any order.
pub fn compute_total(base_price: i64, tent_price: i64, accessory_prices: &[i64]) -> i64 {
    base_price + tent_price + accessory_prices.iter().sum::<i64>()
}

/// Selected tent line in a price breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TentLine {
    pub tent_id: String,
    pub name: String,
    /// Signed delta against the base price
    pub price: i64,
}

/// Selected accessory line in a price breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoryLine {
    pub accessory_id: String,
    pub name: String,
    pub price: i64,
}

/// Itemized view of the current selection and its total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base_price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wheel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tent: Option<TentLine>,
    pub accessories: Vec<AccessoryLine>,
    pub total_price: i64,
}
