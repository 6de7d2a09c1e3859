//! Lead intake wire types
//!
//! A lead is anything a site visitor submits with their contact details:
//! a callback request, a promo inquiry from a product card, or a full
//! configurator order. All three arrive on the same endpoint, tagged by
//! `type`, and field names are camelCase to match the frontend.

pub mod phone;

use serde::{Deserialize, Serialize};

/// Wheel/hub/tent labels and accessory names as chosen in the configurator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfiguration {
    /// Empty string when the product has no wheel dimension
    pub wheels: String,
    /// Empty string when the product has no hub dimension
    pub hub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tent: Option<String>,
    #[serde(default)]
    pub accessories: Vec<String>,
}

/// One accessory line in the order's price breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoryPrice {
    pub name: String,
    pub price: i64,
}

/// Complete order snapshot sent when a configurator order is submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub product_name: String,
    pub configuration: OrderConfiguration,
    pub base_price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tent_price: Option<i64>,
    pub accessories_prices: Vec<AccessoryPrice>,
    pub total_price: i64,
    pub name: String,
    pub phone: String,
}

/// Incoming lead, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LeadRequest {
    /// Callback request from the contact form
    Callback { name: String, phone: String },
    /// Promo inquiry from a product card
    #[serde(rename_all = "camelCase")]
    Promo {
        name: String,
        phone: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        product_name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        product_price: Option<i64>,
    },
    /// Configurator order with the full price snapshot
    Order(OrderPayload),
}

impl LeadRequest {
    /// Lead kind as a stable string, used in logs and receipts
    pub fn kind(&self) -> &'static str {
        match self {
            LeadRequest::Callback { .. } => "callback",
            LeadRequest::Promo { .. } => "promo",
            LeadRequest::Order(_) => "order",
        }
    }

    /// Contact name as submitted
    pub fn name(&self) -> &str {
        match self {
            LeadRequest::Callback { name, .. } => name,
            LeadRequest::Promo { name, .. } => name,
            LeadRequest::Order(payload) => &payload.name,
        }
    }

    /// Contact phone as submitted
    pub fn phone(&self) -> &str {
        match self {
            LeadRequest::Callback { phone, .. } => phone,
            LeadRequest::Promo { phone, .. } => phone,
            LeadRequest::Order(payload) => &payload.phone,
        }
    }
}
