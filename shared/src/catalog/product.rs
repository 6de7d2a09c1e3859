//! Product Model

use serde::{Deserialize, Serialize};

/// Stock status shown on product cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    InStock,
    OnOrder,
    OutOfStock,
}

impl Availability {
    /// Customer-facing Russian label
    pub fn label(&self) -> &'static str {
        match self {
            Availability::InStock => "В наличии",
            Availability::OnOrder => "Под заказ",
            Availability::OutOfStock => "Нет в наличии",
        }
    }
}

impl Default for Availability {
    fn default() -> Self {
        Availability::InStock
    }
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Price in whole rubles
    pub base_price: i64,
    /// Pre-discount price, shown struck through when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<i64>,
    /// Badge text next to the old price (e.g. "-10%")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_label: Option<String>,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    /// Category reference (String ID)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

/// Selectable wheel or hub dimension: plain labels plus the declared default
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
}

impl OptionGroup {
    /// A group with no options is inactive and accepts no selection
    pub fn is_active(&self) -> bool {
        !self.options.is_empty()
    }

    /// Whether the label is one of the listed options
    pub fn contains(&self, label: &str) -> bool {
        self.options.iter().any(|o| o == label)
    }

    /// Initial selection: the declared default when listed, else the first
    /// option, else no selection for an inactive group.
    pub fn resolve_default(&self) -> Option<String> {
        if self.options.is_empty() {
            return None;
        }
        match &self.default {
            Some(d) if self.contains(d) => Some(d.clone()),
            _ => self.options.first().cloned(),
        }
    }
}
