//! Product Detail Bundle

use serde::{Deserialize, Serialize};

use super::accessory::AccessoryOption;
use super::product::{OptionGroup, Product};
use super::tent::TentOption;

/// Everything the configurator needs for one product: the product record
/// plus its option groups and association rows, in listing order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetail {
    pub product: Product,
    #[serde(default)]
    pub wheel_options: OptionGroup,
    #[serde(default)]
    pub hub_options: OptionGroup,
    #[serde(default)]
    pub tents: Vec<TentOption>,
    #[serde(default)]
    pub accessories: Vec<AccessoryOption>,
}

impl ProductDetail {
    /// Look up a tent row by id
    pub fn tent(&self, tent_id: &str) -> Option<&TentOption> {
        self.tents.iter().find(|t| t.tent_id == tent_id)
    }

    /// Look up an accessory row by id
    pub fn accessory(&self, accessory_id: &str) -> Option<&AccessoryOption> {
        self.accessories.iter().find(|a| a.accessory_id == accessory_id)
    }

    /// The tent preselected on first load: the flagged default, or the
    /// first row in listing order when no row is flagged.
    pub fn default_tent(&self) -> Option<&TentOption> {
        self.tents
            .iter()
            .find(|t| t.is_default)
            .or_else(|| self.tents.first())
    }
}
