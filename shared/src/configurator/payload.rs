//! Order payload assembly
//!
//! Turns the current selection into the order wire shape submitted with
//! a lead. The payload always carries the complete selection snapshot:
//! resolved labels for presentation plus the numeric breakdown so the
//! notification can show prices without another catalog lookup.

use serde::{Deserialize, Serialize};

use super::session::Session;
use crate::error::{AppError, AppResult};
use crate::lead::{AccessoryPrice, OrderConfiguration, OrderPayload};

/// Contact details required before an order can leave the site
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Both fields must be non-blank; whitespace-only input counts as blank
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::missing_contact_name());
        }
        if self.phone.trim().is_empty() {
            return Err(AppError::missing_contact_phone());
        }
        Ok(())
    }
}

impl Session {
    /// Serialize the complete current selection into an order payload.
    /// Refuses when contact details are blank; the selection itself is
    /// always submittable since defaults were resolved at load.
    pub fn order_payload(&self, contact: &Contact) -> AppResult<OrderPayload> {
        contact.validate()?;

        let product = self.product();
        let tent = self.selected_tent();
        let accessories = self.selected_accessories();

        Ok(OrderPayload {
            product_name: product.name.clone(),
            configuration: OrderConfiguration {
                wheels: self.wheel().unwrap_or("").to_string(),
                hub: self.hub().unwrap_or("").to_string(),
                tent: tent.map(|t| t.name.clone()),
                accessories: accessories.iter().map(|a| a.name.clone()).collect(),
            },
            base_price: product.base_price,
            old_price: product.old_price,
            tent_name: tent.map(|t| t.name.clone()),
            tent_price: tent.map(|t| t.price),
            accessories_prices: accessories
                .iter()
                .map(|a| AccessoryPrice {
                    name: a.name.clone(),
                    price: a.price,
                })
                .collect(),
            total_price: self.total(),
            name: contact.name.trim().to_string(),
            phone: contact.phone.trim().to_string(),
        })
    }
}
