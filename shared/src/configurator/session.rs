//! Configuration session
//!
//! A [`Session`] holds one product's catalog bundle plus the visitor's
//! current picks. It is created through [`Session::with_defaults`], which
//! runs default resolution exactly once over the bundle. [`Configurator`]
//! wraps a session behind an explicit loaded/unloaded state so callers
//! stay safe while the catalog is still in flight.

use std::collections::HashSet;

use tracing::warn;

use super::payload::Contact;
use super::pricing::{self, AccessoryLine, PriceBreakdown, TentLine};
use crate::catalog::{AccessoryOption, Product, ProductDetail, TentOption};
use crate::error::{AppError, AppResult, ErrorCode};
use crate::lead::OrderPayload;

/// One product's selection state
#[derive(Debug, Clone)]
pub struct Session {
    detail: ProductDetail,
    wheel: Option<String>,
    hub: Option<String>,
    tent_id: Option<String>,
    accessories: HashSet<String>,
}

impl Session {
    /// Build a session with the initial selection resolved from the
    /// bundle: declared wheel/hub defaults (inactive groups stay
    /// unselected), the flagged default tent or the first row when the
    /// flag is missing, and no accessories.
    pub fn with_defaults(detail: ProductDetail) -> Self {
        let flagged = detail.tents.iter().filter(|t| t.is_default).count();
        if flagged > 1 {
            warn!(
                product_id = %detail.product.id,
                flagged,
                "Multiple tents flagged as default, using the first flagged row"
            );
        } else if flagged == 0 && !detail.tents.is_empty() {
            warn!(
                product_id = %detail.product.id,
                "No tent flagged as default, using the first row in listing order"
            );
        }

        let wheel = detail.wheel_options.resolve_default();
        let hub = detail.hub_options.resolve_default();
        let tent_id = detail.default_tent().map(|t| t.tent_id.clone());

        Session {
            detail,
            wheel,
            hub,
            tent_id,
            accessories: HashSet::new(),
        }
    }

    pub fn detail(&self) -> &ProductDetail {
        &self.detail
    }

    pub fn product(&self) -> &Product {
        &self.detail.product
    }

    pub fn wheel(&self) -> Option<&str> {
        self.wheel.as_deref()
    }

    pub fn hub(&self) -> Option<&str> {
        self.hub.as_deref()
    }

    pub fn tent_id(&self) -> Option<&str> {
        self.tent_id.as_deref()
    }

    pub fn selected_tent(&self) -> Option<&TentOption> {
        self.tent_id.as_deref().and_then(|id| self.detail.tent(id))
    }

    /// Selected accessories in catalog listing order, regardless of the
    /// order they were toggled in
    pub fn selected_accessories(&self) -> Vec<&AccessoryOption> {
        self.detail
            .accessories
            .iter()
            .filter(|a| self.accessories.contains(&a.accessory_id))
            .collect()
    }

    pub fn is_accessory_selected(&self, accessory_id: &str) -> bool {
        self.accessories.contains(accessory_id)
    }

    /// Select a wheel label. Rejects labels outside the product's wheel
    /// options and leaves the current selection untouched on failure.
    pub fn select_wheel(&mut self, label: &str) -> AppResult<()> {
        if !self.detail.wheel_options.contains(label) {
            return Err(AppError::with_message(
                ErrorCode::InvalidWheelSelection,
                format!(
                    "Wheel option {:?} is not offered for product {}",
                    label, self.detail.product.id
                ),
            )
            .with_detail("wheel", label));
        }
        self.wheel = Some(label.to_string());
        Ok(())
    }

    /// Select a hub label, same contract as [`Session::select_wheel`]
    pub fn select_hub(&mut self, label: &str) -> AppResult<()> {
        if !self.detail.hub_options.contains(label) {
            return Err(AppError::with_message(
                ErrorCode::InvalidHubSelection,
                format!(
                    "Hub option {:?} is not offered for product {}",
                    label, self.detail.product.id
                ),
            )
            .with_detail("hub", label));
        }
        self.hub = Some(label.to_string());
        Ok(())
    }

    /// Select a tent by id. Switching tents replaces the previous delta,
    /// it never accumulates.
    pub fn select_tent(&mut self, tent_id: &str) -> AppResult<()> {
        if self.detail.tent(tent_id).is_none() {
            return Err(AppError::with_message(
                ErrorCode::InvalidTentSelection,
                format!(
                    "Tent {:?} is not offered for product {}",
                    tent_id, self.detail.product.id
                ),
            )
            .with_detail("tent_id", tent_id));
        }
        self.tent_id = Some(tent_id.to_string());
        Ok(())
    }

    /// Flip an accessory in or out of the selection. Returns the new
    /// membership state: true when the accessory is now selected.
    pub fn toggle_accessory(&mut self, accessory_id: &str) -> AppResult<bool> {
        let available = match self.detail.accessory(accessory_id) {
            Some(a) => a.is_available,
            None => {
                return Err(AppError::with_message(
                    ErrorCode::InvalidAccessorySelection,
                    format!(
                        "Accessory {:?} is not offered for product {}",
                        accessory_id, self.detail.product.id
                    ),
                )
                .with_detail("accessory_id", accessory_id));
            }
        };
        if !available {
            return Err(AppError::with_message(
                ErrorCode::AccessoryUnavailable,
                format!("Accessory {:?} is not currently available", accessory_id),
            )
            .with_detail("accessory_id", accessory_id));
        }

        if self.accessories.remove(accessory_id) {
            Ok(false)
        } else {
            self.accessories.insert(accessory_id.to_string());
            Ok(true)
        }
    }

    /// Total for the current selection, in whole rubles
    pub fn total(&self) -> i64 {
        let tent_price = self.selected_tent().map(|t| t.price).unwrap_or(0);
        let accessory_prices: Vec<i64> = self
            .selected_accessories()
            .iter()
            .map(|a| a.price)
            .collect();
        pricing::compute_total(self.detail.product.base_price, tent_price, &accessory_prices)
    }

    /// Itemized breakdown of the current selection
    pub fn breakdown(&self) -> PriceBreakdown {
        let tent = self.selected_tent().map(|t| TentLine {
            tent_id: t.tent_id.clone(),
            name: t.name.clone(),
            price: t.price,
        });
        let accessories = self
            .selected_accessories()
            .into_iter()
            .map(|a| AccessoryLine {
                accessory_id: a.accessory_id.clone(),
                name: a.name.clone(),
                price: a.price,
            })
            .collect();

        PriceBreakdown {
            base_price: self.detail.product.base_price,
            old_price: self.detail.product.old_price,
            wheel: self.wheel.clone(),
            hub: self.hub.clone(),
            tent,
            accessories,
            total_price: self.total(),
        }
    }
}

/// Configurator state for one product view
///
/// The catalog bundle arrives asynchronously. Until it does, selection
/// calls are rejected with `CatalogNotLoaded` and the total reads 0, so
/// a first render before data arrival never panics or shows garbage.
#[derive(Debug, Clone)]
pub enum Configurator {
    Unloaded,
    Ready(Session),
}

impl Configurator {
    pub fn new() -> Self {
        Configurator::Unloaded
    }

    /// Hand the catalog bundle to the configurator. The first load runs
    /// default resolution and returns true; repeated deliveries are
    /// ignored so user picks survive catalog re-fetches.
    pub fn load(&mut self, detail: ProductDetail) -> bool {
        match self {
            Configurator::Unloaded => {
                *self = Configurator::Ready(Session::with_defaults(detail));
                true
            }
            Configurator::Ready(_) => false,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Configurator::Ready(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Configurator::Ready(session) => Some(session),
            Configurator::Unloaded => None,
        }
    }

    fn session_mut(&mut self) -> AppResult<&mut Session> {
        match self {
            Configurator::Ready(session) => Ok(session),
            Configurator::Unloaded => Err(AppError::catalog_not_loaded()),
        }
    }

    pub fn select_wheel(&mut self, label: &str) -> AppResult<()> {
        self.session_mut()?.select_wheel(label)
    }

    pub fn select_hub(&mut self, label: &str) -> AppResult<()> {
        self.session_mut()?.select_hub(label)
    }

    pub fn select_tent(&mut self, tent_id: &str) -> AppResult<()> {
        self.session_mut()?.select_tent(tent_id)
    }

    pub fn toggle_accessory(&mut self, accessory_id: &str) -> AppResult<bool> {
        self.session_mut()?.toggle_accessory(accessory_id)
    }

    /// 0 until the catalog is loaded
    pub fn total(&self) -> i64 {
        self.session().map(Session::total).unwrap_or(0)
    }

    pub fn breakdown(&self) -> Option<PriceBreakdown> {
        self.session().map(Session::breakdown)
    }

    pub fn order_payload(&self, contact: &Contact) -> AppResult<OrderPayload> {
        self.session()
            .ok_or_else(AppError::catalog_not_loaded)?
            .order_payload(contact)
    }
}

impl Default for Configurator {
    fn default() -> Self {
        Self::new()
    }
}
