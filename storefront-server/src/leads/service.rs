//! Lead intake service

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::lead::LeadRequest;
use shared::{AppError, AppResult};

use super::notify::Notifier;
use super::render;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};

/// Acknowledgement returned to the frontend for an accepted lead
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadReceipt {
    pub id: Uuid,
    /// Lead kind: callback | promo | order
    pub kind: String,
    pub received_at: DateTime<Utc>,
}

/// Validates leads and delivers their notifications
///
/// Order payloads are NOT re-priced here: the payload carries its own
/// resolved breakdown so downstream never re-queries the catalog.
/// Authoritative pricing belongs to the quote endpoint.
pub struct LeadService {
    notifier: Arc<dyn Notifier>,
}

impl LeadService {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Validate a lead, deliver its notification and issue a receipt
    pub async fn submit(&self, lead: LeadRequest) -> AppResult<LeadReceipt> {
        validate(&lead)?;

        let notification = render::render(&lead);
        self.notifier.notify(&notification).await?;

        let receipt = LeadReceipt {
            id: Uuid::new_v4(),
            kind: lead.kind().to_string(),
            received_at: Utc::now(),
        };
        tracing::info!(
            lead_id = %receipt.id,
            kind = %receipt.kind,
            name = %lead.name(),
            "Lead accepted"
        );
        Ok(receipt)
    }
}

/// Contact gating plus length limits. Empty name or phone gets its
/// dedicated 3xxx code so the frontend can highlight the exact field.
fn validate(lead: &LeadRequest) -> AppResult<()> {
    if lead.name().trim().is_empty() {
        return Err(AppError::missing_contact_name());
    }
    if lead.phone().trim().is_empty() {
        return Err(AppError::missing_contact_phone());
    }
    validate_required_text(lead.name(), "name", MAX_NAME_LEN)?;
    validate_required_text(lead.phone(), "phone", MAX_SHORT_TEXT_LEN)?;

    match lead {
        LeadRequest::Callback { .. } => {}
        LeadRequest::Promo { product_name, .. } => {
            validate_optional_text(product_name, "productName", MAX_NAME_LEN)?;
        }
        LeadRequest::Order(payload) => {
            validate_required_text(&payload.product_name, "productName", MAX_NAME_LEN)?;
            if payload.total_price < 0 {
                return Err(AppError::validation("totalPrice must not be negative")
                    .with_detail("totalPrice", payload.total_price));
            }
        }
    }
    Ok(())
}
