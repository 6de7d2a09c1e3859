//! Lead API Handlers

use axum::{Json, extract::State};

use shared::AppResult;
use shared::lead::LeadRequest;

use crate::core::ServerState;
use crate::leads::LeadReceipt;

/// POST /api/leads - accept a callback, promo or order lead
///
/// The body is tagged by `type`; validation failures surface as 3xxx
/// error codes and never reach the notifier.
pub async fn submit(
    State(state): State<ServerState>,
    Json(lead): Json<LeadRequest>,
) -> AppResult<Json<LeadReceipt>> {
    let receipt = state.leads.submit(lead).await?;
    Ok(Json(receipt))
}
