//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use shared::catalog::{Product, ProductDetail};
use shared::configurator::{PriceBreakdown, Session};
use shared::{AppError, AppResult};

use crate::core::ServerState;

/// Query parameters for the product listing
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Restrict the listing to one category
    pub category: Option<String>,
}

/// GET /api/products - list products in display order, `?category=` filter
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let products = match &query.category {
        Some(category_id) => {
            if state.catalog.category(category_id).is_none() {
                return Err(AppError::with_message(
                    shared::ErrorCode::CategoryNotFound,
                    format!("Category {} not found", category_id),
                )
                .with_detail("category_id", category_id.as_str()));
            }
            state.catalog.products_in_category(category_id)
        }
        None => state.catalog.products(),
    };
    Ok(Json(products))
}

/// GET /api/products/:id - full configurator bundle for one product
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductDetail>> {
    let detail = state
        .catalog
        .detail(&id)
        .ok_or_else(|| AppError::product_not_found(&id))?;
    Ok(Json(detail.clone()))
}

/// Selection submitted for a server-side quote
///
/// Omitted fields keep their resolved defaults; accessories are the full
/// selected set, not a diff.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wheel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tent_id: Option<String>,
    #[serde(default)]
    pub accessories: Vec<String>,
}

impl QuoteRequest {
    /// Canonical cache key: product plus the normalized selection.
    /// Accessories are sorted so toggle order never splits cache entries.
    fn selection_key(&self, product_id: &str) -> String {
        let mut accessories: Vec<&str> = self.accessories.iter().map(String::as_str).collect();
        accessories.sort_unstable();
        accessories.dedup();
        format!(
            "{}|{}|{}|{}|{}",
            product_id,
            self.wheel.as_deref().unwrap_or("-"),
            self.hub.as_deref().unwrap_or("-"),
            self.tent_id.as_deref().unwrap_or("-"),
            accessories.join(",")
        )
    }
}

/// POST /api/products/:id/quote - validate a selection and price it
///
/// Runs default resolution, applies the explicit selections on top and
/// returns the itemized breakdown the detail view displays. Results are
/// memoized per canonical selection; the catalog is immutable after load
/// so entries never go stale.
pub async fn quote(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(request): Json<QuoteRequest>,
) -> AppResult<Json<PriceBreakdown>> {
    let detail = state
        .catalog
        .detail(&id)
        .ok_or_else(|| AppError::product_not_found(&id))?;

    let key = request.selection_key(&id);
    if let Some(cached) = state.quotes.get(&key) {
        return Ok(Json(cached));
    }

    let mut session = Session::with_defaults(detail.clone());
    if let Some(wheel) = &request.wheel {
        session.select_wheel(wheel)?;
    }
    if let Some(hub) = &request.hub {
        session.select_hub(hub)?;
    }
    if let Some(tent_id) = &request.tent_id {
        session.select_tent(tent_id)?;
    }
    for accessory_id in &request.accessories {
        // The set starts empty, so toggling each distinct id once selects it
        if !session.is_accessory_selected(accessory_id) {
            session.toggle_accessory(accessory_id)?;
        }
    }

    let breakdown = session.breakdown();
    state.quotes.store(key, breakdown.clone());
    Ok(Json(breakdown))
}
