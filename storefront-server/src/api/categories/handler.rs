//! Category API Handlers

use axum::{Json, extract::State};

use shared::AppResult;
use shared::catalog::Category;

use crate::core::ServerState;

/// GET /api/categories - list categories in display order
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(state.catalog.categories().to_vec()))
}
