//! Health check route
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | Status, version, uptime and catalog counts |
//!
//! # Response example
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "uptime_seconds": 42,
//!   "products": 4,
//!   "categories": 3,
//!   "lead_sink": "log"
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::time::SystemTime;

use crate::core::ServerState;

/// Health route - public, no authentication
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (healthy | error)
    status: &'static str,
    /// Crate version
    version: &'static str,
    /// Uptime in seconds
    uptime_seconds: u64,
    /// Number of products in the loaded catalog
    products: usize,
    /// Number of categories in the loaded catalog
    categories: usize,
    /// Where accepted leads are delivered (webhook | log)
    lead_sink: &'static str,
}

// Server start time (lazily initialized static)
static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

fn get_uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Basic health check with catalog counts
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let lead_sink = match &state.config.lead_webhook_url {
        Some(_) => "webhook",
        None => "log",
    };

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: get_uptime_seconds(),
        products: state.catalog.product_count(),
        categories: state.catalog.category_count(),
        lead_sink,
    })
}
