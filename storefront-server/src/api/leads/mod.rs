//! Lead API module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/leads", lead_routes())
}

fn lead_routes() -> Router<ServerState> {
    Router::new().route("/", post(handler::submit))
}
