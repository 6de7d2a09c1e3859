//! Shared types for the trailer storefront
//!
//! Common types used across the server and tests: catalog models, the
//! configurator core, lead wire types, and the unified error system.

pub mod catalog;
pub mod configurator;
pub mod error;
pub mod lead;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

// Error system re-exports (for convenient access)
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Configurator re-exports (the core selection/pricing surface)
pub use configurator::{Configurator, Contact, PriceBreakdown, Session, compute_total};
