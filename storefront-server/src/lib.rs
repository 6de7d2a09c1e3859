//! Trailer Storefront Server
//!
//! HTTP backend for the trailer storefront: serves the catalog, prices
//! configurator selections server-side and accepts leads.
//!
//! # Module structure
//!
//! ```text
//! storefront-server/src/
//! ├── core/          # Config, state, server, errors
//! ├── api/           # HTTP routes and handlers
//! ├── catalog/       # In-memory catalog store + seed loading
//! ├── leads/         # Lead validation, rendering, notification
//! └── utils/         # Logger, validation helpers
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod leads;
pub mod utils;

// Re-export public types
pub use catalog::CatalogStore;
pub use core::{Config, Server, ServerState};
pub use leads::{LeadService, Notifier};

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env before anything reads the environment
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // Missing .env is fine, the environment itself takes precedence anyway
    let _ = dotenv::dotenv();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   _____ __                  ____                 __
  / ___// /_____  ________  / __/________  ____  / /_
  \__ \/ __/ __ \/ ___/ _ \/ /_/ ___/ __ \/ __ \/ __/
 ___/ / /_/ /_/ / /  /  __/ __/ /  / /_/ / / / / /_
/____/\__/\____/_/   \___/_/ /_/   \____/_/ /_/\__/
    "#
    );
}
