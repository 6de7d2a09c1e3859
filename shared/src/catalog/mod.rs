//! Catalog data models
//!
//! Shared between the server and frontend (via API). Prices are i64 whole
//! rubles throughout; tent prices are signed deltas against the base price.

pub mod accessory;
pub mod category;
pub mod detail;
pub mod product;
pub mod tent;

// Re-exports
pub use accessory::*;
pub use category::*;
pub use detail::*;
pub use product::*;
pub use tent::*;
