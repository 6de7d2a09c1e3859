//! In-memory catalog
//!
//! Persistence stays external to this service: the catalog is read once
//! at startup from a JSON seed file and never mutated afterwards.

pub mod seed;
pub mod store;

pub use seed::CatalogSeed;
pub use store::CatalogStore;
