//! Product configurator core
//!
//! Pure selection and pricing logic for one product view. The catalog
//! bundle is handed in by the caller; nothing in this module performs
//! I/O, so the same code drives both the HTTP quote endpoint and tests.

pub mod payload;
pub mod pricing;
pub mod session;

pub use payload::Contact;
pub use pricing::{AccessoryLine, PriceBreakdown, TentLine, compute_total};
pub use session::{Configurator, Session};
