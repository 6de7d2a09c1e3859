//! Lead intake
//!
//! Validates incoming leads, renders the manager-facing notification and
//! hands it to the configured [`Notifier`]. Delivery mechanics past the
//! handoff (mail templating, retries) live outside this service.

pub mod notify;
pub mod render;
pub mod service;

pub use notify::{LogNotifier, MemoryNotifier, Notification, Notifier, WebhookNotifier};
pub use service::{LeadReceipt, LeadService};
