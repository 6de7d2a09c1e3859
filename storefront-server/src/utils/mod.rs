//! Utility functions

pub mod logger;
pub mod validation;
