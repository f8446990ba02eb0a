//! HTTP handlers for the provider collection.

pub mod provider;
pub use provider::*;
