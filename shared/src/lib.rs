//! Shared types and analytics for the Smart Soil Dashboard
//!
//! This crate contains the domain models, soil test interpretation and
//! roster aggregates shared between the dashboard service and the browser
//! (via WASM).

pub mod insights;
pub mod models;
pub mod roster;
pub mod types;
pub mod validation;

pub use insights::*;
pub use models::*;
pub use types::*;
pub use validation::*;
