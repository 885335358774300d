//! HTTP request handlers

pub mod auth;
pub mod dashboard;
pub mod device;
pub mod farmer;
pub mod health;

pub use auth::*;
pub use dashboard::*;
pub use device::*;
pub use farmer::*;
pub use health::*;
pub use soil_test::*;
