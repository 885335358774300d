//! Domain models for the Smart Soil Dashboard
//!
//! These mirror the JSON shapes returned by the external soil platform API.

mod admin;
mod device;
mod farmer;
mod sms_log;

pub use admin::*;
pub use device::*;
pub use farmer::*;
pub use sms_log::*;
pub use soil_test::*;
