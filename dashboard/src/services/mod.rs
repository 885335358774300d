//! Business logic services for the Smart Soil Dashboard

pub mod auth;
pub mod device;
pub mod farmer;
pub mod reporting;
pub mod soil_test;

pub use auth::AuthService;
pub use device::DeviceService;
pub use farmer::FarmerService;
pub use reporting::ReportingService;
pub use soil_test::SoilTestService;
