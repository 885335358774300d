//! External service integrations

pub mod soil_api;

pub use soil_api::SoilApiClient;
