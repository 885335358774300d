//! Soil sensor device models

use serde::{Deserialize, Serialize};

/// A registered IoT soil sensor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Device {
    pub id: String,
    pub device_id: String,
    #[serde(default)]
    pub sim_number: Option<String>,
    #[serde(default)]
    pub farmer_id: Option<String>,
    /// Only returned once, at registration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// `GET /api/admin/devices/{farmer_id}`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DevicesEnvelope {
    #[serde(default)]
    pub devices: Vec<Device>,
}

/// `POST /api/admin/devices`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceRegistration {
    #[serde(default)]
    pub status: Option<String>,
    pub device: Device,
    pub api_token: String,
}
