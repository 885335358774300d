//! Sensor device handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;

use shared::{Device, DeviceRegistration, RegisterDeviceInput};

use crate::error::AppResult;
use crate::middleware::AdminSession;
use crate::services::DeviceService;
use crate::AppState;

/// Device form body; the farmer comes from the path
#[derive(Debug, Deserialize)]
pub struct RegisterDeviceRequest {
    #[serde(default)]
    pub device_id: String,
    #[serde(default)]
    pub sim_number: String,
}

/// Devices linked to a farmer
pub async fn list_devices(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    Path(farmer_id): Path<String>,
) -> AppResult<Json<Vec<Device>>> {
    let service = DeviceService::new(state.api.clone());
    let devices = service.list_devices(&session.token, &farmer_id).await?;
    Ok(Json(devices))
}

/// Register a sensor for a farmer
pub async fn register_device(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    Path(farmer_id): Path<String>,
    Json(body): Json<RegisterDeviceRequest>,
) -> AppResult<(StatusCode, Json<DeviceRegistration>)> {
    let service = DeviceService::new(state.api.clone());
    let input = RegisterDeviceInput {
        farmer_id,
        device_id: body.device_id,
        sim_number: body.sim_number,
    };
    let registration = service.register_device(&session.token, input).await?;
    Ok((StatusCode::CREATED, Json(registration)))
}
