//! Sensor device registration service

use validator::Validate;

use shared::{Device, DeviceRegistration, RegisterDeviceInput};

use crate::error::AppResult;
use crate::external::SoilApiClient;

/// Device service
#[derive(Clone)]
pub struct DeviceService {
    api: SoilApiClient,
}

impl DeviceService {
    pub fn new(api: SoilApiClient) -> Self {
        Self { api }
    }

    /// Devices linked to a farmer
    pub async fn list_devices(&self, token: &str, farmer_id: &str) -> AppResult<Vec<Device>> {
        self.api.list_devices(token, farmer_id).await
    }

    /// Register a device; the returned `api_token` is only ever shown once
    pub async fn register_device(
        &self,
        token: &str,
        input: RegisterDeviceInput,
    ) -> AppResult<DeviceRegistration> {
        if let Err(errors) = input.validate() {
            tracing::warn!("Rejected device form: {}", errors);
            return Err(errors.into());
        }
        let registration = self.api.register_device(token, &input).await?;
        tracing::info!(
            "Registered device {} for farmer {}",
            registration.device.device_id,
            input.farmer_id.trim()
        );
        Ok(registration)
    }
}
