//! Client for the soil platform API
//!
//! Every dashboard read and write goes through here. The caller's bearer
//! token is forwarded as-is; FastAPI-style `{"detail": ...}` errors are
//! mapped onto [`AppError`].

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use shared::{
    AdminLoginInput, AdminRegisterInput, AdminUser, AuthResponse, CreateFarmerInput, Device,
    DeviceRegistration, DevicesEnvelope, Farmer, FarmerEnvelope, FarmersEnvelope,
    RegisterDeviceInput, SmsLog, SmsLogsEnvelope, SoilTest, SoilTestsEnvelope,
};

use crate::config::UpstreamConfig;
use crate::error::{AppError, AppResult};

/// Soil platform API client
#[derive(Clone)]
pub struct SoilApiClient {
    client: Client,
    base_url: String,
}

/// FastAPI error body; `detail` is a string or a list of field errors
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    detail: serde_json::Value,
}

impl SoilApiClient {
    /// Create a new client from configuration
    pub fn new(config: &UpstreamConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self::with_client(client, config.base_url.clone()))
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upstream URL for the given path segments; each segment is percent-encoded
    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AppError::Configuration(format!("Invalid upstream URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| AppError::Configuration("Upstream URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url, token: Option<&str>) -> RequestBuilder {
        tracing::debug!(%method, %url, "soil platform request");

        let builder = self.client.request(method, url);
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> AppResult<T> {
        let response = builder
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_error(status, &body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Upstream {
                status: status.as_u16(),
                message: format!("Failed to parse response: {}", e),
            })
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str], token: &str) -> AppResult<T> {
        let url = self.endpoint(segments)?;
        self.send(self.request(Method::GET, url, Some(token))).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        token: Option<&str>,
        body: &B,
    ) -> AppResult<T> {
        let url = self.endpoint(segments)?;
        self.send(self.request(Method::POST, url, token).json(body)).await
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    pub async fn login(&self, input: &AdminLoginInput) -> AppResult<AuthResponse> {
        #[derive(Serialize)]
        struct Body<'a> {
            email: &'a str,
            password: &'a str,
        }

        self.post(
            &["api", "auth", "login"],
            None,
            &Body {
                email: input.email.trim(),
                password: &input.password,
            },
        )
        .await
    }

    pub async fn register(&self, input: &AdminRegisterInput) -> AppResult<AuthResponse> {
        #[derive(Serialize)]
        struct Body<'a> {
            email: &'a str,
            password: &'a str,
            registration_code: &'a str,
        }

        self.post(
            &["api", "auth", "register"],
            None,
            &Body {
                email: input.email.trim(),
                password: &input.password,
                registration_code: input.registration_code.trim(),
            },
        )
        .await
    }

    pub async fn current_admin(&self, token: &str) -> AppResult<AdminUser> {
        self.get(&["api", "auth", "me"], token).await
    }

    // ------------------------------------------------------------------
    // Farmers
    // ------------------------------------------------------------------

    pub async fn list_farmers(&self, token: &str) -> AppResult<Vec<Farmer>> {
        let envelope: FarmersEnvelope = self.get(&["api", "admin", "farmers"], token).await?;
        Ok(envelope.farmers)
    }

    pub async fn create_farmer(&self, token: &str, input: &CreateFarmerInput) -> AppResult<Farmer> {
        let envelope: FarmerEnvelope = self
            .post(&["api", "admin", "farmers"], Some(token), &input.trimmed())
            .await?;
        Ok(envelope.farmer)
    }

    pub async fn list_soil_tests(&self, token: &str, farmer_id: &str) -> AppResult<Vec<SoilTest>> {
        let farmer_id = farmer_segment(farmer_id)?;
        let envelope: SoilTestsEnvelope = self
            .get(&["api", "admin", "soil-tests", farmer_id], token)
            .await?;
        Ok(envelope.tests)
    }

    pub async fn list_sms_logs(&self, token: &str, farmer_id: &str) -> AppResult<Vec<SmsLog>> {
        let farmer_id = farmer_segment(farmer_id)?;
        let envelope: SmsLogsEnvelope = self
            .get(&["api", "admin", "sms-logs", farmer_id], token)
            .await?;
        Ok(envelope.logs)
    }

    // ------------------------------------------------------------------
    // Devices
    // ------------------------------------------------------------------

    pub async fn register_device(
        &self,
        token: &str,
        input: &RegisterDeviceInput,
    ) -> AppResult<DeviceRegistration> {
        self.post(&["api", "admin", "devices"], Some(token), &input.trimmed())
            .await
    }

    pub async fn list_devices(&self, token: &str, farmer_id: &str) -> AppResult<Vec<Device>> {
        let farmer_id = farmer_segment(farmer_id)?;
        let envelope: DevicesEnvelope = self
            .get(&["api", "admin", "devices", farmer_id], token)
            .await?;
        Ok(envelope.devices)
    }
}

/// A farmer id used as a single path segment. Dot segments would be dropped
/// from the URL and address a different endpoint, so they never name a farmer.
fn farmer_segment(farmer_id: &str) -> AppResult<&str> {
    match farmer_id {
        "" | "." | ".." => Err(AppError::NotFound("Farmer".to_string())),
        id => Ok(id),
    }
}

/// Map a non-success upstream response onto an application error
fn map_error(status: StatusCode, body: &str) -> AppError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|err| detail_message(&err.detail))
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });

    match status {
        StatusCode::UNAUTHORIZED => AppError::Unauthorized(message),
        StatusCode::FORBIDDEN => AppError::Forbidden(message),
        StatusCode::NOT_FOUND => AppError::NotFound(message.trim_end_matches(" not found").to_string()),
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            AppError::ValidationError(message)
        }
        _ => AppError::Upstream {
            status: status.as_u16(),
            message,
        },
    }
}

fn detail_message(detail: &serde_json::Value) -> String {
    match detail {
        serde_json::Value::String(msg) => msg.clone(),
        // Pydantic validation errors: [{"loc": [...], "msg": "..."}]
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}
