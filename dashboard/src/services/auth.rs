//! Authentication service: staff sign-in and sign-up via the soil platform API

use validator::Validate;

use shared::{AdminLoginInput, AdminRegisterInput, AdminUser, AuthResponse};

use crate::error::AppResult;
use crate::external::SoilApiClient;

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    api: SoilApiClient,
}

impl AuthService {
    pub fn new(api: SoilApiClient) -> Self {
        Self { api }
    }

    /// Sign in a staff member
    pub async fn login(&self, input: AdminLoginInput) -> AppResult<AuthResponse> {
        input.validate()?;
        let response = self.api.login(&input).await?;
        tracing::info!("Admin {} signed in", response.user.id);
        Ok(response)
    }

    /// Register a staff member with the shared registration code
    pub async fn register(&self, input: AdminRegisterInput) -> AppResult<AuthResponse> {
        input.validate()?;
        let response = self.api.register(&input).await?;
        tracing::info!("Admin {} registered", response.user.id);
        Ok(response)
    }

    /// Resolve the admin behind a token
    pub async fn current_admin(&self, token: &str) -> AppResult<AdminUser> {
        self.api.current_admin(token).await
    }
}
