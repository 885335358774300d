//! Authentication handlers

use axum::{extract::State, http::StatusCode, Json};

use shared::{AdminLoginInput, AdminRegisterInput, AdminUser, AuthResponse};

use crate::error::AppResult;
use crate::middleware::CurrentAdmin;
use crate::services::AuthService;
use crate::AppState;

/// Login endpoint handler
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<AdminLoginInput>,
) -> AppResult<Json<AuthResponse>> {
    let auth_service = AuthService::new(state.api.clone());
    let response = auth_service.login(body).await?;
    Ok(Json(response))
}

/// Staff registration endpoint handler
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<AdminRegisterInput>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let auth_service = AuthService::new(state.api.clone());
    let response = auth_service.register(body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Current staff account
pub async fn me(
    State(state): State<AppState>,
    CurrentAdmin(session): CurrentAdmin,
) -> AppResult<Json<AdminUser>> {
    let auth_service = AuthService::new(state.api.clone());
    let admin = auth_service.current_admin(&session.token).await?;
    Ok(Json(admin))
}
