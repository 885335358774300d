//! Overview page handlers

use axum::{extract::State, Extension, Json};

use shared::RosterSummary;

use crate::error::AppResult;
use crate::middleware::AdminSession;
use crate::services::FarmerService;
use crate::AppState;

/// Overview figures: total farmers, newest farmer and farmers per region
pub async fn get_dashboard_summary(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
) -> AppResult<Json<RosterSummary>> {
    let service = FarmerService::new(state.api.clone());
    let summary = service.get_summary(&session.token).await?;
    Ok(Json(summary))
}
