//! Farmer roster HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;

use shared::{CreateFarmerInput, Farmer, LoadMoreWindow, Pagination, RegionFilter, SmsLog};

use crate::error::AppResult;
use crate::middleware::AdminSession;
use crate::services::farmer::{FarmerDetail, RosterQuery};
use crate::services::FarmerService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct FarmerListQuery {
    pub search: Option<String>,
    pub region: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub format: Option<String>, // "json" or "csv"
}

impl FarmerListQuery {
    fn roster_query(&self) -> RosterQuery {
        RosterQuery {
            search: self.search.clone().unwrap_or_default(),
            region: RegionFilter::from(self.region.as_deref()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SmsLogQuery {
    pub pages: Option<usize>,
}

/// List farmers, filtered and paginated, or exported as CSV
pub async fn list_farmers(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    Query(query): Query<FarmerListQuery>,
) -> AppResult<impl IntoResponse> {
    let service = FarmerService::new(state.api.clone());
    let roster_query = query.roster_query();

    if query.format.as_deref() == Some("csv") {
        let csv = service.export_farmers(&session.token, &roster_query).await?;
        return Ok((
            [
                (header::CONTENT_TYPE, "text/csv"),
                (header::CONTENT_DISPOSITION, "attachment; filename=\"farmers.csv\""),
            ],
            csv,
        )
            .into_response());
    }

    let pagination = Pagination::new(
        query.page.unwrap_or(1),
        query
            .per_page
            .unwrap_or(state.config.dashboard.default_page_size),
    );
    let page = service
        .search_farmers(&session.token, &roster_query, &pagination)
        .await?;
    Ok(Json(page).into_response())
}

/// Distinct regions for the region selector
pub async fn list_regions(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
) -> AppResult<Json<Vec<String>>> {
    let service = FarmerService::new(state.api.clone());
    let regions = service.list_regions(&session.token).await?;
    Ok(Json(regions))
}

/// Add a farmer
pub async fn create_farmer(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    Json(input): Json<CreateFarmerInput>,
) -> AppResult<(StatusCode, Json<Farmer>)> {
    let service = FarmerService::new(state.api.clone());
    let farmer = service.create_farmer(&session.token, input).await?;
    Ok((StatusCode::CREATED, Json(farmer)))
}

/// Farmer detail page
pub async fn get_farmer(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    Path(farmer_id): Path<String>,
) -> AppResult<Json<FarmerDetail>> {
    let service = FarmerService::new(state.api.clone());
    let detail = service
        .get_detail(&session.token, &farmer_id, state.config.dashboard.sms_page_size)
        .await?;
    Ok(Json(detail))
}

/// SMS history, revealed `pages` steps at a time
pub async fn list_sms_logs(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    Path(farmer_id): Path<String>,
    Query(query): Query<SmsLogQuery>,
) -> AppResult<Json<LoadMoreWindow<SmsLog>>> {
    let service = FarmerService::new(state.api.clone());
    let window = service
        .get_sms_logs(
            &session.token,
            &farmer_id,
            query.pages.unwrap_or(1),
            state.config.dashboard.sms_page_size,
        )
        .await?;
    Ok(Json(window))
}
