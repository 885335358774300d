//! Farmer roster service
//!
//! Every call fetches a fresh roster snapshot from the soil platform API
//! and runs the shared roster transforms over it.

use serde::Serialize;
use validator::Validate;

use shared::roster;
use shared::{
    CreateFarmerInput, Device, Farmer, LoadMoreWindow, PaginatedResponse, Pagination,
    RegionFilter, RosterSummary, SmsLog, SoilTestReport,
};

use crate::error::{AppError, AppResult};
use crate::external::SoilApiClient;

use super::ReportingService;

/// Everything the farmer detail page shows
#[derive(Debug, Serialize)]
pub struct FarmerDetail {
    pub farmer: Farmer,
    pub devices: Vec<Device>,
    pub sms_logs: LoadMoreWindow<SmsLog>,
    pub soil_tests: Vec<SoilTestReport>,
}

/// Search box and region selector of the farmer table
#[derive(Debug, Clone, Default)]
pub struct RosterQuery {
    pub search: String,
    pub region: RegionFilter,
}

/// Farmer service
#[derive(Clone)]
pub struct FarmerService {
    api: SoilApiClient,
}

impl FarmerService {
    pub fn new(api: SoilApiClient) -> Self {
        Self { api }
    }

    /// Overview page figures
    pub async fn get_summary(&self, token: &str) -> AppResult<RosterSummary> {
        let farmers = self.api.list_farmers(token).await?;
        Ok(roster::summarize(&farmers))
    }

    /// One page of the filtered farmer table
    pub async fn search_farmers(
        &self,
        token: &str,
        query: &RosterQuery,
        pagination: &Pagination,
    ) -> AppResult<PaginatedResponse<Farmer>> {
        let farmers = self.api.list_farmers(token).await?;
        let matches: Vec<Farmer> = roster::filter(&farmers, &query.search, &query.region)
            .into_iter()
            .cloned()
            .collect();

        tracing::debug!(
            "Farmer search matched {} of {} farmers",
            matches.len(),
            farmers.len()
        );

        Ok(roster::paginate(&matches, pagination))
    }

    /// The filtered farmer table as CSV
    pub async fn export_farmers(&self, token: &str, query: &RosterQuery) -> AppResult<String> {
        let farmers = self.api.list_farmers(token).await?;
        let matches = roster::filter(&farmers, &query.search, &query.region);
        ReportingService::export_farmers(&matches)
    }

    /// Options for the region selector
    pub async fn list_regions(&self, token: &str) -> AppResult<Vec<String>> {
        let farmers = self.api.list_farmers(token).await?;
        Ok(roster::regions(&farmers))
    }

    /// Find a farmer in the roster
    pub async fn get_farmer(&self, token: &str, farmer_id: &str) -> AppResult<Farmer> {
        self.api
            .list_farmers(token)
            .await?
            .into_iter()
            .find(|farmer| farmer.id == farmer_id)
            .ok_or_else(|| AppError::NotFound("Farmer".to_string()))
    }

    /// Add a farmer to the roster
    pub async fn create_farmer(&self, token: &str, input: CreateFarmerInput) -> AppResult<Farmer> {
        if let Err(errors) = input.validate() {
            tracing::warn!("Rejected farmer form: {}", errors);
            return Err(errors.into());
        }
        let farmer = self.api.create_farmer(token, &input).await?;
        tracing::info!("Created farmer {} in {:?}", farmer.id, farmer.region);
        Ok(farmer)
    }

    /// The first `pages` steps of a farmer's SMS history
    pub async fn get_sms_logs(
        &self,
        token: &str,
        farmer_id: &str,
        pages: usize,
        page_size: usize,
    ) -> AppResult<LoadMoreWindow<SmsLog>> {
        let logs = self.api.list_sms_logs(token, farmer_id).await?;
        Ok(roster::load_more(&logs, pages, page_size))
    }

    /// Farmer, devices, SMS history and interpreted soil tests in one call
    pub async fn get_detail(
        &self,
        token: &str,
        farmer_id: &str,
        sms_page_size: usize,
    ) -> AppResult<FarmerDetail> {
        let (farmer, devices, logs, tests) = tokio::try_join!(
            self.get_farmer(token, farmer_id),
            self.api.list_devices(token, farmer_id),
            self.api.list_sms_logs(token, farmer_id),
            self.api.list_soil_tests(token, farmer_id),
        )?;

        Ok(FarmerDetail {
            farmer,
            devices,
            sms_logs: roster::load_more(&logs, 1, sms_page_size),
            soil_tests: tests.iter().map(SoilTestReport::from_test).collect(),
        })
    }
}
