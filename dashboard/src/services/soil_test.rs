//! Soil test service: fetches a farmer's tests and interprets them

use shared::SoilTestReport;

use crate::error::{AppError, AppResult};
use crate::external::SoilApiClient;

/// Soil test service
#[derive(Clone)]
pub struct SoilTestService {
    api: SoilApiClient,
}

impl SoilTestService {
    pub fn new(api: SoilApiClient) -> Self {
        Self { api }
    }

    /// Reports for every soil test of a farmer, newest first as returned upstream
    pub async fn get_reports(&self, token: &str, farmer_id: &str) -> AppResult<Vec<SoilTestReport>> {
        let tests = self.api.list_soil_tests(token, farmer_id).await?;
        Ok(tests.iter().map(SoilTestReport::from_test).collect())
    }

    /// Report for a single soil test
    pub async fn get_report(
        &self,
        token: &str,
        farmer_id: &str,
        test_id: &str,
    ) -> AppResult<SoilTestReport> {
        let tests = self.api.list_soil_tests(token, farmer_id).await?;
        tests
            .iter()
            .find(|test| test.id == test_id)
            .map(SoilTestReport::from_test)
            .ok_or_else(|| AppError::NotFound("Soil test".to_string()))
    }
}
