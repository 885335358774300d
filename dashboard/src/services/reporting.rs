//! Reporting service for roster exports

use serde::Serialize;

use shared::Farmer;

use crate::error::{AppError, AppResult};

/// Reporting service
#[derive(Clone)]
pub struct ReportingService;

/// One row of the farmer CSV export
#[derive(Debug, Serialize)]
pub struct FarmerCsvRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub phone_number: &'a str,
    pub region: &'a str,
    pub district: &'a str,
    pub created_at: &'a str,
}

impl<'a> From<&'a Farmer> for FarmerCsvRow<'a> {
    fn from(farmer: &'a Farmer) -> Self {
        Self {
            id: &farmer.id,
            name: &farmer.name,
            phone_number: &farmer.phone_number,
            region: farmer.region.as_deref().unwrap_or_default(),
            district: farmer.district.as_deref().unwrap_or_default(),
            created_at: farmer.created_at.as_deref().unwrap_or_default(),
        }
    }
}

impl ReportingService {
    /// Farmer roster as CSV. PINs are never exported.
    pub fn export_farmers(farmers: &[&Farmer]) -> AppResult<String> {
        let rows: Vec<FarmerCsvRow> = farmers.iter().map(|f| FarmerCsvRow::from(*f)).collect();
        Self::export_to_csv(&rows)
    }

    /// Export data to CSV format
    pub fn export_to_csv<T: Serialize>(data: &[T]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in data {
            wtr.serialize(record)
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }
        let csv_data = String::from_utf8(
            wtr.into_inner()
                .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
        )
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_farmers_omits_pin() {
        let farmer = Farmer {
            id: "f-1".to_string(),
            name: "Ana Silva".to_string(),
            phone_number: "0711000111".to_string(),
            region: Some("North".to_string()),
            district: None,
            pin: Some("123456".to_string()),
            created_at: Some("2024-06-01T08:30:00".to_string()),
            updated_at: None,
        };

        let csv = ReportingService::export_farmers(&[&farmer]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("id,name,phone_number,region,district,created_at")
        );
        assert_eq!(
            lines.next(),
            Some("f-1,Ana Silva,0711000111,North,,2024-06-01T08:30:00")
        );
        assert!(!csv.contains("123456"));
    }
}
