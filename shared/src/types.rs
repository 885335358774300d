//! Common types used across the dashboard

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build coordinates from raw float readings, if both are usable
    pub fn from_f64(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        let latitude = Decimal::try_from(latitude?).ok()?;
        let longitude = Decimal::try_from(longitude?).ok()?;
        Some(Self::new(latitude, longitude))
    }
}

/// Normalize a raw numeric reading: NaN is the same as "not recorded"
pub fn reading(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}

/// Parse a backend timestamp.
///
/// The backend emits naive UTC datetimes (`2024-06-01T08:30:00.123456`),
/// but RFC 3339 strings and plain dates are accepted as well. Anything else
/// is not comparable and yields `None`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Pagination parameters (1-based page)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

/// Page sizes offered by the farmer table
pub const PAGE_SIZE_OPTIONS: &[u32] = &[5, 10, 25];

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
        }
    }
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }
}

/// Paginated response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

/// A growing prefix of a list, used by "show more" views
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoadMoreWindow<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub has_more: bool,
}
