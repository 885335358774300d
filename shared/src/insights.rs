//! Soil test interpretation
//!
//! Turns raw sensor readings into the qualitative bands and the overall
//! verdict shown on the soil test detail view. Every function here is total:
//! a missing or NaN reading becomes an explicit "not recorded" result.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Recommendation, SoilTest};
use crate::types::{reading, GpsCoordinates};

/// Ideal pH window for most crops (inclusive)
pub const PH_OPTIMAL: (f64, f64) = (6.0, 7.5);
/// Below / above these pH values a reading is extreme
pub const PH_EXTREME: (f64, f64) = (5.5, 8.5);
/// Ideal moisture window in percent (inclusive)
pub const MOISTURE_OPTIMAL: (f64, f64) = (40.0, 70.0);
/// Below / above these moisture values a reading is extreme
pub const MOISTURE_EXTREME: (f64, f64) = (20.0, 80.0);
/// Ideal soil temperature window in °C (inclusive)
pub const TEMPERATURE_OPTIMAL: (f64, f64) = (18.0, 30.0);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InsightError {
    #[error("unknown soil metric: {0}")]
    UnknownMetric(String),
}

/// A soil reading that gets a qualitative interpretation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SoilMetric {
    Ph,
    Moisture,
    Temperature,
}

impl std::str::FromStr for SoilMetric {
    type Err = InsightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ph" => Ok(SoilMetric::Ph),
            "moisture" => Ok(SoilMetric::Moisture),
            "temperature" => Ok(SoilMetric::Temperature),
            other => Err(InsightError::UnknownMetric(other.to_string())),
        }
    }
}

/// Qualitative band a reading falls into
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SoilBand {
    NotRecorded,
    // pH
    StronglyAcidic,
    Acidic,
    Alkaline,
    StronglyAlkaline,
    // Moisture
    VeryDry,
    Dry,
    Wet,
    VeryWet,
    // Temperature
    VeryCool,
    Cool,
    Warm,
    Hot,
    /// Shared by all metrics
    Optimal,
}

impl SoilBand {
    /// Display label; "not recorded" names the metric
    pub fn label(&self, metric: SoilMetric) -> &'static str {
        match self {
            SoilBand::NotRecorded => match metric {
                SoilMetric::Ph => "pH not recorded",
                SoilMetric::Moisture => "Moisture not recorded",
                SoilMetric::Temperature => "Temperature not recorded",
            },
            SoilBand::StronglyAcidic => "Strongly acidic",
            SoilBand::Acidic => "Acidic",
            SoilBand::Alkaline => "Alkaline",
            SoilBand::StronglyAlkaline => "Strongly alkaline",
            SoilBand::VeryDry => "Very dry",
            SoilBand::Dry => "Dry",
            SoilBand::Wet => "Wet",
            SoilBand::VeryWet => "Very wet",
            SoilBand::VeryCool => "Very cool",
            SoilBand::Cool => "Cool",
            SoilBand::Warm => "Warm",
            SoilBand::Hot => "Hot",
            SoilBand::Optimal => "Optimal",
        }
    }

    /// Agronomic explanation of the band for the given metric
    pub fn detail(&self, metric: SoilMetric) -> &'static str {
        match (metric, self) {
            (SoilMetric::Ph, SoilBand::NotRecorded) => "No pH value was provided.",
            (SoilMetric::Moisture, SoilBand::NotRecorded) => "No moisture value was provided.",
            (SoilMetric::Temperature, SoilBand::NotRecorded) => {
                "No temperature value was provided."
            }
            (_, SoilBand::StronglyAcidic) => "Most crops may struggle without liming.",
            (_, SoilBand::Acidic) => "Slightly acidic; many crops still perform well.",
            (_, SoilBand::Alkaline) => "Some nutrients become less available.",
            (_, SoilBand::StronglyAlkaline) => "High pH can block nutrient uptake.",
            (_, SoilBand::VeryDry) => "Irrigation likely needed.",
            (_, SoilBand::Dry) => "Below optimal moisture for most crops.",
            (_, SoilBand::Wet) => "May reduce root oxygen.",
            (_, SoilBand::VeryWet) => "Risk of waterlogging.",
            (_, SoilBand::VeryCool) => "May slow germination and growth.",
            (_, SoilBand::Cool) => "Growth could be slower for warm-season crops.",
            (_, SoilBand::Warm) => "Monitor moisture to avoid stress.",
            (_, SoilBand::Hot) => "Heat stress risk; keep soil moisture stable.",
            (SoilMetric::Ph, SoilBand::Optimal) => "Ideal range for most crops (6.0–7.5).",
            (SoilMetric::Moisture, SoilBand::Optimal) => "Good moisture range for growth.",
            (SoilMetric::Temperature, SoilBand::Optimal) => {
                "Good temperature range for most crops."
            }
        }
    }
}

/// Band for a reading. Ranges are evaluated in order and the first match wins.
pub fn classify_band(metric: SoilMetric, value: Option<f64>) -> SoilBand {
    let Some(v) = reading(value) else {
        return SoilBand::NotRecorded;
    };

    match metric {
        SoilMetric::Ph => {
            if v < PH_EXTREME.0 {
                SoilBand::StronglyAcidic
            } else if v < PH_OPTIMAL.0 {
                SoilBand::Acidic
            } else if v <= PH_OPTIMAL.1 {
                SoilBand::Optimal
            } else if v <= PH_EXTREME.1 {
                SoilBand::Alkaline
            } else {
                SoilBand::StronglyAlkaline
            }
        }
        SoilMetric::Moisture => {
            if v < MOISTURE_EXTREME.0 {
                SoilBand::VeryDry
            } else if v < MOISTURE_OPTIMAL.0 {
                SoilBand::Dry
            } else if v <= MOISTURE_OPTIMAL.1 {
                SoilBand::Optimal
            } else if v <= MOISTURE_EXTREME.1 {
                SoilBand::Wet
            } else {
                SoilBand::VeryWet
            }
        }
        SoilMetric::Temperature => {
            if v < 10.0 {
                SoilBand::VeryCool
            } else if v < TEMPERATURE_OPTIMAL.0 {
                SoilBand::Cool
            } else if v <= TEMPERATURE_OPTIMAL.1 {
                SoilBand::Optimal
            } else if v <= 35.0 {
                SoilBand::Warm
            } else {
                SoilBand::Hot
            }
        }
    }
}

/// Interpretation of a single reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilInsight {
    pub metric: SoilMetric,
    pub band: SoilBand,
    pub label: String,
    pub detail: String,
}

/// Classify a reading into a labelled band with an explanation
pub fn classify(metric: SoilMetric, value: Option<f64>) -> SoilInsight {
    let band = classify_band(metric, value);
    SoilInsight {
        metric,
        band,
        label: band.label(metric).to_string(),
        detail: band.detail(metric).to_string(),
    }
}

/// Aggregate verdict over pH and moisture
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SoilStatus {
    #[serde(rename = "Insufficient data")]
    InsufficientData,
    Good,
    Poor,
    #[serde(rename = "Needs attention")]
    NeedsAttention,
}

impl std::fmt::Display for SoilStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilStatus::InsufficientData => write!(f, "Insufficient data"),
            SoilStatus::Good => write!(f, "Good"),
            SoilStatus::Poor => write!(f, "Poor"),
            SoilStatus::NeedsAttention => write!(f, "Needs attention"),
        }
    }
}

/// Visual tone the presentation layer uses for a status chip
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Default,
    Success,
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverallStatus {
    pub label: SoilStatus,
    pub tone: StatusTone,
}

impl From<SoilStatus> for OverallStatus {
    fn from(label: SoilStatus) -> Self {
        let tone = match label {
            SoilStatus::InsufficientData => StatusTone::Default,
            SoilStatus::Good => StatusTone::Success,
            SoilStatus::Poor => StatusTone::Error,
            SoilStatus::NeedsAttention => StatusTone::Warning,
        };
        Self { label, tone }
    }
}

/// Combine pH and moisture into one verdict.
///
/// An absent reading does not block `Good`, but once the "good or absent"
/// check fails any extreme reading forces `Poor`.
pub fn evaluate(ph: Option<f64>, moisture: Option<f64>) -> OverallStatus {
    let ph = reading(ph);
    let moisture = reading(moisture);

    if ph.is_none() && moisture.is_none() {
        return SoilStatus::InsufficientData.into();
    }

    let within = |v: f64, (lo, hi): (f64, f64)| v >= lo && v <= hi;
    let outside = |v: f64, (lo, hi): (f64, f64)| v < lo || v > hi;

    let ph_good = ph.is_some_and(|v| within(v, PH_OPTIMAL));
    let ph_extreme = ph.is_some_and(|v| outside(v, PH_EXTREME));
    let moisture_good = moisture.is_some_and(|v| within(v, MOISTURE_OPTIMAL));
    let moisture_extreme = moisture.is_some_and(|v| outside(v, MOISTURE_EXTREME));

    let status = if (ph_good || ph.is_none()) && (moisture_good || moisture.is_none()) {
        SoilStatus::Good
    } else if ph_extreme || moisture_extreme {
        SoilStatus::Poor
    } else {
        SoilStatus::NeedsAttention
    };
    status.into()
}

/// Format an optional reading with one decimal, or an em dash when missing
pub fn format_reading(value: Option<f64>) -> String {
    match reading(value) {
        Some(v) => format!("{:.1}", v),
        None => "—".to_string(),
    }
}

/// A classified reading together with its display value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricReading {
    #[serde(flatten)]
    pub insight: SoilInsight,
    pub value: Option<f64>,
    /// e.g. `6.50`, `45.0%`, `24.5°C`; absent when not recorded
    pub display_value: Option<String>,
}

impl MetricReading {
    pub fn new(metric: SoilMetric, value: Option<f64>) -> Self {
        let value = reading(value);
        let display_value = value.map(|v| match metric {
            SoilMetric::Ph => format!("{:.2}", v),
            SoilMetric::Moisture => format!("{:.1}%", v),
            SoilMetric::Temperature => format!("{:.1}°C", v),
        });
        Self {
            insight: classify(metric, value),
            value,
            display_value,
        }
    }
}

/// N, P or K card and chart point
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutrientReading {
    pub key: String,
    pub name: String,
    pub value: Option<f64>,
    pub display_value: String,
    /// Zero stands in for a missing value in charts only
    pub chart_value: f64,
    pub missing: bool,
}

impl NutrientReading {
    fn new(key: &str, name: &str, value: Option<f64>) -> Self {
        let value = reading(value);
        Self {
            key: key.to_string(),
            name: name.to_string(),
            value,
            display_value: format_reading(value),
            chart_value: value.unwrap_or(0.0),
            missing: value.is_none(),
        }
    }
}

/// Everything the soil test detail view renders, derived from one record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilTestReport {
    pub id: String,
    pub timestamp: String,
    pub location: String,
    pub overall: OverallStatus,
    pub ph: MetricReading,
    pub moisture: MetricReading,
    pub temperature: MetricReading,
    pub nutrients: Vec<NutrientReading>,
    pub coordinates: Option<GpsCoordinates>,
    pub recommendation: Recommendation,
}

impl SoilTestReport {
    pub fn from_test(test: &SoilTest) -> Self {
        let location = test
            .location_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("Location not provided")
            .to_string();

        Self {
            id: test.id.clone(),
            timestamp: test.timestamp.clone(),
            location,
            overall: evaluate(test.ph(), test.moisture()),
            ph: MetricReading::new(SoilMetric::Ph, test.ph()),
            moisture: MetricReading::new(SoilMetric::Moisture, test.moisture()),
            temperature: MetricReading::new(SoilMetric::Temperature, test.temperature()),
            nutrients: vec![
                NutrientReading::new("nitrogen", "Nitrogen (N)", test.nitrogen),
                NutrientReading::new("phosphorus", "Phosphorus (P)", test.phosphorus),
                NutrientReading::new("potassium", "Potassium (K)", test.potassium),
            ],
            coordinates: test.coordinates(),
            recommendation: test
                .primary_recommendation()
                .cloned()
                .unwrap_or_else(Recommendation::unavailable),
        }
    }
}
