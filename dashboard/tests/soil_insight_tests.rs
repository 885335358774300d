//! Tests for soil reading interpretation
//! Covers the metric classifier, the overall status verdict and report assembly

use proptest::prelude::*;
use shared::{
    classify, classify_band, evaluate, format_reading, SoilBand, SoilMetric, SoilStatus,
    SoilTest, SoilTestReport, StatusTone,
};

fn status(ph: Option<f64>, moisture: Option<f64>) -> SoilStatus {
    evaluate(ph, moisture).label
}

// =============================================================================
// Classifier Boundary Tests
// =============================================================================

mod classifier_boundaries {
    use super::*;

    #[test]
    fn moisture_boundaries() {
        let label = |v: f64| classify(SoilMetric::Moisture, Some(v)).label;
        assert_eq!(label(19.9), "Very dry");
        assert_eq!(label(20.0), "Dry");
        assert_eq!(label(39.99), "Dry");
        assert_eq!(label(40.0), "Optimal");
        assert_eq!(label(70.0), "Optimal");
        assert_eq!(label(70.01), "Wet");
        assert_eq!(label(80.0), "Wet");
        assert_eq!(label(80.01), "Very wet");
    }

    #[test]
    fn temperature_boundaries() {
        let label = |v: f64| classify(SoilMetric::Temperature, Some(v)).label;
        assert_eq!(label(9.9), "Very cool");
        assert_eq!(label(10.0), "Cool");
        assert_eq!(label(18.0), "Optimal");
        assert_eq!(label(30.0), "Optimal");
        assert_eq!(label(30.5), "Warm");
        assert_eq!(label(35.0), "Warm");
        assert_eq!(label(35.1), "Hot");
    }

    #[test]
    fn absent_readings_name_the_metric() {
        let insight = classify(SoilMetric::Ph, None);
        assert_eq!(insight.label, "pH not recorded");
        assert_eq!(insight.detail, "No pH value was provided.");

        let insight = classify(SoilMetric::Temperature, Some(f64::NAN));
        assert_eq!(insight.band, SoilBand::NotRecorded);
        assert_eq!(insight.label, "Temperature not recorded");
    }

    #[test]
    fn metric_names_parse_case_insensitively() {
        assert_eq!("pH".parse::<SoilMetric>().unwrap(), SoilMetric::Ph);
        assert_eq!(" Moisture ".parse::<SoilMetric>().unwrap(), SoilMetric::Moisture);
        assert!("salinity".parse::<SoilMetric>().is_err());
    }
}

// =============================================================================
// Overall Status Tests
// =============================================================================

mod overall_status {
    use super::*;

    #[test]
    fn insufficient_data_when_both_absent() {
        let verdict = evaluate(None, None);
        assert_eq!(verdict.label, SoilStatus::InsufficientData);
        assert_eq!(verdict.tone, StatusTone::Default);
    }

    #[test]
    fn good_when_present_readings_are_optimal() {
        assert_eq!(status(Some(6.5), Some(55.0)), SoilStatus::Good);
        assert_eq!(status(Some(6.5), None), SoilStatus::Good);
        assert_eq!(status(None, Some(40.0)), SoilStatus::Good);
        assert_eq!(evaluate(Some(7.5), Some(70.0)).tone, StatusTone::Success);
    }

    #[test]
    fn poor_when_any_reading_is_extreme() {
        assert_eq!(status(Some(4.0), Some(50.0)), SoilStatus::Poor);
        assert_eq!(status(Some(6.5), Some(85.0)), SoilStatus::Poor);
        assert_eq!(status(None, Some(10.0)), SoilStatus::Poor);
        assert_eq!(evaluate(Some(9.0), None).tone, StatusTone::Error);
    }

    #[test]
    fn needs_attention_between_optimal_and_extreme() {
        assert_eq!(status(Some(5.8), Some(50.0)), SoilStatus::NeedsAttention);
        assert_eq!(status(Some(6.5), Some(30.0)), SoilStatus::NeedsAttention);
        assert_eq!(status(Some(8.0), None), SoilStatus::NeedsAttention);
        assert_eq!(evaluate(Some(5.5), Some(20.0)).tone, StatusTone::Warning);
    }

    #[test]
    fn extreme_boundaries_are_not_extreme() {
        assert_eq!(status(Some(5.5), Some(80.0)), SoilStatus::NeedsAttention);
        assert_eq!(status(Some(8.5), Some(20.0)), SoilStatus::NeedsAttention);
    }

    #[test]
    fn status_serializes_with_display_labels() {
        let json = serde_json::to_string(&evaluate(Some(5.8), None)).unwrap();
        assert_eq!(json, r#"{"label":"Needs attention","tone":"warning"}"#);
    }
}

// =============================================================================
// Report Tests
// =============================================================================

mod reports {
    use super::*;

    #[test]
    fn report_formats_readings() {
        let test = SoilTest {
            id: "t-1".to_string(),
            timestamp: "2024-06-01T08:30:00".to_string(),
            ph: Some(6.456),
            moisture: Some(41.26),
            temperature: Some(24.0),
            nitrogen: Some(10.0),
            location_name: Some("  ".to_string()),
            ..Default::default()
        };

        let report = SoilTestReport::from_test(&test);
        assert_eq!(report.location, "Location not provided");
        assert_eq!(report.ph.display_value.as_deref(), Some("6.46"));
        assert_eq!(report.moisture.display_value.as_deref(), Some("41.3%"));
        assert_eq!(report.temperature.display_value.as_deref(), Some("24.0°C"));
        assert_eq!(report.nutrients[0].display_value, "10.0");
        assert!(report.nutrients[2].missing);
        assert_eq!(report.nutrients[2].chart_value, 0.0);
        assert_eq!(report.recommendation.recommendation_type.as_deref(), Some("none"));
    }

    #[test]
    fn report_falls_back_when_recommendation_content_is_null() {
        let test: SoilTest = serde_json::from_str(
            r#"{"id": "t-9", "timestamp": "2024-06-01T08:30:00", "ph": 6.5,
                "recommendations": [{"id": "r-1", "recommendation_type": null, "content": null}]}"#,
        )
        .unwrap();

        let report = SoilTestReport::from_test(&test);
        assert_eq!(
            report.recommendation.content.as_deref(),
            Some("No recommendation available.")
        );
        assert_eq!(report.overall.label, SoilStatus::Good);
    }

    #[test]
    fn format_reading_uses_dash_when_absent() {
        assert_eq!(format_reading(None), "—");
        assert_eq!(format_reading(Some(f64::NAN)), "—");
        assert_eq!(format_reading(Some(12.34)), "12.3");
    }
}

// =============================================================================
// Property Tests
// =============================================================================

fn reading_strategy() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![Just(None), (-50.0f64..150.0).prop_map(Some)]
}

fn metric_strategy() -> impl Strategy<Value = SoilMetric> {
    prop_oneof![
        Just(SoilMetric::Ph),
        Just(SoilMetric::Moisture),
        Just(SoilMetric::Temperature),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every present reading lands in exactly one band, never NotRecorded
    #[test]
    fn prop_present_reading_is_classified(metric in metric_strategy(), value in -1.0e6f64..1.0e6) {
        let band = classify_band(metric, Some(value));
        prop_assert_ne!(band, SoilBand::NotRecorded);
    }

    /// Classification is pure
    #[test]
    fn prop_classify_is_deterministic(metric in metric_strategy(), value in reading_strategy()) {
        prop_assert_eq!(classify(metric, value), classify(metric, value));
    }

    /// Bands are monotone: a larger reading never falls into an earlier band
    #[test]
    fn prop_ph_bands_are_ordered(a in 0.0f64..14.0, b in 0.0f64..14.0) {
        let rank = |v: f64| match classify_band(SoilMetric::Ph, Some(v)) {
            SoilBand::StronglyAcidic => 0,
            SoilBand::Acidic => 1,
            SoilBand::Optimal => 2,
            SoilBand::Alkaline => 3,
            _ => 4,
        };
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank(lo) <= rank(hi));
    }

    /// Good implies no present reading outside its optimal range
    #[test]
    fn prop_good_means_optimal_or_absent(ph in reading_strategy(), moisture in reading_strategy()) {
        if evaluate(ph, moisture).label == SoilStatus::Good {
            prop_assert!(ph.map_or(true, |v| (6.0..=7.5).contains(&v)));
            prop_assert!(moisture.map_or(true, |v| (40.0..=70.0).contains(&v)));
        }
    }

    /// Insufficient data only when nothing was recorded
    #[test]
    fn prop_insufficient_only_when_both_absent(ph in reading_strategy(), moisture in reading_strategy()) {
        let insufficient = evaluate(ph, moisture).label == SoilStatus::InsufficientData;
        prop_assert_eq!(insufficient, ph.is_none() && moisture.is_none());
    }
}
