//! WebAssembly module for the Smart Soil Dashboard
//!
//! Lets the browser run the same soil interpretation and roster analytics
//! as the backend, so filters and status chips update without a round trip.
//! Structured values cross the boundary as JSON strings.

use serde::Serialize;
use validator::Validate;
use wasm_bindgen::prelude::*;

use shared::roster;
use shared::{
    classify, evaluate, CreateFarmerInput, Farmer, RegionFilter, SoilMetric, SoilTest,
    SoilTestReport,
};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&JsValue::from_str("soil dashboard wasm ready"));
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

fn parse_farmers(farmers_json: &str) -> Result<Vec<Farmer>, JsValue> {
    serde_json::from_str(farmers_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid farmers JSON: {}", e)))
}

/// Classify one reading. `value` may be `undefined`, `null` or `NaN` when not recorded.
#[wasm_bindgen]
pub fn classify_soil_metric(metric: &str, value: Option<f64>) -> Result<String, JsValue> {
    let metric: SoilMetric = metric
        .parse()
        .map_err(|e: shared::InsightError| JsValue::from_str(&e.to_string()))?;
    to_json(&classify(metric, value))
}

/// Overall status chip for a pH / moisture pair
#[wasm_bindgen]
pub fn evaluate_soil_status(ph: Option<f64>, moisture: Option<f64>) -> Result<String, JsValue> {
    to_json(&evaluate(ph, moisture))
}

/// Full interpretation of a soil test record
#[wasm_bindgen]
pub fn soil_test_report(test_json: &str) -> Result<String, JsValue> {
    let test: SoilTest = serde_json::from_str(test_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid soil test JSON: {}", e)))?;
    to_json(&SoilTestReport::from_test(&test))
}

/// Newest farmer as JSON, or `null` when no farmer has a usable `created_at`
#[wasm_bindgen]
pub fn newest_farmer(farmers_json: &str) -> Result<String, JsValue> {
    let farmers = parse_farmers(farmers_json)?;
    to_json(&roster::newest(&farmers))
}

/// Farmer counts per region, largest first
#[wasm_bindgen]
pub fn farmers_by_region(farmers_json: &str) -> Result<String, JsValue> {
    let farmers = parse_farmers(farmers_json)?;
    to_json(&roster::by_region(&farmers))
}

/// Search and region filter; `region` of `"all"` or `undefined` keeps every region
#[wasm_bindgen]
pub fn filter_farmers(
    farmers_json: &str,
    search: &str,
    region: Option<String>,
) -> Result<String, JsValue> {
    let farmers = parse_farmers(farmers_json)?;
    let region = RegionFilter::from(region.as_deref());
    to_json(&roster::filter(&farmers, search, &region))
}

/// Overview page figures
#[wasm_bindgen]
pub fn roster_summary(farmers_json: &str) -> Result<String, JsValue> {
    let farmers = parse_farmers(farmers_json)?;
    to_json(&roster::summarize(&farmers))
}

/// Region selector options as a JS array of strings
#[wasm_bindgen]
pub fn farmer_regions(farmers_json: &str) -> Result<js_sys::Array, JsValue> {
    let farmers = parse_farmers(farmers_json)?;
    Ok(roster::regions(&farmers)
        .into_iter()
        .map(JsValue::from)
        .collect())
}

/// Page sizes offered by the farmer table
#[wasm_bindgen]
pub fn page_size_options() -> Vec<u32> {
    shared::PAGE_SIZE_OPTIONS.to_vec()
}

#[derive(Serialize)]
struct FieldMessage {
    field: String,
    message: String,
}

/// Validate the new farmer form. Returns a JSON list of field errors, empty when valid.
#[wasm_bindgen]
pub fn validate_farmer_input(input_json: &str) -> Result<String, JsValue> {
    let input: CreateFarmerInput = serde_json::from_str(input_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid farmer JSON: {}", e)))?;

    let mut messages: Vec<FieldMessage> = match input.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| FieldMessage {
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                })
            })
            .collect(),
    };
    messages.sort_by(|a, b| a.field.cmp(&b.field));
    to_json(&messages)
}
