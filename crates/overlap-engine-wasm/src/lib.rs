//! WASM bindings for overlap-engine.
//!
//! Exposes the group-overlap aggregation, display helpers, and grid
//! generation to the JavaScript presentation layer via `wasm-bindgen`. All
//! complex types cross the boundary as JSON strings; record and result keys
//! are camelCase, matching the client's data shapes.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p overlap-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/overlap-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/overlap_engine_wasm.wasm
//! ```

use chrono::NaiveDate;
use overlap_engine::grid::GridConfig;
use overlap_engine::{FlexibleOverlapOptions, OverlapResults, OverlapSlot, TimeSlot};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: JSON parsing and serialization across the boundary
// ---------------------------------------------------------------------------

fn parse_time_slots(json: &str) -> Result<Vec<TimeSlot>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid time slots JSON: {}", e)))
}

fn parse_user_ids(json: &str) -> Result<Vec<String>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid user ids JSON: {}", e)))
}

fn parse_overlap_slots(json: &str) -> Result<Vec<OverlapSlot>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid overlap slots JSON: {}", e)))
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, JsValue> {
    serde_json::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Serialize results with `byDateTime` as a JSON object whose keys keep the
/// engine's first-seen insertion order (`serde_json` preserves it).
fn results_to_json(results: &OverlapResults) -> Result<String, JsValue> {
    let mut by_date_time = serde_json::Map::with_capacity(results.by_date_time.len());
    for (key, slot) in &results.by_date_time {
        by_date_time.insert(key.clone(), to_value(slot)?);
    }

    let mut root = serde_json::Map::new();
    root.insert("allAvailable".to_string(), to_value(&results.all_available)?);
    root.insert(
        "allUnavailable".to_string(),
        to_value(&results.all_unavailable)?,
    );
    root.insert("partial".to_string(), to_value(&results.partial)?);
    root.insert(
        "byDateTime".to_string(),
        serde_json::Value::Object(by_date_time),
    );

    to_json(&serde_json::Value::Object(root))
}

// ---------------------------------------------------------------------------
// WASM exports: aggregation
// ---------------------------------------------------------------------------

/// Aggregate availability records across a selected participant subset.
///
/// `time_slots_json` is a JSON array of time-slot records (`eventId`,
/// `userId`, `date`, `timeBlock`, `isAvailable`); `selected_user_ids_json` is
/// a JSON array of user-id strings. Returns a JSON object with
/// `allAvailable`, `allUnavailable`, `partial`, and `byDateTime`.
#[wasm_bindgen(js_name = "computeOverlap")]
pub fn compute_overlap(
    time_slots_json: &str,
    selected_user_ids_json: &str,
) -> Result<String, JsValue> {
    let time_slots = parse_time_slots(time_slots_json)?;
    let selected = parse_user_ids(selected_user_ids_json)?;

    let results = overlap_engine::compute_overlap(&time_slots, &selected);
    results_to_json(&results)
}

/// [`compute_overlap`] with the at-most-one-record-per-cell invariant
/// enforced: rejects input containing duplicate
/// `(eventId, userId, date, timeBlock)` tuples instead of double counting.
#[wasm_bindgen(js_name = "computeOverlapChecked")]
pub fn compute_overlap_checked(
    time_slots_json: &str,
    selected_user_ids_json: &str,
) -> Result<String, JsValue> {
    let time_slots = parse_time_slots(time_slots_json)?;
    let selected = parse_user_ids(selected_user_ids_json)?;

    let results = overlap_engine::compute_overlap_checked(&time_slots, &selected)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    results_to_json(&results)
}

/// Aggregate with a flexible availability threshold ("at least N of M free").
///
/// `options_json` is an optional JSON object; recognized keys are
/// `minRequired`, `includePartial`, and `anonymizeThreshold`, all optional.
#[wasm_bindgen(js_name = "computeFlexibleOverlap")]
pub fn compute_flexible_overlap(
    time_slots_json: &str,
    selected_user_ids_json: &str,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    let time_slots = parse_time_slots(time_slots_json)?;
    let selected = parse_user_ids(selected_user_ids_json)?;

    let options: FlexibleOverlapOptions = match options_json.as_deref() {
        Some(json) => serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("Invalid options JSON: {}", e)))?,
        None => FlexibleOverlapOptions::default(),
    };

    let results = overlap_engine::compute_flexible_overlap(&time_slots, &selected, &options);
    results_to_json(&results)
}

// ---------------------------------------------------------------------------
// WASM exports: display helpers
// ---------------------------------------------------------------------------

/// Format an available/total count for display, optionally anonymized.
#[wasm_bindgen(js_name = "formatAvailabilityCount")]
pub fn format_availability_count(available: u32, total: u32, anonymize: Option<bool>) -> String {
    overlap_engine::display::format_availability_count(
        available as usize,
        total as usize,
        anonymize.unwrap_or(true),
    )
}

/// Map an availability ratio to its grid-cell hex color.
#[wasm_bindgen(js_name = "getAvailabilityColor")]
pub fn get_availability_color(available_count: u32, total_count: u32) -> String {
    overlap_engine::display::availability_color(available_count as usize, total_count as usize)
        .to_string()
}

/// Stable-sort a JSON array of overlap slots by `availableCount`.
/// `descending` defaults to true.
#[wasm_bindgen(js_name = "sortSlotsByAvailability")]
pub fn sort_slots_by_availability(
    slots_json: &str,
    descending: Option<bool>,
) -> Result<String, JsValue> {
    let slots = parse_overlap_slots(slots_json)?;
    let sorted =
        overlap_engine::display::sort_slots_by_availability(&slots, descending.unwrap_or(true));
    to_json(&sorted)
}

/// Partition a JSON array of overlap slots into a date-keyed JSON object,
/// preserving input order within each group.
#[wasm_bindgen(js_name = "groupSlotsByDate")]
pub fn group_slots_by_date(slots_json: &str) -> Result<String, JsValue> {
    let slots = parse_overlap_slots(slots_json)?;
    let groups = overlap_engine::display::group_slots_by_date(&slots);

    let mut map = serde_json::Map::with_capacity(groups.len());
    for (date, group) in &groups {
        map.insert(date.clone(), to_value(group)?);
    }
    to_json(&serde_json::Value::Object(map))
}

/// The top `count` slots by descending `availableCount`. `count` defaults
/// to 3.
#[wasm_bindgen(js_name = "findBestTimes")]
pub fn find_best_times(slots_json: &str, count: Option<u32>) -> Result<String, JsValue> {
    let slots = parse_overlap_slots(slots_json)?;
    let best =
        overlap_engine::display::find_best_times(&slots, count.unwrap_or(3) as usize);
    to_json(&best)
}

// ---------------------------------------------------------------------------
// WASM exports: grid generation
// ---------------------------------------------------------------------------

/// Generate one day's time-block tokens as a JSON array.
///
/// `config_json` is an optional JSON object (`startHour`, `endHour`,
/// `blockMinutes`, `days`); missing keys take the production defaults
/// (full day, 30-minute blocks).
#[wasm_bindgen(js_name = "generateTimeBlocks")]
pub fn generate_time_blocks(config_json: Option<String>) -> Result<String, JsValue> {
    let config: GridConfig = match config_json.as_deref() {
        Some(json) => serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("Invalid grid config JSON: {}", e)))?,
        None => GridConfig::default(),
    };

    let blocks = overlap_engine::grid::generate_time_blocks(&config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_json(&blocks)
}

/// Generate consecutive ISO date tokens from `start_date` (`YYYY-MM-DD`) as
/// a JSON array. `count` defaults to the 7-day window the app renders.
#[wasm_bindgen(js_name = "generateDates")]
pub fn generate_dates(start_date: &str, count: Option<u32>) -> Result<String, JsValue> {
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
        .map_err(|_| JsValue::from_str(&format!("Invalid start date '{}'", start_date)))?;
    let count = count
        .map(|c| c as usize)
        .unwrap_or(GridConfig::default().days as usize);

    to_json(&overlap_engine::grid::generate_dates(start, count))
}

/// Format an ISO date token as `"Tue, Jan 2"`.
#[wasm_bindgen(js_name = "formatDate")]
pub fn format_date(date: &str) -> Result<String, JsValue> {
    overlap_engine::grid::format_date(date).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Format a time-block token's start as `"9:00 AM"`.
#[wasm_bindgen(js_name = "formatTimeBlock")]
pub fn format_time_block(time_block: &str) -> Result<String, JsValue> {
    overlap_engine::grid::format_time_block(time_block)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
