//! Browser bindings.

use wasm_bindgen::prelude::*;

use crate::engine::{SeatingConfig, SeatingRunner};
use crate::layout::ClassroomLayout;
use crate::model::Student;
use crate::roster::{RawRecord, Roster};

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArrangeRequest {
    students: Vec<Student>,
    layout: ClassroomLayout,
    #[serde(default)]
    config: SeatingConfig,
}

#[derive(serde::Deserialize)]
struct RosterRequest {
    subjects: Vec<String>,
    rows: Vec<RawRecord>,
}

/// Runs the engine on `{ students, layout, config? }` and returns the
/// arrangement as a plain JS object.
#[wasm_bindgen(js_name = arrangeSeats)]
pub fn arrange_seats(request: JsValue) -> Result<JsValue, JsValue> {
    let ArrangeRequest {
        mut students,
        layout,
        config,
    } = serde_wasm_bindgen::from_value(request)?;

    let result = SeatingRunner::run(&mut students, &layout, &config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Builds a roster from `{ subjects, rows }` parsed on the JS side.
#[wasm_bindgen(js_name = buildRoster)]
pub fn build_roster(request: JsValue) -> Result<JsValue, JsValue> {
    let RosterRequest { subjects, rows } = serde_wasm_bindgen::from_value(request)?;
    Ok(serde_wasm_bindgen::to_value(&Roster::from_rows(subjects, rows))?)
}
