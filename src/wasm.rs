//! WebAssembly bindings for JavaScript spreadsheet hosts.

use wasm_bindgen::prelude::*;

use crate::combination::Cell;
use crate::present::{self, SheetOutput};

/// Searches a 2-D range of cells for combinations hitting `target`.
///
/// `range` is an array of rows; each cell may be a number, a string, a
/// boolean or `null`. Returns either a matrix (one column per combination)
/// or a message string.
#[wasm_bindgen(js_name = searchCombination)]
pub fn search_combination(
    range: JsValue,
    target: f64,
    margin: f64,
    positive_and_negative: bool,
) -> Result<JsValue, JsValue> {
    let range: Vec<Vec<Cell>> = serde_wasm_bindgen::from_value(range)
        .map_err(|e| JsValue::from_str(&format!("Error: {e}")))?;
    let output: SheetOutput =
        present::search_combination(&range, &Cell::Number(target), margin, positive_and_negative);
    serde_wasm_bindgen::to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
}
