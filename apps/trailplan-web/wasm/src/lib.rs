//! Browser layer for the race-plan page.
//!
//! State management and rendering live in Rust; JavaScript only loads
//! the module, wires the click handler, and hosts the `html2canvas`
//! capture bridge.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { mount, Exporter } from './pkg/trailplan_wasm.js';
//!
//! await init();
//! mount();
//!
//! const exporter = new Exporter("export-bar", "export-button");
//! document
//!     .getElementById("export-button")
//!     .addEventListener("click", () => exporter.export());
//! ```

pub mod chart;
pub mod download;
pub mod exporter;
pub mod render;
pub mod state;

use serde::Serialize;
use trailplan_core::plan::{self, GearItem, NutritionStop, PacingSegment, ProfilePoint};
use wasm_bindgen::prelude::*;

pub use exporter::{Exporter, CONTENT_REGION_ID};
pub use render::{EXPORT_BAR_ID, EXPORT_BUTTON_ID};
pub use state::{ExportPhase, ExportState};

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Build the page DOM under `document.body`.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document object available"))?;
    render::mount_page(&document)
}

/// Every row the page renders, bundled for the JS side.
#[derive(Debug, Clone, Serialize)]
pub struct PlanData {
    pub profile: Vec<ProfilePoint>,
    pub pacing: Vec<PacingSegment>,
    pub nutrition: Vec<NutritionStop>,
    pub gear: Vec<GearItem>,
}

impl PlanData {
    pub fn new() -> Self {
        Self {
            profile: plan::ELEVATION_PROFILE.to_vec(),
            pacing: plan::PACING_PLAN.to_vec(),
            nutrition: plan::NUTRITION_PLAN.to_vec(),
            gear: plan::MANDATORY_GEAR.to_vec(),
        }
    }
}

impl Default for PlanData {
    fn default() -> Self {
        Self::new()
    }
}

/// Plan rows as JS values, for debugging and reuse from the console.
#[wasm_bindgen(js_name = planData)]
pub fn plan_data() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&PlanData::new())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        assert_eq!(get_version(), "0.1.0");
    }

    #[test]
    fn plan_data_bundles_every_table() {
        let data = PlanData::new();
        assert_eq!(data.profile.len(), plan::ELEVATION_PROFILE.len());
        assert_eq!(data.pacing.len(), plan::PACING_PLAN.len());
        assert_eq!(data.nutrition.len(), plan::NUTRITION_PLAN.len());
        assert_eq!(data.gear.len(), plan::MANDATORY_GEAR.len());
    }
}
