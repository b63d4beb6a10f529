//! The PDF export routine: settle, rasterize, compose, download.
//!
//! Rasterization goes through a small JS bridge around `html2canvas`
//! (the same bridge pattern as the chart/PDF bridges elsewhere in this
//! workspace); everything after the capture is pure Rust in
//! `trailplan-core`.

use crate::download::trigger_download;
use crate::state::ExportState;
use js_sys::Promise;
use trailplan_core::{export_pdf_from_data_url, EXPORT_FILE_NAME};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlButtonElement};

/// Id of the region the export captures.
pub const CONTENT_REGION_ID: &str = "pdf-content";

/// Fixed pause letting the DOM repaint without the trigger bar before
/// the capture reads it.
const SETTLE_DELAY_MS: i32 = 50;

/// Upscaling factor relative to CSS pixels.
const CAPTURE_SCALE: f64 = 2.0;

/// Flat background the capture is composited on, matching the page
/// background so transparent regions keep their color.
const PAGE_BACKGROUND: &str = "#EDE6D6";

#[wasm_bindgen(module = "/www/js/capture-bridge.js")]
extern "C" {
    /// Rasterize `element` with html2canvas and return a PNG data URL.
    #[wasm_bindgen(js_name = captureElement, catch)]
    async fn capture_element(
        element: &Element,
        scale: f64,
        background: &str,
    ) -> Result<JsValue, JsValue>;
}

/// Drives one export at a time for the page's trigger control.
#[wasm_bindgen]
pub struct Exporter {
    state: ExportState,
}

#[wasm_bindgen]
impl Exporter {
    /// Bind the exporter to the trigger bar and button it governs.
    #[wasm_bindgen(constructor)]
    pub fn new(bar_id: &str, button_id: &str) -> Result<Exporter, JsValue> {
        let document = page_document()?;
        let bar = document
            .get_element_by_id(bar_id)
            .ok_or_else(|| JsValue::from_str(&format!("No element with id '{}'", bar_id)))?;
        let button: HtmlButtonElement = document
            .get_element_by_id(button_id)
            .ok_or_else(|| JsValue::from_str(&format!("No element with id '{}'", button_id)))?
            .dyn_into()?;

        Ok(Exporter {
            state: ExportState::new(bar, button),
        })
    }

    /// Whether an export is currently running.
    #[wasm_bindgen(getter, js_name = isExporting)]
    pub fn is_exporting(&self) -> bool {
        self.state.is_exporting()
    }

    /// Capture the content region and download it as a multi-page PDF.
    ///
    /// A missing content region is a silent no-op; a failed capture
    /// restores the trigger and surfaces the error to the caller.
    #[wasm_bindgen]
    pub async fn export(&mut self) -> Result<(), JsValue> {
        let document = page_document()?;
        let Some(region) = document.get_element_by_id(CONTENT_REGION_ID) else {
            web_sys::console::warn_1(
                &format!("Export skipped: no #{} region on this page", CONTENT_REGION_ID).into(),
            );
            return Ok(());
        };

        self.state
            .begin()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        // The trigger stays hidden for exactly the settle + capture
        // interval, whatever the capture outcome.
        let captured = capture_region(&region).await;
        self.state.end();

        let data_url = captured.inspect_err(web_sys::console::error_1)?;

        let pdf = export_pdf_from_data_url(&data_url)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        trigger_download(&pdf, EXPORT_FILE_NAME)
    }
}

/// Settle, then rasterize the region into a PNG data URL.
async fn capture_region(region: &Element) -> Result<String, JsValue> {
    settle(SETTLE_DELAY_MS).await?;

    // TODO: bound this await with a timeout; a stalled html2canvas run
    // currently leaves the trigger hidden until reload.
    let value = capture_element(region, CAPTURE_SCALE, PAGE_BACKGROUND).await?;
    value
        .as_string()
        .ok_or_else(|| JsValue::from_str("Capture bridge returned no data URL"))
}

/// Resolve after `ms` milliseconds via `setTimeout`.
async fn settle(ms: i32) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))?;
    let promise = Promise::new(&mut |resolve, _reject| {
        if let Err(e) =
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
        {
            web_sys::console::error_1(&e);
        }
    });
    JsFuture::from(promise).await?;
    Ok(())
}

fn page_document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document object available"))
}
