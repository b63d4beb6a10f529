//! Browser-side behavior of the export trigger.

#![cfg(target_arch = "wasm32")]

use trailplan_wasm::{Exporter, CONTENT_REGION_ID};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlButtonElement};

wasm_bindgen_test_configure!(run_in_browser);

fn dom() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn install_trigger(
    document: &Document,
    bar_id: &str,
    button_id: &str,
) -> (Element, HtmlButtonElement) {
    let body = document.body().unwrap();
    let bar = document.create_element("div").unwrap();
    bar.set_id(bar_id);
    let button: HtmlButtonElement = document
        .create_element("button")
        .unwrap()
        .dyn_into()
        .unwrap();
    button.set_id(button_id);
    bar.append_child(&button).unwrap();
    body.append_child(&bar).unwrap();
    (bar, button)
}

#[wasm_bindgen_test]
async fn export_without_content_region_is_a_silent_no_op() {
    let document = dom();
    if let Some(region) = document.get_element_by_id(CONTENT_REGION_ID) {
        region.remove();
    }
    let (bar, button) = install_trigger(&document, "noop-bar", "noop-button");

    let mut exporter = Exporter::new("noop-bar", "noop-button").unwrap();
    exporter.export().await.unwrap();

    assert!(!exporter.is_exporting());
    assert!(!button.disabled());
    assert!(!bar.class_list().contains("hidden"));

    bar.remove();
}

#[wasm_bindgen_test]
async fn failed_capture_restores_the_trigger() {
    let document = dom();
    let region = document.create_element("div").unwrap();
    region.set_id(CONTENT_REGION_ID);
    region.set_text_content(Some("contenu"));
    document.body().unwrap().append_child(&region).unwrap();

    let (bar, button) = install_trigger(&document, "fail-bar", "fail-button");
    let mut exporter = Exporter::new("fail-bar", "fail-button").unwrap();

    // html2canvas is not loaded in the test page, so the capture bridge
    // rejects; the trigger must come back regardless.
    let result = exporter.export().await;

    assert!(result.is_err());
    assert!(!exporter.is_exporting());
    assert!(!button.disabled());
    assert!(!bar.class_list().contains("hidden"));

    region.remove();
    bar.remove();
}
