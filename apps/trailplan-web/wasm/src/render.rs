//! Declarative DOM rendering of the race-plan page.
//!
//! Iterates the constant plan rows into tables and the profile chart.
//! No decision logic lives here; the only interactive element is the
//! export trigger at the bottom of the page.

use crate::chart;
use crate::exporter::CONTENT_REGION_ID;
use crate::state::IDLE_LABEL;
use trailplan_core::plan;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement};

/// Id of the sticky bar holding the trigger (hidden during capture).
pub const EXPORT_BAR_ID: &str = "export-bar";
/// Id of the trigger button itself.
pub const EXPORT_BUTTON_ID: &str = "export-button";

/// Build the whole page under `document.body`.
pub fn mount_page(document: &Document) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("Document has no body"))?;

    body.append_child(&element(document, "div", "top-bar")?.into())?;

    let content = element(document, "div", "")?;
    content.set_id(CONTENT_REGION_ID);
    let main = element(document, "main", "page")?;

    main.append_child(&header(document)?.into())?;
    main.append_child(&course_section(document)?.into())?;
    main.append_child(&pacing_section(document)?.into())?;
    main.append_child(&nutrition_section(document)?.into())?;
    main.append_child(&gear_section(document)?.into())?;
    main.append_child(&summary_section(document)?.into())?;

    content.append_child(&main)?;
    body.append_child(&content)?;
    body.append_child(&export_bar(document)?.into())?;

    Ok(())
}

fn header(document: &Document) -> Result<Element, JsValue> {
    let header = element(document, "header", "page-header")?;
    header.append_child(&text_el(document, "h1", "", plan::RACE_TITLE)?.into())?;
    header.append_child(&text_el(document, "p", "key-figures", plan::RACE_KEY_FIGURES)?.into())?;
    header.append_child(&text_el(document, "p", "intro", plan::RACE_INTRO)?.into())?;
    Ok(header)
}

fn course_section(document: &Document) -> Result<Element, JsValue> {
    let section = section(document, "Parcours & Profil Altim\u{e9}trique")?;
    let card = element(document, "div", "card")?;

    let photo = element(document, "img", "course-photo")?;
    photo.set_attribute("src", plan::COURSE_PHOTO_URL)?;
    photo.set_attribute("alt", plan::COURSE_PHOTO_ALT)?;
    photo.set_attribute("crossorigin", "anonymous")?;
    card.append_child(&photo)?;

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_id("profile-chart");
    chart::draw_profile(&canvas)?;
    card.append_child(&canvas)?;

    section.append_child(&card)?;
    Ok(section)
}

fn pacing_section(document: &Document) -> Result<Element, JsValue> {
    let section = section(document, "Plan de course")?;
    let headers = [
        "Segment",
        "Distance",
        "D+",
        "Allure cible",
        "Dur\u{e9}e",
        "Pause",
        "Heure estim\u{e9}e",
    ];
    let (wrapper, tbody) = table_shell(document, &headers)?;

    for row in plan::PACING_PLAN {
        let tr = element(document, "tr", "")?;
        tr.append_child(&text_el(document, "td", "strong", row.segment)?.into())?;
        for cell in [row.distance, row.climb, row.pace, row.duration, row.pause, row.eta] {
            tr.append_child(&text_el(document, "td", "", cell)?.into())?;
        }
        tbody.append_child(&tr)?;
    }

    let footer = element(document, "div", "table-footer")?;
    footer.append_child(&text_el(document, "span", "strong", plan::PACING_FOOTER_TOTAL)?.into())?;
    footer.append_child(&text_el(document, "span", "", plan::PACING_FOOTER_PAUSES)?.into())?;
    footer.append_child(&text_el(document, "span", "strong", "Objectif moyen :")?.into())?;
    footer.append_child(&text_el(document, "span", "", plan::PACING_FOOTER_AVERAGE)?.into())?;
    wrapper.append_child(&footer)?;

    section.append_child(&wrapper)?;
    Ok(section)
}

fn nutrition_section(document: &Document) -> Result<Element, JsValue> {
    let section = section(document, "Plan nutrition & hydratation")?;
    let headers = [
        "Ravito",
        "Km",
        "Heure estim\u{e9}e",
        "Boire",
        "Manger",
        "Caf\u{e9}ine",
        "Pause",
    ];
    let (wrapper, tbody) = table_shell(document, &headers)?;

    for row in plan::NUTRITION_PLAN {
        let tr = element(document, "tr", "")?;
        tr.append_child(&text_el(document, "td", "strong", row.station)?.into())?;
        tr.append_child(&text_el(document, "td", "", &row.km.to_string())?.into())?;
        for cell in [row.eta, row.drink, row.eat] {
            tr.append_child(&text_el(document, "td", "", cell)?.into())?;
        }

        let badge_cell = element(document, "td", "")?;
        let (label, class) = if row.caffeine {
            ("Oui", "badge badge-yes")
        } else {
            ("Non", "badge badge-no")
        };
        badge_cell.append_child(&text_el(document, "span", class, label)?.into())?;
        tr.append_child(&badge_cell)?;

        tr.append_child(&text_el(document, "td", "", row.pause)?.into())?;
        tbody.append_child(&tr)?;
    }

    let footer = element(document, "div", "table-footer totals-grid")?;
    for (figure, label) in plan::NUTRITION_TOTALS {
        let cell = element(document, "span", "")?;
        cell.append_child(&text_el(document, "span", "strong", figure)?.into())?;
        cell.append_child(&document.create_text_node(&format!(" {}", label)))?;
        footer.append_child(&cell)?;
    }
    wrapper.append_child(&footer)?;

    section.append_child(&wrapper)?;
    Ok(section)
}

fn gear_section(document: &Document) -> Result<Element, JsValue> {
    let section = section(document, "\u{1F9F3} Mat\u{e9}riel obligatoire")?;
    let card = element(document, "div", "card gear-card")?;
    let (wrapper, tbody) = table_shell(document, &["Mat\u{e9}riel", "Exigence", "P\u{e9}nalit\u{e9}"])?;

    for row in plan::MANDATORY_GEAR {
        let tr = element(document, "tr", "")?;
        tr.append_child(&text_el(
            document,
            "td",
            "strong",
            &format!("{} {}", row.icon, row.item),
        )?.into())?;
        tr.append_child(&text_el(document, "td", "", row.requirement)?.into())?;
        tr.append_child(&text_el(document, "td", "", row.penalty)?.into())?;
        tbody.append_child(&tr)?;
    }

    card.append_child(&wrapper)?;
    card.append_child(&text_el(document, "div", "gear-warning", plan::GEAR_WARNING)?.into())?;
    section.append_child(&card)?;
    Ok(section)
}

fn summary_section(document: &Document) -> Result<Element, JsValue> {
    let section = section(document, "R\u{e9}sum\u{e9} de la strat\u{e9}gie")?;
    let card = element(document, "div", "summary-card")?;
    card.append_child(&text_el(document, "blockquote", "", plan::SUMMARY_QUOTE)?.into())?;
    card.append_child(&text_el(document, "p", "summary-author", plan::SUMMARY_AUTHOR)?.into())?;
    section.append_child(&card)?;
    Ok(section)
}

fn export_bar(document: &Document) -> Result<Element, JsValue> {
    let bar = element(document, "div", "export-bar")?;
    bar.set_id(EXPORT_BAR_ID);
    let button = text_el(document, "button", "export-button", IDLE_LABEL)?;
    button.set_id(EXPORT_BUTTON_ID);
    bar.append_child(&button)?;
    Ok(bar)
}

fn section(document: &Document, title: &str) -> Result<Element, JsValue> {
    let section = element(document, "section", "plan-section")?;
    section.append_child(&text_el(document, "h2", "", title)?.into())?;
    Ok(section)
}

fn table_shell(document: &Document, headers: &[&str]) -> Result<(Element, Element), JsValue> {
    let wrapper = element(document, "div", "table-wrapper")?;
    let table = element(document, "table", "")?;
    let thead = element(document, "thead", "")?;
    let tr = element(document, "tr", "")?;
    for header in headers {
        tr.append_child(&text_el(document, "th", "", header)?.into())?;
    }
    thead.append_child(&tr)?;
    table.append_child(&thead)?;

    let tbody = element(document, "tbody", "")?;
    table.append_child(&tbody)?;
    wrapper.append_child(&table)?;
    Ok((wrapper, tbody))
}

fn element(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

fn text_el(document: &Document, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let el = element(document, tag, class)?;
    el.set_text_content(Some(text));
    Ok(el)
}
