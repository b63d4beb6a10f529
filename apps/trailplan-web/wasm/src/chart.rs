//! Altitude-profile chart drawn on a 2d canvas.

use trailplan_core::plan::{ProfilePoint, ELEVATION_PROFILE};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub(crate) const CHART_WIDTH: u32 = 960;
pub(crate) const CHART_HEIGHT: u32 = 300;

const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 32.0;

/// Altitude padding above and below the data range, in meters.
const ALT_PADDING: f64 = 20.0;

const LINE_COLOR: &str = "#26734D";
const GRID_COLOR: &str = "#cccccc";
const TEXT_COLOR: &str = "#2A2A2A";

/// Maps (km, altitude) samples into canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ChartScale {
    km_max: f64,
    alt_min: f64,
    alt_max: f64,
    width: f64,
    height: f64,
}

impl ChartScale {
    pub(crate) fn from_profile(points: &[ProfilePoint], width: f64, height: f64) -> Self {
        let km_max = points.iter().map(|p| p.km).fold(0.0, f64::max);
        let lo = points
            .iter()
            .map(|p| p.altitude_m)
            .fold(f64::INFINITY, f64::min);
        let hi = points
            .iter()
            .map(|p| p.altitude_m)
            .fold(f64::NEG_INFINITY, f64::max);
        Self {
            km_max,
            alt_min: lo - ALT_PADDING,
            alt_max: hi + ALT_PADDING,
            width,
            height,
        }
    }

    pub(crate) fn x(&self, km: f64) -> f64 {
        MARGIN_LEFT + km / self.km_max * (self.width - MARGIN_LEFT - MARGIN_RIGHT)
    }

    pub(crate) fn y(&self, alt: f64) -> f64 {
        let span = self.alt_max - self.alt_min;
        self.height
            - MARGIN_BOTTOM
            - (alt - self.alt_min) / span * (self.height - MARGIN_TOP - MARGIN_BOTTOM)
    }

    fn alt_ticks(&self) -> Vec<f64> {
        // Round 50 m steps covering the padded range
        let mut ticks = Vec::new();
        let mut tick = (self.alt_min / 50.0).ceil() * 50.0;
        while tick <= self.alt_max {
            ticks.push(tick);
            tick += 50.0;
        }
        ticks
    }

    fn km_ticks(&self) -> Vec<f64> {
        let mut ticks = Vec::new();
        let mut tick = 0.0;
        while tick <= self.km_max {
            ticks.push(tick);
            tick += 20.0;
        }
        ticks
    }
}

/// Draw the course profile onto `canvas`.
pub(crate) fn draw_profile(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    canvas.set_width(CHART_WIDTH);
    canvas.set_height(CHART_HEIGHT);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
        .dyn_into()?;

    let width = CHART_WIDTH as f64;
    let height = CHART_HEIGHT as f64;
    let scale = ChartScale::from_profile(&ELEVATION_PROFILE, width, height);

    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, width, height);

    // Grid and tick labels
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);
    ctx.set_fill_style_str(TEXT_COLOR);
    ctx.set_font("12px sans-serif");

    for alt in scale.alt_ticks() {
        let y = scale.y(alt);
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();
        ctx.fill_text(&format!("{} m", alt as i64), 4.0, y + 4.0)?;
    }
    for km in scale.km_ticks() {
        let x = scale.x(km);
        ctx.begin_path();
        ctx.move_to(x, MARGIN_TOP);
        ctx.line_to(x, height - MARGIN_BOTTOM);
        ctx.stroke();
        ctx.fill_text(&format!("{} km", km as i64), x - 12.0, height - 12.0)?;
    }

    // Altitude polyline
    ctx.set_stroke_style_str(LINE_COLOR);
    ctx.set_line_width(3.0);
    ctx.begin_path();
    for (i, point) in ELEVATION_PROFILE.iter().enumerate() {
        let (x, y) = (scale.x(point.km), scale.y(point.altitude_m));
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Sample dots
    ctx.set_fill_style_str(LINE_COLOR);
    for point in ELEVATION_PROFILE {
        ctx.begin_path();
        ctx.arc(
            scale.x(point.km),
            scale.y(point.altitude_m),
            4.0,
            0.0,
            std::f64::consts::TAU,
        )?;
        ctx.fill();
    }

    // Legend
    ctx.set_fill_style_str(LINE_COLOR);
    ctx.fill_text("Altitude (m)", MARGIN_LEFT + 8.0, MARGIN_TOP + 12.0)?;

    Ok(())
}
