//! Slur outline operations for the WASM API
//!
//! This module exposes the template conversion to JavaScript:
//! - whole SVG documents (the "Convert Templates" action)
//! - a single template given as path data
//! - a single template given as control/point pairs

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, deserialize_options, serialize, to_js_error};
use crate::converters::convert_slur_templates;
use crate::models::{ControlPointPair, TemplateCurve};
use crate::outline::outline;
use crate::parse::parse_path_data;
use crate::{wasm_info, wasm_log, wasm_warn};

/// Convert every slur template in an SVG document
///
/// # Parameters
/// - `svg`: The SVG document as text
/// - `options_js`: Outline options object (or `undefined` for defaults)
///
/// # Returns
/// Report object `{ svg, converted, skipped: [{ index, class, reason }] }`
#[wasm_bindgen(js_name = convertSlurTemplates)]
pub fn convert_slur_templates_js(svg: &str, options_js: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("convertSlurTemplates called: {} bytes", svg.len());

    let options = deserialize_options(options_js)?;
    let report = convert_slur_templates(svg, &options)
        .map_err(|e| to_js_error("Slur template conversion failed", e))?;

    for skipped in &report.skipped {
        wasm_warn!(
            "  Template {} ({}) skipped: {}",
            skipped.index,
            skipped.class,
            skipped.reason
        );
    }
    wasm_info!(
        "convertSlurTemplates completed: {} converted, {} skipped",
        report.converted,
        report.skipped.len()
    );

    serialize(&report, "Failed to serialize conversion report")
}

/// Outline a single template given as SVG path data
///
/// # Returns
/// The outline's path data (absolute coordinates, closed)
#[wasm_bindgen(js_name = outlineSlurPath)]
pub fn outline_slur_path(d: &str, stroke_width: f64, options_js: JsValue) -> Result<String, JsValue> {
    wasm_log!("outlineSlurPath called: d='{}', stroke_width={}", d, stroke_width);

    let options = deserialize_options(options_js)?;
    let pairs = parse_path_data(d).map_err(|e| to_js_error("Invalid template path data", e))?;
    let template = TemplateCurve::from_pairs(&pairs, stroke_width)
        .map_err(|e| to_js_error("Invalid slur template", e))?;
    let contour = outline(&template, &options).map_err(|e| to_js_error("Outline failed", e))?;

    Ok(contour.to_path_data())
}

/// Outline a single template given as `[{ control, point }, ...]`
///
/// # Returns
/// Array of path commands (`MoveTo`, `CurveTo`, `Close`) with rounded
/// coordinates
#[wasm_bindgen(js_name = outlineTemplatePoints)]
pub fn outline_template_points(
    pairs_js: JsValue,
    stroke_width: f64,
    options_js: JsValue,
) -> Result<JsValue, JsValue> {
    let pairs: Vec<ControlPointPair> = deserialize(pairs_js, "Invalid template points")?;
    wasm_log!("outlineTemplatePoints called: {} pairs", pairs.len());

    let options = deserialize_options(options_js)?;
    let template = TemplateCurve::from_pairs(&pairs, stroke_width)
        .map_err(|e| to_js_error("Invalid slur template", e))?;
    let contour = outline(&template, &options).map_err(|e| to_js_error("Outline failed", e))?;

    serialize(&contour.commands, "Failed to serialize outline")
}

/// Download name for a converted document (`converted_<name>`)
#[wasm_bindgen(js_name = convertedFileName)]
pub fn converted_file_name_js(file_name: &str) -> String {
    crate::converters::converted_file_name(file_name)
}
