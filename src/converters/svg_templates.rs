//! SVG slur template conversion
//!
//! Finds the `path` elements of an SVG document whose class marks them as
//! slur templates (`shortSlurTemplate`, `longSlurTemplate`) and replaces each
//! one, in place, with a filled `<path class="slur">` outline. Everything
//! else in the document is streamed through untouched.

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use serde::Serialize;
use thiserror::Error;

use crate::errors::OutlineError;
use crate::models::TemplateCurve;
use crate::outline::{outline, OutlineOptions};
use crate::parse::{parse_path_data, PathDataError};

pub const SHORT_TEMPLATE_CLASS: &str = "shortSlurTemplate";
pub const LONG_TEMPLATE_CLASS: &str = "longSlurTemplate";
pub const SLUR_CLASS: &str = "slur";

/// Fatal, document-level conversion errors
#[derive(Debug, Clone, Error)]
pub enum ConversionError {
    /// The document is not well-formed XML
    #[error("XML processing failed: {0}")]
    Xml(String),

    /// The options passed by the caller are unusable
    #[error("Invalid outline options: {0}")]
    InvalidOptions(String),

    /// The rewritten document could not be turned back into text
    #[error("Converted document is not valid UTF-8: {0}")]
    Encoding(String),
}

impl From<quick_xml::Error> for ConversionError {
    fn from(err: quick_xml::Error) -> Self {
        ConversionError::Xml(err.to_string())
    }
}

/// Why a single template was left unconverted
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TemplateFailure {
    #[error("template has no 'd' attribute")]
    MissingPathData,

    #[error("template has no stroke-width attribute or style")]
    MissingStrokeWidth,

    #[error("invalid stroke width '{0}'")]
    InvalidStrokeWidth(String),

    #[error("unreadable attribute: {0}")]
    Attribute(String),

    #[error(transparent)]
    PathData(#[from] PathDataError),

    #[error(transparent)]
    Outline(#[from] OutlineError),
}

/// A template that was left in the document as it was
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedTemplate {
    /// Position among the document's templates, counting from 0
    pub index: usize,
    pub class: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub svg: String,
    pub converted: usize,
    pub skipped: Vec<SkippedTemplate>,
}

/// File name used when offering the converted document for download.
pub fn converted_file_name(file_name: &str) -> String {
    format!("converted_{}", file_name)
}

/// Replaces every slur template of `svg` with its outline.
///
/// Templates that cannot be converted are kept unchanged and listed in the
/// report; only malformed XML or bad options fail the whole document.
pub fn convert_slur_templates(
    svg: &str,
    options: &OutlineOptions,
) -> Result<ConversionReport, ConversionError> {
    options.validate().map_err(ConversionError::InvalidOptions)?;

    let mut reader = Reader::from_str(svg);
    let mut writer = Writer::new(Vec::with_capacity(svg.len()));
    let mut converted = 0;
    let mut skipped = Vec::new();
    let mut template_index = 0;
    // Elements still open; the reader does not report them at the end.
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Eof if depth > 0 => {
                return Err(ConversionError::Xml(
                    "unclosed element at end of document".to_string(),
                ))
            }
            Event::Eof => break,
            Event::Empty(element) => match template_class(&element)? {
                Some(class) => {
                    let index = template_index;
                    template_index += 1;
                    match convert_template(&element, &class, options) {
                        Ok(slur) => {
                            writer.write_event(Event::Empty(slur))?;
                            converted += 1;
                        }
                        Err(failure) => {
                            skipped.push(skip(index, class, &failure));
                            writer.write_event(Event::Empty(element))?;
                        }
                    }
                }
                None => writer.write_event(Event::Empty(element))?,
            },
            Event::Start(element) => match template_class(&element)? {
                Some(class) => {
                    let index = template_index;
                    template_index += 1;
                    match convert_template(&element, &class, options) {
                        Ok(slur) => {
                            // The template's children (titles, metadata) go
                            // with it.
                            let end = element.to_end().into_owned();
                            reader.read_to_end(end.name())?;
                            writer.write_event(Event::Empty(slur))?;
                            converted += 1;
                        }
                        Err(failure) => {
                            skipped.push(skip(index, class, &failure));
                            depth += 1;
                            writer.write_event(Event::Start(element))?;
                        }
                    }
                }
                None => {
                    depth += 1;
                    writer.write_event(Event::Start(element))?
                }
            },
            Event::End(element) => {
                depth = depth.saturating_sub(1);
                writer.write_event(Event::End(element))?
            }
            event => writer.write_event(event)?,
        }
    }

    let svg = String::from_utf8(writer.into_inner())
        .map_err(|e| ConversionError::Encoding(e.to_string()))?;

    log::info!(
        "slur templates: {} converted, {} skipped",
        converted,
        skipped.len()
    );

    Ok(ConversionReport { svg, converted, skipped })
}

fn skip(index: usize, class: String, failure: &TemplateFailure) -> SkippedTemplate {
    log::warn!("Skipping slur template {} ({}): {}", index, class, failure);
    SkippedTemplate {
        index,
        class,
        reason: failure.to_string(),
    }
}

/// The template class of `element`, if it is a slur template path.
fn template_class(element: &BytesStart) -> Result<Option<String>, ConversionError> {
    if element.local_name().as_ref() != b"path" {
        return Ok(None);
    }
    let Some(classes) = attribute_value(element, "class")? else {
        return Ok(None);
    };

    Ok(classes
        .split_whitespace()
        .find(|class| *class == SHORT_TEMPLATE_CLASS || *class == LONG_TEMPLATE_CLASS)
        .map(str::to_string))
}

fn convert_template(
    element: &BytesStart,
    class: &str,
    options: &OutlineOptions,
) -> Result<BytesStart<'static>, TemplateFailure> {
    let d = attribute_value(element, "d")
        .map_err(|e| TemplateFailure::Attribute(e.to_string()))?
        .ok_or(TemplateFailure::MissingPathData)?;
    let stroke_width = stroke_width(element)?;

    let pairs = parse_path_data(&d)?;
    let template = TemplateCurve::from_pairs(&pairs, stroke_width)?;
    if template.has_tangents() != (class == LONG_TEMPLATE_CLASS) {
        log::debug!(
            "template marked '{}' has {} tangent points; using the matching algorithm",
            class,
            template.tangents().len()
        );
    }

    let contour = outline(&template, options)?;

    let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
    let mut slur = BytesStart::new(name);
    slur.push_attribute(("d", contour.to_path_data().as_str()));
    slur.push_attribute(("class", SLUR_CLASS));
    Ok(slur)
}

/// Stroke width from the `stroke-width` attribute, falling back to the
/// inline `style` declaration.
fn stroke_width(element: &BytesStart) -> Result<f64, TemplateFailure> {
    let attribute = |name: &str| {
        attribute_value(element, name).map_err(|e| TemplateFailure::Attribute(e.to_string()))
    };

    let raw = match attribute("stroke-width")? {
        Some(value) => value,
        None => attribute("style")?
            .as_deref()
            .and_then(style_stroke_width)
            .ok_or(TemplateFailure::MissingStrokeWidth)?,
    };

    parse_length(&raw).ok_or(TemplateFailure::InvalidStrokeWidth(raw))
}

fn style_stroke_width(style: &str) -> Option<String> {
    style.split(';').find_map(|declaration| {
        let (property, value) = declaration.split_once(':')?;
        (property.trim() == "stroke-width").then(|| value.trim().to_string())
    })
}

fn parse_length(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    number.parse::<f64>().ok()
}

fn attribute_value(element: &BytesStart, name: &str) -> Result<Option<String>, quick_xml::Error> {
    match element.try_get_attribute(name)? {
        Some(attribute) => Ok(Some(attribute.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}
