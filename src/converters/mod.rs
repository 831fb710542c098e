//! Document converters
//!
//! This module contains the converters that find slur templates in a host
//! document and replace them with their outlines.

pub mod svg_templates;

// Re-export for convenience
pub use svg_templates::{
    convert_slur_templates,
    converted_file_name,
    ConversionError,
    ConversionReport,
    SkippedTemplate,
    TemplateFailure,
};
