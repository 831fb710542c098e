//! Slur outline WASM API
//!
//! This module provides the JavaScript-facing API of the slur outline
//! converter.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, options, error handling, and logging
//! - `outline`: Template conversion operations (documents, path data, points)

pub mod helpers;
pub mod outline;

pub use outline::{
    convert_slur_templates_js, converted_file_name_js, outline_slur_path, outline_template_points,
};
