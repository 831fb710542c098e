//! Parsing module for slur templates
//!
//! This module contains the parsing logic for converting the textual path
//! data of a template into the ordered control/point pairs the outline
//! code works on.

pub mod path_data;

// Re-export commonly used types
pub use path_data::*;
