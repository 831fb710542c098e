//! Models module for slur outline conversion
//!
//! This module contains the template (input) and contour (output) data
//! models shared by the offsetters, the path-data parser and the SVG
//! converter.

pub mod contour;
pub mod template;

// Re-export commonly used types
pub use contour::*;
pub use template::*;
