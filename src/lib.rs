//! Slur Outline WASM Module
//!
//! Converts slur and tie templates (thin center-line Bézier curves with a
//! stroke width) into closed, tapered outline shapes that can be filled.
//!
//! - `geometry`: point and line primitives
//! - `models`: templates (input) and contours (output)
//! - `outline`: the short- and long-curve offsetters and the emitter
//! - `parse`: SVG path data to template points
//! - `converters`: whole-document SVG template replacement
//! - `api`: the JavaScript-facing functions

pub mod api;
pub mod converters;
pub mod errors;
pub mod geometry;
pub mod models;
pub mod outline;
pub mod parse;

// Re-export commonly used types
pub use errors::{OutlineError, TemplateInvariant};
pub use geometry::{Line, Point};
pub use models::*;
pub use outline::{outline, outline_with_defaults, OutlineOptions};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        crate::wasm_warn!("failed to initialize logger: {}", e);
    }

    log::info!("Slur outline WASM module initialized");
}
