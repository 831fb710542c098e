//! Outline configuration
//!
//! Options arrive from JavaScript as a plain object; any missing field takes
//! its default.

use serde::{Deserialize, Serialize};

/// Default number of decimal places in emitted coordinates.
pub const DEFAULT_PRECISION: u32 = 1;

/// Default rotation (degrees) applied to the end controls to taper the caps.
pub const DEFAULT_END_ANGLE: f64 = 5.0;

/// Default factor applied to the offset of S-shaped short templates.
pub const DEFAULT_THINNING_FACTOR: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlineOptions {
    /// Decimal places kept when rounding the contour
    #[serde(default = "default_precision")]
    pub precision: u32,

    /// Cap taper rotation in degrees
    #[serde(default = "default_end_angle")]
    pub end_angle_degrees: f64,

    /// Offset scale for templates whose direction changes (S-shapes)
    #[serde(default = "default_thinning_factor")]
    pub thinning_factor: f64,
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

fn default_end_angle() -> f64 {
    DEFAULT_END_ANGLE
}

fn default_thinning_factor() -> f64 {
    DEFAULT_THINNING_FACTOR
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            end_angle_degrees: DEFAULT_END_ANGLE,
            thinning_factor: DEFAULT_THINNING_FACTOR,
        }
    }
}

impl OutlineOptions {
    /// Checks that the options describe a usable configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.precision > 10 {
            return Err(format!("precision {} is out of range (0-10)", self.precision));
        }
        if !self.end_angle_degrees.is_finite() || self.end_angle_degrees.abs() >= 90.0 {
            return Err(format!(
                "end_angle_degrees {} must be finite and smaller than 90",
                self.end_angle_degrees
            ));
        }
        if !(self.thinning_factor > 0.0 && self.thinning_factor <= 1.0) {
            return Err(format!(
                "thinning_factor {} must be in (0, 1]",
                self.thinning_factor
            ));
        }
        Ok(())
    }
}
