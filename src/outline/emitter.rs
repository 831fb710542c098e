//! Contour emitter
//!
//! Last step of every conversion: snaps all coordinates to a fixed number of
//! decimals so that output is stable and compact. Does no geometry.

use crate::models::{Contour, PathCommand};

use super::options::DEFAULT_PRECISION;

#[derive(Debug, Clone, Copy)]
pub struct ContourEmitter {
    precision: u32,
}

impl Default for ContourEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl ContourEmitter {
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Rounded copy of `contour`.
    pub fn emit(&self, contour: &Contour) -> Contour {
        contour.round(self.precision)
    }

    /// Rounded instruction list, ready for a serializer.
    pub fn emit_commands(&self, contour: &Contour) -> Vec<PathCommand> {
        self.emit(contour).commands
    }
}
