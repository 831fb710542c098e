//! Slur outline generation
//!
//! Turns a validated [`TemplateCurve`] into a closed, rounded [`Contour`].
//! Short templates (no interior tangent points) offset along the chord
//! between their controls; long templates offset each tangent point along
//! its own normal. The choice was made when the template was built, so this
//! module dispatches on the template variant exactly once.

pub mod emitter;
pub mod long_curve;
pub mod options;
pub mod short_curve;

pub use emitter::ContourEmitter;
pub use long_curve::LongCurveOffsetter;
pub use options::OutlineOptions;
pub use short_curve::ShortCurveOffsetter;

use crate::errors::Result;
use crate::models::{Contour, TemplateCurve};

/// Converts one template into its rounded outline contour.
pub fn outline(template: &TemplateCurve, options: &OutlineOptions) -> Result<Contour> {
    let contour = match template {
        TemplateCurve::Short(short) => ShortCurveOffsetter::new(short, options).contour()?,
        TemplateCurve::Long(long) => LongCurveOffsetter::new(long, options).contour()?,
    };
    Ok(ContourEmitter::new(options.precision).emit(&contour))
}

pub fn outline_with_defaults(template: &TemplateCurve) -> Result<Contour> {
    outline(template, &OutlineOptions::default())
}
