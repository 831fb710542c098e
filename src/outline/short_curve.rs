//! Outline for templates without interior tangent points
//!
//! The offset direction comes from the chord between the two control
//! points. Two lines parallel to that chord carry the outer and inner
//! control points; each is found by intersecting the parallel with the
//! anchor's control line turned slightly outward or inward, which tapers
//! the ribbon to a point at both anchors.

use crate::errors::{OutlineError, Result};
use crate::geometry::{Line, Point};
use crate::models::{Anchor, Contour, PathCommand, ShortTemplate};

use super::OutlineOptions;

#[derive(Debug, Clone)]
pub struct ShortCurveOffsetter {
    start: Anchor,
    end: Anchor,
    half_width: f64,
    end_angle: f64,
    thinning_factor: f64,
}

impl ShortCurveOffsetter {
    pub fn new(template: &ShortTemplate, options: &OutlineOptions) -> Self {
        Self {
            start: *template.start(),
            end: *template.end(),
            half_width: template.half_width(),
            end_angle: options.end_angle_degrees,
            thinning_factor: options.thinning_factor,
        }
    }

    /// True when one anchor's control lies above its point and the other's
    /// below, i.e. the template is S-shaped.
    pub fn changes_direction(&self) -> bool {
        let start_rise = self.start.control.y - self.start.point.y;
        let end_rise = self.end.control.y - self.end.point.y;
        (start_rise < 0.0 && end_rise > 0.0) || (start_rise > 0.0 && end_rise < 0.0)
    }

    fn chord(&self) -> Line {
        Line::new(self.start.control, self.end.control)
    }

    /// Vertical distance between the chord and each of its offset copies.
    ///
    /// Dividing by the chord's cosine turns the perpendicular half width into
    /// a vertical shift; S-shaped templates are thinned so that the two
    /// boundaries do not cross.
    pub fn vertical_shift(&self) -> Result<f64> {
        // The ordering invariant keeps the chord from being vertical.
        let cos_chord = self
            .chord()
            .direction_cos()
            .filter(|cos| *cos != 0.0)
            .ok_or(OutlineError::ParallelLines { context: "vertical chord" })?;

        let shift = self.half_width / cos_chord;
        if self.changes_direction() {
            Ok(shift * self.thinning_factor)
        } else {
            Ok(shift)
        }
    }

    /// Perpendicular distance between the chord and each offset line.
    pub fn perpendicular_offset(&self) -> Result<f64> {
        let cos_chord = self.chord().direction_cos().unwrap_or(0.0);
        Ok(self.vertical_shift()? * cos_chord)
    }

    pub fn contour(&self) -> Result<Contour> {
        let y_shift = self.vertical_shift()?;
        let chord = self.chord();
        let outer = chord.translate(0.0, -y_shift);
        let inner = chord.translate(0.0, y_shift);

        let start_line = Line::new(self.start.point, self.start.control);
        let end_line = Line::new(self.end.point, self.end.control);
        let angle = self.end_angle;

        let outer_start = intersect(&outer, &start_line.rotate_end(-angle), "outer start")?;
        let outer_end = intersect(&outer, &end_line.rotate_end(angle), "outer end")?;
        let inner_start = intersect(&inner, &start_line.rotate_end(angle), "inner start")?;
        let inner_end = intersect(&inner, &end_line.rotate_end(-angle), "inner end")?;

        log::debug!(
            "short slur: y_shift={:.3}, outer=({:?}, {:?}), inner=({:?}, {:?})",
            y_shift,
            outer_start,
            outer_end,
            inner_start,
            inner_end
        );

        Ok(Contour::new(vec![
            PathCommand::MoveTo { to: self.start.point },
            PathCommand::CurveTo { c1: outer_start, c2: outer_end, to: self.end.point },
            PathCommand::CurveTo { c1: inner_end, c2: inner_start, to: self.start.point },
            PathCommand::Close,
        ]))
    }
}

fn intersect(offset: &Line, control_line: &Line, context: &'static str) -> Result<Point> {
    offset
        .intersection(control_line)
        .ok_or(OutlineError::ParallelLines { context })
}
