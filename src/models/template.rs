//! Slur template model
//!
//! A template is the thin center-line of a slur: a start anchor, an end
//! anchor, zero or more smooth interior points, and the stroke width the
//! outline should have. Whether the curve is "short" (no interior points) or
//! "long" is decided once, when the template is built.

use serde::{Deserialize, Serialize};

use crate::errors::{OutlineError, Result, TemplateInvariant};
use crate::geometry::Point;

/// One `{control, point}` pair of the external input contract.
///
/// For the first pair `control` is the start anchor's outgoing control; for
/// every later pair it is the control leading into `point`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPointPair {
    pub control: Point,
    pub point: Point,
}

impl ControlPointPair {
    pub fn new(control: Point, point: Point) -> Self {
        Self { control, point }
    }
}

/// Curve endpoint with the control point that sets its tangent direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub point: Point,
    pub control: Point,
}

impl Anchor {
    pub fn new(point: Point, control: Point) -> Self {
        Self { point, control }
    }
}

/// Interior smooth point of a long template
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TangentPoint {
    pub point: Point,
    pub control_in: Point,
}

impl TangentPoint {
    pub fn new(point: Point, control_in: Point) -> Self {
        Self { point, control_in }
    }

    /// The outgoing control, collinear with `control_in` through `point`.
    pub fn control_out(&self) -> Point {
        self.control_in.reflect_through(self.point)
    }
}

/// Two-anchor template
///
/// Only [`TemplateCurve::new`] builds one, so a `ShortTemplate` always
/// satisfies the ordering and stroke-width invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortTemplate {
    start: Anchor,
    end: Anchor,
    stroke_width: f64,
}

impl ShortTemplate {
    pub fn start(&self) -> &Anchor {
        &self.start
    }

    pub fn end(&self) -> &Anchor {
        &self.end
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn half_width(&self) -> f64 {
        self.stroke_width / 2.0
    }
}

/// Template with at least one interior tangent point
///
/// Built by [`TemplateCurve::new`] only; `tangents` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct LongTemplate {
    start: Anchor,
    end: Anchor,
    tangents: Vec<TangentPoint>,
    stroke_width: f64,
}

impl LongTemplate {
    pub fn start(&self) -> &Anchor {
        &self.start
    }

    pub fn end(&self) -> &Anchor {
        &self.end
    }

    pub fn tangents(&self) -> &[TangentPoint] {
        &self.tangents
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn half_width(&self) -> f64 {
        self.stroke_width / 2.0
    }
}

/// A validated slur template
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateCurve {
    Short(ShortTemplate),
    Long(LongTemplate),
}

impl TemplateCurve {
    /// Validates the template and picks the short or long variant.
    pub fn new(
        start: Anchor,
        end: Anchor,
        tangents: Vec<TangentPoint>,
        stroke_width: f64,
    ) -> Result<Self> {
        if start.point.x >= end.point.x {
            return Err(OutlineError::IllegalTemplate(TemplateInvariant::StartLeftOfEnd));
        }
        if start.control.x >= end.control.x {
            return Err(OutlineError::IllegalTemplate(TemplateInvariant::ControlsLeftToRight));
        }
        if !(stroke_width.is_finite() && stroke_width > 0.0) {
            return Err(OutlineError::IllegalTemplate(TemplateInvariant::PositiveStrokeWidth));
        }

        if tangents.is_empty() {
            Ok(TemplateCurve::Short(ShortTemplate { start, end, stroke_width }))
        } else {
            Ok(TemplateCurve::Long(LongTemplate { start, end, tangents, stroke_width }))
        }
    }

    /// Builds a template from the ordered input pairs.
    ///
    /// The first pair is the start anchor, the last the end anchor, and any
    /// pairs in between are tangent points.
    pub fn from_pairs(pairs: &[ControlPointPair], stroke_width: f64) -> Result<Self> {
        let (first, rest) = pairs
            .split_first()
            .ok_or(OutlineError::TooFewPoints { found: 0, required: 2 })?;
        let (last, interior) = rest
            .split_last()
            .ok_or(OutlineError::TooFewPoints { found: 1, required: 2 })?;

        let start = Anchor::new(first.point, first.control);
        let end = Anchor::new(last.point, last.control);
        let tangents = interior
            .iter()
            .map(|pair| TangentPoint::new(pair.point, pair.control))
            .collect();

        Self::new(start, end, tangents, stroke_width)
    }

    pub fn has_tangents(&self) -> bool {
        matches!(self, TemplateCurve::Long(_))
    }

    pub fn start(&self) -> &Anchor {
        match self {
            TemplateCurve::Short(t) => t.start(),
            TemplateCurve::Long(t) => t.start(),
        }
    }

    pub fn end(&self) -> &Anchor {
        match self {
            TemplateCurve::Short(t) => t.end(),
            TemplateCurve::Long(t) => t.end(),
        }
    }

    pub fn tangents(&self) -> &[TangentPoint] {
        match self {
            TemplateCurve::Short(_) => &[],
            TemplateCurve::Long(t) => t.tangents(),
        }
    }

    pub fn stroke_width(&self) -> f64 {
        match self {
            TemplateCurve::Short(t) => t.stroke_width(),
            TemplateCurve::Long(t) => t.stroke_width(),
        }
    }

    pub fn half_width(&self) -> f64 {
        self.stroke_width() / 2.0
    }
}
