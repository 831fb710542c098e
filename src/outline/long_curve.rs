//! Outline for templates with interior tangent points
//!
//! Each tangent point is shifted sideways along its own local normal, so the
//! ribbon follows the curvature of every segment instead of one global
//! chord. The upper boundary runs start to end, the lower boundary end to
//! start, and the two meet in a single joint knot at the end anchor.

use crate::errors::{OutlineError, Result};
use crate::geometry::Point;
use crate::models::{Anchor, Contour, Knot, LongTemplate, TangentPoint};

use super::OutlineOptions;

/// Two anchors and at least one tangent point.
const MIN_TEMPLATE_POINTS: usize = 3;

#[derive(Debug, Clone)]
pub struct LongCurveOffsetter {
    start: Anchor,
    end: Anchor,
    tangents: Vec<TangentPoint>,
    half_width: f64,
    end_angle: f64,
}

impl LongCurveOffsetter {
    pub fn new(template: &LongTemplate, options: &OutlineOptions) -> Self {
        Self {
            start: *template.start(),
            end: *template.end(),
            tangents: template.tangents().to_vec(),
            half_width: template.half_width(),
            end_angle: options.end_angle_degrees,
        }
    }

    /// Boundary read from start to end, shifted towards -y for a
    /// left-to-right curve.
    pub fn upper_boundary(&self) -> Result<Vec<Knot>> {
        let mut knots = self.boundary(-self.half_width)?;
        self.taper(&mut knots);
        Ok(knots)
    }

    /// Boundary read from end to start, shifted towards +y for a
    /// left-to-right curve.
    pub fn lower_boundary(&self) -> Result<Vec<Knot>> {
        let mut knots: Vec<Knot> = self
            .boundary(self.half_width)?
            .iter()
            .rev()
            .map(Knot::reversed)
            .collect();
        self.taper(&mut knots);
        Ok(knots)
    }

    /// Upper and lower boundaries joined at the end anchor.
    pub fn joined_knots(&self) -> Result<Vec<Knot>> {
        // Without a tangent the two boundaries collapse onto the chord.
        if self.tangents.is_empty() {
            return Err(OutlineError::TooFewPoints { found: 2, required: MIN_TEMPLATE_POINTS });
        }

        let upper = self.upper_boundary()?;
        let lower = self.lower_boundary()?;

        let too_few = OutlineError::TooFewPoints {
            found: self.tangents.len() + 2,
            required: MIN_TEMPLATE_POINTS,
        };
        let (upper_end, upper_rest) = upper.split_last().ok_or(too_few.clone())?;
        let (lower_end, lower_rest) = lower.split_first().ok_or(too_few)?;

        let joint = Knot::new(upper_end.control_in, upper_end.point, lower_end.control_out);

        let mut knots = Vec::with_capacity(upper.len() + lower.len() - 1);
        knots.extend_from_slice(upper_rest);
        knots.push(joint);
        knots.extend_from_slice(lower_rest);
        Ok(knots)
    }

    pub fn contour(&self) -> Result<Contour> {
        let knots = self.joined_knots()?;
        log::debug!(
            "long slur: {} tangent points, {} joined knots",
            self.tangents.len(),
            knots.len()
        );
        Contour::from_knots(&knots)
    }

    /// Start anchor, every tangent shifted by `delta` along its normal, end
    /// anchor.
    fn boundary(&self, delta: f64) -> Result<Vec<Knot>> {
        let mut knots = Vec::with_capacity(self.tangents.len() + 2);
        knots.push(Knot::new(self.start.point, self.start.point, self.start.control));

        for (index, tangent) in self.tangents.iter().enumerate() {
            let normal = unit_normal(tangent).ok_or(OutlineError::DegenerateTangent { index })?;
            let knot = Knot::new(tangent.control_in, tangent.point, tangent.control_out());
            knots.push(knot.translate(normal.x * delta, normal.y * delta));
        }

        knots.push(Knot::new(self.end.control, self.end.point, self.end.point));
        Ok(knots)
    }

    /// Turns the first control outward and the last one back, about their
    /// anchors, so the ribbon narrows into the caps.
    fn taper(&self, knots: &mut [Knot]) {
        if let Some(first) = knots.first_mut() {
            first.control_out = first.control_out.rotate(first.point, -self.end_angle);
        }
        if let Some(last) = knots.last_mut() {
            last.control_in = last.control_in.rotate(last.point, self.end_angle);
        }
    }
}

/// Unit vector perpendicular to the tangent's incoming direction.
fn unit_normal(tangent: &TangentPoint) -> Option<Point> {
    let dx = tangent.point.x - tangent.control_in.x;
    let dy = tangent.point.y - tangent.control_in.y;
    let length = dx.hypot(dy);
    if length == 0.0 {
        return None;
    }
    Some(Point::new(-dy / length, dx / length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TemplateCurve;
    use approx::assert_abs_diff_eq;

    fn long_template(tangents: Vec<TangentPoint>, stroke_width: f64) -> LongTemplate {
        let start = Anchor::new(Point::new(0.0, 0.0), Point::new(10.0, -20.0));
        let end = Anchor::new(Point::new(100.0, 0.0), Point::new(90.0, -20.0));
        match TemplateCurve::new(start, end, tangents, stroke_width).unwrap() {
            TemplateCurve::Long(long) => long,
            other => panic!("expected a long template, got {:?}", other),
        }
    }

    fn one_tangent() -> LongTemplate {
        long_template(
            vec![TangentPoint::new(Point::new(50.0, -30.0), Point::new(40.0, -30.0))],
            4.0,
        )
    }

    #[test]
    fn tangent_is_shifted_along_local_normal() {
        let offsetter = LongCurveOffsetter::new(&one_tangent(), &OutlineOptions::default());

        let upper = offsetter.upper_boundary().unwrap();
        assert_eq!(upper.len(), 3);
        assert!(upper[1].point.approx_eq(Point::new(50.0, -32.0), 1e-12));
        assert!(upper[1].control_in.approx_eq(Point::new(40.0, -32.0), 1e-12));
        assert!(upper[1].control_out.approx_eq(Point::new(60.0, -32.0), 1e-12));

        let lower = offsetter.lower_boundary().unwrap();
        assert!(lower[1].point.approx_eq(Point::new(50.0, -28.0), 1e-12));
        // Read end to start, so the incoming control is on the right.
        assert!(lower[1].control_in.approx_eq(Point::new(60.0, -28.0), 1e-12));
    }

    #[test]
    fn sloped_tangent_normal_is_perpendicular() {
        let template = long_template(
            vec![TangentPoint::new(Point::new(50.0, -30.0), Point::new(47.0, -34.0))],
            10.0,
        );
        let upper = LongCurveOffsetter::new(&template, &OutlineOptions::default())
            .upper_boundary()
            .unwrap();

        // Direction (3, 4)/5, normal (-4, 3)/5, shifted by -5.
        assert_abs_diff_eq!(upper[1].point.x, 54.0, epsilon = 1e-12);
        assert_abs_diff_eq!(upper[1].point.y, -33.0, epsilon = 1e-12);
    }

    #[test]
    fn end_controls_are_tapered() {
        let offsetter = LongCurveOffsetter::new(&one_tangent(), &OutlineOptions::default());
        let upper = offsetter.upper_boundary().unwrap();

        let start = Point::new(0.0, 0.0);
        let expected = Point::new(10.0, -20.0).rotate(start, -5.0);
        assert!(upper[0].control_out.approx_eq(expected, 1e-12));

        let end = Point::new(100.0, 0.0);
        let expected = Point::new(90.0, -20.0).rotate(end, 5.0);
        assert!(upper[2].control_in.approx_eq(expected, 1e-12));
    }

    #[test]
    fn joint_merges_both_end_controls() {
        let offsetter = LongCurveOffsetter::new(&one_tangent(), &OutlineOptions::default());
        let knots = offsetter.joined_knots().unwrap();

        // start, tangent (upper), joint, tangent (lower), start
        assert_eq!(knots.len(), 5);
        let end = Point::new(100.0, 0.0);
        let joint = knots[2];
        assert_eq!(joint.point, end);
        assert!(joint
            .control_in
            .approx_eq(Point::new(90.0, -20.0).rotate(end, 5.0), 1e-12));
        assert!(joint
            .control_out
            .approx_eq(Point::new(90.0, -20.0).rotate(end, -5.0), 1e-12));
        assert_eq!(knots[4].point, Point::new(0.0, 0.0));
    }

    #[test]
    fn curve_count_grows_with_tangents() {
        for n in 1..5 {
            let tangents = (0..n)
                .map(|i| {
                    let x = 20.0 + 60.0 * i as f64 / n as f64;
                    TangentPoint::new(Point::new(x, -30.0), Point::new(x - 5.0, -30.0))
                })
                .collect();
            let contour = LongCurveOffsetter::new(&long_template(tangents, 4.0), &OutlineOptions::default())
                .contour()
                .unwrap();
            assert_eq!(contour.curve_count(), 2 * (n + 1));
            assert!(contour.is_closed());
        }
    }

    #[test]
    fn no_tangents_is_too_few_points() {
        let mut offsetter = LongCurveOffsetter::new(&one_tangent(), &OutlineOptions::default());
        offsetter.tangents.clear();

        let expected = OutlineError::TooFewPoints { found: 2, required: 3 };
        assert_eq!(offsetter.joined_knots().unwrap_err(), expected);
        assert_eq!(offsetter.contour().unwrap_err(), expected);
    }

    #[test]
    fn tangent_without_direction_is_degenerate() {
        let template = long_template(
            vec![TangentPoint::new(Point::new(50.0, -30.0), Point::new(50.0, -30.0))],
            4.0,
        );
        let err = LongCurveOffsetter::new(&template, &OutlineOptions::default())
            .contour()
            .unwrap_err();
        assert_eq!(err, OutlineError::DegenerateTangent { index: 0 });
    }
}
