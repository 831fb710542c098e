//! Two-point line primitive
//!
//! A `Line` is treated as the infinite line through `a` and `b` unless an
//! operation says otherwise. Like [`Point`], it is a value type: every
//! operation returns a new line.

use serde::{Deserialize, Serialize};

use super::Point;

/// Relative tolerance below which two lines are considered parallel.
const PARALLEL_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

impl Line {
    #[must_use]
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    #[must_use]
    pub fn dx(&self) -> f64 {
        self.b.x - self.a.x
    }

    #[must_use]
    pub fn dy(&self) -> f64 {
        self.b.y - self.a.y
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// `Δy / Δx`, or `None` for a vertical line.
    #[must_use]
    pub fn slope(&self) -> Option<f64> {
        let dx = self.dx();
        if dx == 0.0 {
            None
        } else {
            Some(self.dy() / dx)
        }
    }

    /// Cosine of the angle between this line and the x axis (`Δx / length`).
    ///
    /// `None` when the line has no length.
    #[must_use]
    pub fn direction_cos(&self) -> Option<f64> {
        let length = self.length();
        if length == 0.0 {
            None
        } else {
            Some(self.dx() / length)
        }
    }

    #[must_use]
    pub fn midpoint(&self) -> Point {
        Point::new((self.a.x + self.b.x) / 2.0, (self.a.y + self.b.y) / 2.0)
    }

    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.a.translate(dx, dy), self.b.translate(dx, dy))
    }

    /// Moves the line sideways to the parallel line at distance `|delta|`.
    ///
    /// The angle is taken in (-90°, 90°], so the shift direction does not
    /// depend on which endpoint comes first. A positive `delta` moves a
    /// non-vertical line towards +y.
    #[must_use]
    pub fn move_parallel(&self, delta: f64) -> Self {
        let radians = match self.slope() {
            Some(slope) => slope.atan(),
            None => std::f64::consts::FRAC_PI_2,
        };
        let (sin, cos) = radians.sin_cos();
        self.translate(-delta * sin, delta * cos)
    }

    /// Lengthens (or shortens, for negative values) the line about its
    /// midpoint so that its total length changes by `delta_percent` percent.
    #[must_use]
    pub fn widen(&self, delta_percent: f64) -> Self {
        let mid = self.midpoint();
        let factor = 1.0 + delta_percent / 100.0;
        let stretch = |p: Point| Point::new(mid.x + (p.x - mid.x) * factor, mid.y + (p.y - mid.y) * factor);
        Self::new(stretch(self.a), stretch(self.b))
    }

    /// Translates the line so that its midpoint lands on `target`.
    #[must_use]
    pub fn shift_to_point(&self, target: Point) -> Self {
        let mid = self.midpoint();
        self.translate(target.x - mid.x, target.y - mid.y)
    }

    /// The line from `a` to `b` rotated about `a` by `degrees`.
    #[must_use]
    pub fn rotate_end(&self, degrees: f64) -> Self {
        Self::new(self.a, self.b.rotate(self.a, degrees))
    }

    /// Intersection of the two infinite lines.
    ///
    /// Each line is written as `a·x + b·y = c` and the system is solved with
    /// Cramer's rule. Returns `None` when the lines are parallel (or either
    /// line has no length). The result may lie outside both segments.
    #[must_use]
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        let (a1, b1, c1) = self.coefficients();
        let (a2, b2, c2) = other.coefficients();

        let divisor = a1 * b2 - a2 * b1;
        let scale = (a1.abs() + b1.abs()) * (a2.abs() + b2.abs());
        if divisor.abs() <= PARALLEL_TOLERANCE * scale || scale == 0.0 {
            return None;
        }

        Some(Point::new(
            (b2 * c1 - b1 * c2) / divisor,
            (a1 * c2 - a2 * c1) / divisor,
        ))
    }

    fn coefficients(&self) -> (f64, f64, f64) {
        let a = self.b.y - self.a.y;
        let b = self.a.x - self.b.x;
        let c = a * self.a.x + b * self.a.y;
        (a, b, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn line(ax: f64, ay: f64, bx: f64, by: f64) -> Line {
        Line::new(Point::new(ax, ay), Point::new(bx, by))
    }

    #[test]
    fn slope_of_vertical_line_is_none() {
        assert_eq!(line(3.0, 0.0, 3.0, 10.0).slope(), None);
        assert_eq!(line(0.0, 0.0, 4.0, 2.0).slope(), Some(0.5));
    }

    #[test]
    fn midpoint_and_translate() {
        let l = line(0.0, 0.0, 10.0, -4.0);
        assert_eq!(l.midpoint(), Point::new(5.0, -2.0));
        assert_eq!(l.translate(1.0, 1.0), line(1.0, 1.0, 11.0, -3.0));
    }

    #[test]
    fn move_parallel_keeps_direction_and_distance() {
        let l = line(0.0, 0.0, 10.0, 10.0);
        let moved = l.move_parallel(2.0);

        assert_abs_diff_eq!(moved.slope().unwrap(), 1.0, epsilon = 1e-12);
        // Perpendicular distance from the original line.
        let offset = moved.a;
        let distance = (l.dy() * offset.x - l.dx() * offset.y).abs() / l.length();
        assert_abs_diff_eq!(distance, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn move_parallel_ignores_endpoint_order() {
        let forward = line(0.0, 0.0, 10.0, 5.0).move_parallel(3.0);
        let backward = line(10.0, 5.0, 0.0, 0.0).move_parallel(3.0);
        assert!(forward.a.approx_eq(backward.b, 1e-12));
        assert!(forward.b.approx_eq(backward.a, 1e-12));
    }

    #[test]
    fn move_parallel_on_horizontal_line_moves_down_for_positive_delta() {
        let moved = line(0.0, 0.0, 10.0, 0.0).move_parallel(4.0);
        assert_eq!(moved, line(0.0, 4.0, 10.0, 4.0));
    }

    #[test]
    fn move_parallel_on_vertical_line() {
        let moved = line(0.0, 0.0, 0.0, 10.0).move_parallel(2.0);
        assert_abs_diff_eq!(moved.a.x, -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(moved.b.x, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn widen_grows_length_by_percent() {
        let l = line(0.0, 0.0, 10.0, 0.0).widen(50.0);
        assert_abs_diff_eq!(l.length(), 15.0, epsilon = 1e-12);
        assert_eq!(l.midpoint(), Point::new(5.0, 0.0));
    }

    #[test]
    fn shift_to_point_recentres() {
        let l = line(0.0, 0.0, 4.0, 2.0).shift_to_point(Point::new(10.0, 10.0));
        assert_eq!(l.midpoint(), Point::new(10.0, 10.0));
        assert_abs_diff_eq!(l.length(), line(0.0, 0.0, 4.0, 2.0).length(), epsilon = 1e-12);
    }

    #[test]
    fn intersection_extrapolates_beyond_segments() {
        let l1 = line(0.0, 0.0, 1.0, 1.0);
        let l2 = line(10.0, 0.0, 9.0, 1.0);
        let p = l1.intersection(&l2).unwrap();
        assert_abs_diff_eq!(p.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn intersection_of_parallel_lines_is_none() {
        let l1 = line(0.0, 0.0, 10.0, 5.0);
        assert_eq!(l1.intersection(&l1.move_parallel(3.0)), None);
        assert_eq!(l1.intersection(&l1), None);
    }

    #[test]
    fn intersection_with_degenerate_line_is_none() {
        let point_line = line(1.0, 1.0, 1.0, 1.0);
        assert_eq!(point_line.intersection(&line(0.0, 0.0, 5.0, 3.0)), None);
    }

    proptest! {
        #[test]
        fn intersection_is_symmetric(
            ax in -100.0f64..100.0, ay in -100.0f64..100.0,
            bx in -100.0f64..100.0, by in -100.0f64..100.0,
            cx in -100.0f64..100.0, cy in -100.0f64..100.0,
            dx in -100.0f64..100.0, dy in -100.0f64..100.0,
        ) {
            let l1 = line(ax, ay, bx, by);
            let l2 = line(cx, cy, dx, dy);
            match (l1.intersection(&l2), l2.intersection(&l1)) {
                (Some(p), Some(q)) => prop_assert!(p.approx_eq(q, 1e-6 * (1.0 + p.x.abs() + p.y.abs()))),
                (None, None) => {}
                (p, q) => prop_assert!(false, "asymmetric result {:?} vs {:?}", p, q),
            }
        }
    }
}
