//! 2D point value type
//!
//! Points are plain `Copy` values. Every operation returns a new point, so a
//! point shared between an anchor and a cloned boundary sequence can never be
//! changed behind the other owner's back.

use serde::{Deserialize, Serialize};

/// A point in SVG user space (x grows to the right, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point moved by `dx`, `dy`.
    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Rotates this point about `origin` by `degrees`.
    ///
    /// Uses the standard rotation matrix. Because y grows downward in screen
    /// space, a positive angle turns the point clockwise on screen.
    #[must_use]
    pub fn rotate(self, origin: Point, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let dx = self.x - origin.x;
        let dy = self.y - origin.y;

        Self::new(
            dx * cos - dy * sin + origin.x,
            dx * sin + dy * cos + origin.y,
        )
    }

    /// Snaps both coordinates to `decimal_places` decimals.
    ///
    /// Negative zero is normalised to zero so that serialised output never
    /// contains `-0`.
    #[must_use]
    pub fn round(self, decimal_places: u32) -> Self {
        Self::new(
            round_to(self.x, decimal_places),
            round_to(self.y, decimal_places),
        )
    }

    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Point reflection of `self` through `center` (`2 * center - self`).
    #[must_use]
    pub fn reflect_through(self, center: Point) -> Self {
        Self::new(2.0 * center.x - self.x, 2.0 * center.y - self.y)
    }

    #[must_use]
    pub fn approx_eq(self, other: Point, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

fn round_to(value: f64, decimal_places: u32) -> f64 {
    let factor = 10f64.powi(decimal_places as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn translate_adds_offsets() {
        let p = Point::new(1.5, -2.0).translate(3.0, 4.0);
        assert_eq!(p, Point::new(4.5, 2.0));
    }

    #[test]
    fn rotate_quarter_turn_is_clockwise_on_screen() {
        // (10, 0) is to the right of the origin; a clockwise quarter turn on
        // screen (y down) moves it straight below the origin.
        let p = Point::new(10.0, 0.0).rotate(Point::ORIGIN, 90.0);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn rotate_about_non_origin_center() {
        let center = Point::new(5.0, 5.0);
        let p = Point::new(6.0, 5.0).rotate(center, 180.0);
        assert_abs_diff_eq!(p.x, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn round_snaps_to_decimal_places() {
        let p = Point::new(8.219_23, -20.796_1).round(1);
        assert_eq!(p, Point::new(8.2, -20.8));

        let p = Point::new(1.234_56, 9.876_54).round(3);
        assert_eq!(p, Point::new(1.235, 9.877));
    }

    #[test]
    fn round_normalises_negative_zero() {
        let p = Point::new(-0.04, -0.0).round(1);
        assert!(p.x.is_sign_positive());
        assert!(p.y.is_sign_positive());
    }

    #[test]
    fn distance_is_euclidean() {
        assert_abs_diff_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn reflect_through_center() {
        let out = Point::new(40.0, -30.0).reflect_through(Point::new(50.0, -30.0));
        assert_eq!(out, Point::new(60.0, -30.0));
    }

    proptest! {
        #[test]
        fn rotate_then_rotate_back_is_identity(
            x in -1000.0f64..1000.0,
            y in -1000.0f64..1000.0,
            ox in -1000.0f64..1000.0,
            oy in -1000.0f64..1000.0,
            degrees in -720.0f64..720.0,
        ) {
            let origin = Point::new(ox, oy);
            let p = Point::new(x, y);
            let back = p.rotate(origin, degrees).rotate(origin, -degrees);
            prop_assert!(back.approx_eq(p, 1e-6));
        }

        #[test]
        fn rounding_is_idempotent(
            x in -10_000.0f64..10_000.0,
            y in -10_000.0f64..10_000.0,
            places in 0u32..4,
        ) {
            let once = Point::new(x, y).round(places);
            prop_assert_eq!(once.round(places), once);
        }
    }
}
