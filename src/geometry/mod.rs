//! 2D geometry primitives
//!
//! Points and lines used by the outline offsetters. Both are immutable value
//! types; see [`Point`] and [`Line`].

pub mod line;
pub mod point;

pub use line::Line;
pub use point::Point;
