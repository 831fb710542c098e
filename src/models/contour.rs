//! Outline contour model
//!
//! A contour is the closed outline produced for one template: a `MoveTo`, one
//! or more cubic `CurveTo` commands, and a final `Close`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{OutlineError, Result};
use crate::geometry::Point;

/// One drawing instruction of a contour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PathCommand {
    MoveTo { to: Point },
    CurveTo { c1: Point, c2: Point, to: Point },
    Close,
}

impl PathCommand {
    /// Applies `f` to every coordinate of the command.
    pub fn map_points(self, f: impl Fn(Point) -> Point) -> Self {
        match self {
            PathCommand::MoveTo { to } => PathCommand::MoveTo { to: f(to) },
            PathCommand::CurveTo { c1, c2, to } => PathCommand::CurveTo {
                c1: f(c1),
                c2: f(c2),
                to: f(to),
            },
            PathCommand::Close => PathCommand::Close,
        }
    }

    /// End point of the command, if it has one.
    pub fn end_point(&self) -> Option<Point> {
        match self {
            PathCommand::MoveTo { to } | PathCommand::CurveTo { to, .. } => Some(*to),
            PathCommand::Close => None,
        }
    }
}

/// A point of a boundary sequence with its incoming and outgoing controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knot {
    pub control_in: Point,
    pub point: Point,
    pub control_out: Point,
}

impl Knot {
    pub fn new(control_in: Point, point: Point, control_out: Point) -> Self {
        Self { control_in, point, control_out }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.control_in.translate(dx, dy),
            self.point.translate(dx, dy),
            self.control_out.translate(dx, dy),
        )
    }

    /// The same knot read in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self::new(self.control_out, self.point, self.control_in)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contour {
    pub commands: Vec<PathCommand>,
}

impl Contour {
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Builds a closed contour through `knots`, one curve per consecutive
    /// pair. At least two knots are needed for a single curve.
    pub fn from_knots(knots: &[Knot]) -> Result<Self> {
        let first = match knots {
            [first, _, ..] => first,
            _ => return Err(OutlineError::TooFewPoints { found: knots.len(), required: 2 }),
        };

        let mut commands = Vec::with_capacity(knots.len() + 1);
        commands.push(PathCommand::MoveTo { to: first.point });
        commands.extend(knots.windows(2).map(|pair| PathCommand::CurveTo {
            c1: pair[0].control_out,
            c2: pair[1].control_in,
            to: pair[1].point,
        }));
        commands.push(PathCommand::Close);

        Ok(Self { commands })
    }

    pub fn curve_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::CurveTo { .. }))
            .count()
    }

    pub fn first_point(&self) -> Option<Point> {
        self.commands.first().and_then(PathCommand::end_point)
    }

    /// End point of the last drawing command (the point `Close` returns from).
    pub fn last_point(&self) -> Option<Point> {
        self.commands.iter().rev().find_map(PathCommand::end_point)
    }

    /// True when the contour ends with `Close` and its last drawn point is
    /// its first point.
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
            && self.first_point().is_some()
            && self.first_point() == self.last_point()
    }

    /// All curve control and end points in drawing order, starting with the
    /// `MoveTo` point.
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::new();
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo { to } => points.push(to),
                PathCommand::CurveTo { c1, c2, to } => points.extend([c1, c2, to]),
                PathCommand::Close => {}
            }
        }
        points
    }

    /// Returns the contour with every coordinate rounded.
    pub fn round(&self, decimal_places: u32) -> Self {
        Self::new(
            self.commands
                .iter()
                .map(|c| c.map_points(|p| p.round(decimal_places)))
                .collect(),
        )
    }

    /// Serialises the contour as SVG path data in absolute coordinates,
    /// e.g. `M0,0C8.2,-24,91.8,-24,100,0C90.2,-16,9.8,-16,0,0z`.
    pub fn to_path_data(&self) -> String {
        self.commands.iter().map(PathCommand::to_string).collect()
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo { to } => write!(f, "M{},{}", to.x, to.y),
            PathCommand::CurveTo { c1, c2, to } => {
                write!(f, "C{},{},{},{},{},{}", c1.x, c1.y, c2.x, c2.y, to.x, to.y)
            }
            PathCommand::Close => f.write_str("z"),
        }
    }
}
