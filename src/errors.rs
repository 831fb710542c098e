//! Error types for slur outline conversion
//!
//! Two classes of failure exist, both scoped to a single template:
//! input rejection (an [`OutlineError::IllegalTemplate`], the caller skips the
//! template and carries on) and geometric degeneracy (no valid offset exists
//! for this input; retrying cannot help).

use thiserror::Error;

/// Template invariants checked once, at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateInvariant {
    /// The start point must lie left of the end point.
    StartLeftOfEnd,
    /// The start control must lie left of the end control.
    ControlsLeftToRight,
    /// The stroke width must be a positive, finite number.
    PositiveStrokeWidth,
}

impl std::fmt::Display for TemplateInvariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            TemplateInvariant::StartLeftOfEnd => "the start point must be left of the end point",
            TemplateInvariant::ControlsLeftToRight => {
                "the start control point must be left of the end control point"
            }
            TemplateInvariant::PositiveStrokeWidth => "the stroke width must be a positive number",
        };
        f.write_str(msg)
    }
}

/// Failure converting one template into an outline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutlineError {
    /// Input rejection: the template violates an ordering invariant
    #[error("Illegal slur template: {0}")]
    IllegalTemplate(TemplateInvariant),

    /// A required line intersection does not exist
    #[error("No offset exists: {context} lines are parallel")]
    ParallelLines { context: &'static str },

    /// Too few points to build the requested curve
    #[error("Too few points: found {found}, at least {required} required")]
    TooFewPoints { found: usize, required: usize },

    /// A tangent point coincides with its control, so it has no direction
    #[error("Tangent point {index} has no direction (control equals point)")]
    DegenerateTangent { index: usize },
}

impl OutlineError {
    /// True for input rejections, false for geometric degeneracy.
    pub fn is_input_rejection(&self) -> bool {
        matches!(self, OutlineError::IllegalTemplate(_))
    }
}

pub type Result<T> = std::result::Result<T, OutlineError>;
