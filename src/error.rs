use thiserror::Error;

/// Errors returned while building or evaluating a [SchumakerSpline](crate::SchumakerSpline).
///
/// Input problems are detected before any computation starts, so an error never
/// comes with a partially built spline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchumakerError {
    #[error("insufficient points: got {got}, need at least 2")]
    TooFewPoints { got: usize },

    #[error("x-values must be strictly increasing: x[{index}] = {current} does not exceed previous value {previous}")]
    DegenerateInput { index: usize, previous: f64, current: f64 },

    #[error("length mismatch: `{name}` has {got} elements, expected {expected}")]
    ShapeMismatch { name: &'static str, expected: usize, got: usize },

    #[error("non-finite value in `{name}` at index {index}")]
    NonFiniteInput { name: &'static str, index: usize },

    #[error("non-finite value produced by {stage} at interval {index}")]
    NumericOverflow { stage: &'static str, index: usize },

    #[error("evaluation point {x} out of range [{min}, {max}]")]
    OutOfRange { x: f64, min: f64, max: f64 },

    #[error("invalid configuration value for `{name}`: {value}")]
    InvalidConfig { name: &'static str, value: f64 },

    #[error("unknown return type `{given}`, expected `arrays` or `symbolic`")]
    InvalidReturnType { given: String },
}

impl SchumakerError {
    /// True for the errors caused by the shape of the x data itself
    /// (too few points, duplicated or decreasing x).
    pub fn is_degenerate_input(&self) -> bool {
        matches!(self, SchumakerError::TooFewPoints { .. } | SchumakerError::DegenerateInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_offending_index() {
        let error = SchumakerError::DegenerateInput { index: 3, previous: 2.0, current: 2.0 };
        assert!(error.to_string().contains("x[3]"));

        let error = SchumakerError::NonFiniteInput { name: "y", index: 5 };
        assert_eq!("non-finite value in `y` at index 5", error.to_string());
    }

    #[test]
    fn degenerate_family() {
        assert!(SchumakerError::TooFewPoints { got: 1 }.is_degenerate_input());
        assert!(SchumakerError::DegenerateInput { index: 1, previous: 0.0, current: 0.0 }.is_degenerate_input());
        assert!(!SchumakerError::ShapeMismatch { name: "y", expected: 2, got: 3 }.is_degenerate_input());
    }
}
