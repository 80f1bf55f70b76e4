use crate::{error::SchumakerError, resolver::SubInterval};

/// One quadratic segment `a + b (x - t) + c (x - t)^2` of the spline, anchored at its left knot `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    anchor: f64,
    coefficients: [f64; 3],
}

impl Piece {

    pub fn new(anchor: f64, a: f64, b: f64, c: f64) -> Self {
        Piece { anchor, coefficients: [a, b, c] }
    }

    pub fn anchor(&self) -> f64 {
        self.anchor
    }

    /// `[a, b, c]`
    pub fn coefficients(&self) -> [f64; 3] {
        self.coefficients
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let [a, b, c] = self.coefficients;
        let dx = x - self.anchor;
        (c * dx + b) * dx + a
    }

    pub fn derivative(&self, x: f64) -> f64 {
        let [_, b, c] = self.coefficients;
        2.0 * c * (x - self.anchor) + b
    }

    pub fn second_derivative(&self) -> f64 {
        2.0 * self.coefficients[2]
    }
}

/// Transcribes resolved sub-intervals into pieces, rejecting non-finite coefficients.
pub(crate) fn build_pieces(sub_intervals: &[SubInterval]) -> Result<Vec<Piece>, SchumakerError> {
    sub_intervals
        .iter()
        .map(|sub| {
            debug_assert!(sub.end > sub.start);
            let piece = Piece::new(sub.start, sub.value, sub.slope, sub.curvature);
            if piece.anchor.is_finite() && piece.coefficients.iter().all(|c| c.is_finite()) {
                Ok(piece)
            } else {
                Err(SchumakerError::NumericOverflow { stage: "coefficient builder", index: sub.interval })
            }
        })
        .collect()
}
