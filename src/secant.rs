use crate::{error::SchumakerError, node::Node};

/// Straight line slope between two consecutive nodes together with the interval width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Secant {
    pub(crate) width: f64,
    pub(crate) slope: f64,
}

/// Computes `n - 1` secants of `n` nodes. Nodes have to be strictly increasing in x.
pub(crate) fn secants(nodes: &[Node]) -> Result<Vec<Secant>, SchumakerError> {
    if nodes.len() < 2 {
        return Err(SchumakerError::TooFewPoints { got: nodes.len() });
    }

    nodes
        .windows(2)
        .enumerate()
        .map(|(i, w)| {
            let width = w[1].x - w[0].x;
            if !(width > 0.0) {
                return Err(SchumakerError::DegenerateInput {
                    index: i + 1,
                    previous: w[0].x,
                    current: w[1].x,
                });
            }

            let slope = (w[1].y - w[0].y) / width;
            if !slope.is_finite() || !width.is_finite() {
                return Err(SchumakerError::NumericOverflow { stage: "secant", index: i });
            }
            Ok(Secant { width, slope })
        })
        .collect()
}

/// True only when one value is strictly positive and the other strictly negative.
pub(crate) fn opposite_signs(a: f64, b: f64) -> bool {
    (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0)
}
