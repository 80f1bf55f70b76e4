use crate::{
    config::SchumakerConfig,
    error::SchumakerError,
    node::Node,
    secant::{opposite_signs, Secant},
};

/// Quadratic `value + slope (x - start) + curvature (x - start)^2` on `[start, end]`,
/// not yet checked for finiteness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SubInterval {
    pub(crate) start: f64,
    pub(crate) end: f64,
    pub(crate) value: f64,
    pub(crate) slope: f64,
    pub(crate) curvature: f64,
    /// Index of the original interval this one lies in.
    pub(crate) interval: usize,
}

/// Final knot sequence with one sub-interval per pair of consecutive knots.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Resolution {
    pub(crate) knots: Vec<f64>,
    pub(crate) sub_intervals: Vec<SubInterval>,
}

impl Resolution {
    pub(crate) fn inserted_knots(&self, number_of_nodes: usize) -> usize {
        self.knots.len() - number_of_nodes
    }
}

/// Decides for every original interval whether one quadratic is enough or a knot has
/// to be inserted, and emits resulting knots in increasing order.
pub(crate) fn resolve_intervals(
    nodes: &[Node],
    slopes: &[f64],
    secants: &[Secant],
    config: &SchumakerConfig,
) -> Result<Resolution, SchumakerError> {
    let number_of_intervals = secants.len();
    let mut knots = Vec::with_capacity(2 * number_of_intervals + 1);
    let mut sub_intervals = Vec::with_capacity(2 * number_of_intervals);

    for i in 0..number_of_intervals {
        knots.push(nodes[i].x);

        let left = IntervalEnd { x: nodes[i].x, y: nodes[i].y, slope: slopes[i] };
        let right = IntervalEnd { x: nodes[i + 1].x, y: nodes[i + 1].y, slope: slopes[i + 1] };

        if needs_no_split(&left, &right, &secants[i], config) {
            sub_intervals.push(single_piece(i, &left, &right, &secants[i]));
        } else {
            let (knot, first, second) = split_pieces(i, &left, &right, &secants[i], config)?;
            log::debug!("interval {}: inserted knot at {}", i, knot);
            knots.push(knot);
            sub_intervals.push(first);
            sub_intervals.push(second);
        }
    }
    knots.push(nodes[number_of_intervals].x);

    Ok(Resolution { knots, sub_intervals })
}

struct IntervalEnd {
    x: f64,
    y: f64,
    slope: f64,
}

fn needs_no_split(left: &IntervalEnd, right: &IntervalEnd, secant: &Secant, config: &SchumakerConfig) -> bool {
    let scale = 1.0_f64.max(2.0 * secant.slope.abs());
    (left.slope + right.slope - 2.0 * secant.slope).abs() <= config.no_split_tolerance * scale
}

fn single_piece(interval: usize, left: &IntervalEnd, right: &IntervalEnd, secant: &Secant) -> SubInterval {
    SubInterval {
        start: left.x,
        end: right.x,
        value: left.y,
        slope: left.slope,
        curvature: (right.slope - left.slope) / (2.0 * secant.width),
        interval,
    }
}

/// Width of the left piece. Midpoint when both end slopes deviate from the secant the
/// same way, otherwise closer to the end whose slope is nearer the secant.
fn left_width(left_slope: f64, right_slope: f64, secant: &Secant, config: &SchumakerConfig) -> f64 {
    let d1 = left_slope - secant.slope;
    let d2 = right_slope - secant.slope;

    if !opposite_signs(d1, d2) {
        return 0.5 * secant.width;
    }

    let guard = config.min_split_fraction;
    let fraction = (d2 / (d2 - d1)).clamp(guard, 1.0 - guard);
    fraction * secant.width
}

fn split_pieces(
    interval: usize,
    left: &IntervalEnd,
    right: &IntervalEnd,
    secant: &Secant,
    config: &SchumakerConfig,
) -> Result<(f64, SubInterval, SubInterval), SchumakerError> {
    let h = secant.width;
    let h1 = left_width(left.slope, right.slope, secant, config);
    let h2 = h - h1;

    let knot = left.x + h1;
    if !(knot > left.x && knot < right.x) {
        return Err(SchumakerError::NumericOverflow { stage: "knot placement", index: interval });
    }

    let knot_slope = 2.0 * secant.slope - (h1 * left.slope + h2 * right.slope) / h;
    let knot_value = left.y + h1 * (left.slope + knot_slope) / 2.0;

    let first = SubInterval {
        start: left.x,
        end: knot,
        value: left.y,
        slope: left.slope,
        curvature: (knot_slope - left.slope) / (2.0 * h1),
        interval,
    };
    let second = SubInterval {
        start: knot,
        end: right.x,
        value: knot_value,
        slope: knot_slope,
        curvature: (right.slope - knot_slope) / (2.0 * h2),
        interval,
    };
    Ok((knot, first, second))
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::secant::secants;

    fn resolve(nodes: &[Node], slopes: &[f64], config: &SchumakerConfig) -> Resolution {
        let secants = secants(nodes).unwrap();
        resolve_intervals(nodes, slopes, &secants, config).unwrap()
    }

    fn value_at_end(piece: &SubInterval) -> f64 {
        let w = piece.end - piece.start;
        piece.value + piece.slope * w + piece.curvature * w * w
    }

    fn slope_at_end(piece: &SubInterval) -> f64 {
        piece.slope + 2.0 * piece.curvature * (piece.end - piece.start)
    }

    #[test]
    fn single_piece_when_slopes_average_to_secant() {
        let eps = 1e-12;
        let nodes = vec![Node::new(0.0, 0.0), Node::new(2.0, 4.0)];

        let resolution = resolve(&nodes, &[1.0, 3.0], &SchumakerConfig::default());

        assert_eq!(vec![0.0, 2.0], resolution.knots);
        assert_eq!(1, resolution.sub_intervals.len());
        let piece = resolution.sub_intervals[0];
        assert_approx_eq!(0.0, piece.value, eps);
        assert_approx_eq!(1.0, piece.slope, eps);
        assert_approx_eq!(0.5, piece.curvature, eps);
        assert_approx_eq!(4.0, value_at_end(&piece), eps);
    }

    #[test]
    fn midpoint_split() {
        let eps = 1e-12;
        let nodes = vec![Node::new(0.0, 0.0), Node::new(1.0, 1.0)];

        let resolution = resolve(&nodes, &[2.0, 2.0], &SchumakerConfig::default());

        assert_eq!(3, resolution.knots.len());
        assert_eq!(1, resolution.inserted_knots(2));
        assert_approx_eq!(0.5, resolution.knots[1], eps);

        let first = resolution.sub_intervals[0];
        let second = resolution.sub_intervals[1];
        assert_approx_eq!(-2.0, first.curvature, eps);
        assert_approx_eq!(0.5, second.value, eps);
        assert_approx_eq!(0.0, second.slope, eps);
        assert_approx_eq!(2.0, second.curvature, eps);
        assert_approx_eq!(1.0, value_at_end(&second), eps);
        assert_approx_eq!(2.0, slope_at_end(&second), eps);
    }

    #[test]
    fn weighted_split_connects_with_secant_slope() {
        let eps = 1e-12;
        let nodes = vec![Node::new(0.0, 0.0), Node::new(1.0, 1.0)];

        let resolution = resolve(&nodes, &[0.0, 3.0], &SchumakerConfig::default());

        assert_approx_eq!(2.0 / 3.0, resolution.knots[1], eps);
        let first = resolution.sub_intervals[0];
        let second = resolution.sub_intervals[1];
        assert_approx_eq!(0.75, first.curvature, eps);
        assert_approx_eq!(1.0 / 3.0, second.value, eps);
        assert_approx_eq!(1.0, second.slope, eps);
        assert_approx_eq!(3.0, second.curvature, eps);
        assert_approx_eq!(1.0, value_at_end(&second), eps);
    }

    #[test]
    fn split_fraction_is_clamped() {
        let eps = 1e-12;
        let nodes = vec![Node::new(0.0, 0.0), Node::new(1.0, 1.0)];
        let slopes = [0.0, 1.05];

        let resolution = resolve(&nodes, &slopes, &SchumakerConfig::default());
        assert_approx_eq!(0.05 / 1.05, resolution.knots[1], eps);

        let config = SchumakerConfig::default().set_min_split_fraction(0.1).unwrap();
        let resolution = resolve(&nodes, &slopes, &config);
        assert_approx_eq!(0.1, resolution.knots[1], eps);

        let first = resolution.sub_intervals[0];
        let second = resolution.sub_intervals[1];
        assert_approx_eq!(1.055, second.slope, eps);
        assert_approx_eq!(second.value, value_at_end(&first), eps);
        assert_approx_eq!(second.slope, slope_at_end(&first), eps);
        assert_approx_eq!(1.0, value_at_end(&second), eps);
        assert_approx_eq!(1.05, slope_at_end(&second), eps);
    }

    #[test]
    fn knots_follow_nodes() {
        let nodes = vec![Node::new(0.0, 0.0), Node::new(1.0, 1.0), Node::new(3.0, 2.0), Node::new(4.0, 2.0)];

        let resolution = resolve(&nodes, &[1.0, 0.0, 0.0, 0.0], &SchumakerConfig::default());

        assert!(resolution.knots.windows(2).all(|w| w[0] < w[1]));
        for node in nodes.iter() {
            assert!(resolution.knots.contains(&node.x));
        }
        assert_eq!(resolution.knots.len() - 1, resolution.sub_intervals.len());
        assert_eq!(2, resolution.inserted_knots(nodes.len()));
    }
}
