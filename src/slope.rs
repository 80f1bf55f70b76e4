use crate::{config::SchumakerConfig, secant::{opposite_signs, Secant}};

/// Estimates first derivative at every node from the secants of `secants.len() + 1` nodes.
///
/// Estimates never change sign against the adjacent secants, so the resolver can keep
/// the interpolant co-monotone. With a single interval both ends get the secant itself.
pub(crate) fn estimate_slopes(secants: &[Secant], config: &SchumakerConfig) -> Vec<f64> {
    let n = secants.len() + 1;
    if n == 2 {
        return vec![secants[0].slope, secants[0].slope];
    }

    let mut slopes = vec![0.0; n];
    for i in 1..n - 1 {
        slopes[i] = interior_slope(&secants[i - 1], &secants[i], config.interior_slope_limit);
    }
    slopes[0] = boundary_slope(&secants[0], &secants[1], config.boundary_slope_limit);
    slopes[n - 1] = boundary_slope(&secants[n - 2], &secants[n - 3], config.boundary_slope_limit);

    log::trace!("estimated nodal slopes: {:?}", slopes);
    slopes
}

/// Width weighted blend of both secants; zero at local extrema and next to flat intervals.
fn interior_slope(left: &Secant, right: &Secant, limit: f64) -> f64 {
    if left.slope == 0.0 || right.slope == 0.0 || opposite_signs(left.slope, right.slope) {
        return 0.0;
    }

    let blended = (left.width * right.slope + right.width * left.slope) / (left.width + right.width);
    let cap = limit * left.slope.abs().min(right.slope.abs());
    if blended.abs() > cap {
        cap.copysign(blended)
    } else {
        blended
    }
}

/// One sided three point estimate, replaced by the `near` secant when it points
/// the other way or is steeper than `limit` times the secant.
fn boundary_slope(near: &Secant, far: &Secant, limit: f64) -> f64 {
    let extrapolated = ((2.0 * near.width + far.width) * near.slope - near.width * far.slope)
        / (near.width + far.width);

    if opposite_signs(extrapolated, near.slope) || extrapolated.abs() > limit * near.slope.abs() {
        near.slope
    } else {
        extrapolated
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    fn secant(width: f64, slope: f64) -> Secant {
        Secant { width, slope }
    }

    #[test]
    fn two_nodes_use_secant() {
        let slopes = estimate_slopes(&[secant(2.0, 0.75)], &SchumakerConfig::default());

        assert_eq!(vec![0.75, 0.75], slopes);
    }

    #[test]
    fn interior_blend() {
        let eps = 1e-12;
        // (1 * 2 + 3 * 1) / 4
        assert_approx_eq!(1.25, interior_slope(&secant(1.0, 1.0), &secant(3.0, 2.0), 2.0), eps);
        assert_approx_eq!(-1.25, interior_slope(&secant(1.0, -1.0), &secant(3.0, -2.0), 2.0), eps);
    }

    #[test]
    fn interior_cap() {
        let eps = 1e-12;
        assert_approx_eq!(2.0, interior_slope(&secant(1.0, 1.0), &secant(1.0, 10.0), 2.0), eps);
        assert_approx_eq!(-2.0, interior_slope(&secant(1.0, -10.0), &secant(1.0, -1.0), 2.0), eps);
    }

    #[test]
    fn interior_extremum_and_flat() {
        assert_eq!(0.0, interior_slope(&secant(1.0, 1.0), &secant(1.0, -1.0), 2.0));
        assert_eq!(0.0, interior_slope(&secant(1.0, 0.0), &secant(1.0, 3.0), 2.0));
        assert_eq!(0.0, interior_slope(&secant(1.0, 0.0), &secant(1.0, 0.0), 2.0));
    }

    #[test]
    fn boundary_extrapolation() {
        let eps = 1e-12;
        assert_approx_eq!(0.5, boundary_slope(&secant(1.0, 1.0), &secant(1.0, 2.0), 3.0), eps);
        // exactly at the limit is kept
        assert_approx_eq!(6.0, boundary_slope(&secant(1.0, 2.0), &secant(1.0, -6.0), 3.0), eps);
    }

    #[test]
    fn boundary_clamped_to_secant() {
        let eps = 1e-12;
        // sign disagrees with the secant
        assert_approx_eq!(1.0, boundary_slope(&secant(1.0, 1.0), &secant(1.0, 5.0), 3.0), eps);
        // steeper than three times the secant
        assert_approx_eq!(2.0, boundary_slope(&secant(1.0, 2.0), &secant(1.0, -8.0), 3.0), eps);
        // flat end interval
        assert_eq!(0.0, boundary_slope(&secant(1.0, 0.0), &secant(1.0, 4.0), 3.0));
    }

    #[test]
    fn full_estimate() {
        let eps = 1e-12;
        let secants = vec![secant(1.0, 1.0), secant(1.0, 2.0), secant(1.0, -1.0)];

        let slopes = estimate_slopes(&secants, &SchumakerConfig::default());

        assert_eq!(4, slopes.len());
        assert_approx_eq!(0.5, slopes[0], eps);
        assert_approx_eq!(1.5, slopes[1], eps);
        assert_eq!(0.0, slopes[2]);
        // (3 * -1 - 2) / 2, still within three times the last secant
        assert_approx_eq!(-2.5, slopes[3], eps);
    }
}
