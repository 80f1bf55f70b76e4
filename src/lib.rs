//! Shape preserving quadratic spline interpolation (Schumaker spline).
//! Result is co-monotone and co-convex with the data: where nodes increase, decrease or bend
//! one way, so does the spline, without overshoots between nodes.
//!
//! Every interval gets one quadratic piece, or two when a knot has to be inserted to match
//! both end slopes. Slopes can be given with the data (Hermite) or estimated (Lagrangian).
//!
//! # Example
//! ```
//! use schumaker_spline::{schumaker_spline, ReturnType};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let x = [0.0, 1.0, 3.0, 4.0, 6.0];
//! let y = [0.0, 0.5, 0.6, 1.0, 1.1];
//!
//! let (knots, coefficients) = schumaker_spline(&x, &y, None, ReturnType::Arrays)
//!     .unwrap()
//!     .into_arrays()
//!     .unwrap();
//! assert!(knots.len() >= x.len());
//! assert_eq!(coefficients.shape(), (knots.len() - 1, 3));
//!
//! let piecewise = schumaker_spline(&x, &y, None, ReturnType::Symbolic)
//!     .unwrap()
//!     .into_piecewise()
//!     .unwrap();
//! assert_approx_eq!(0.6, piecewise.subs(3.0).unwrap(), 1e-12);
//! ```

mod config;
mod error;
mod node;
mod output;
mod polynomial;
mod resolver;
mod secant;
mod slope;
mod spline;

pub use config::{
    SchumakerConfig, DEFAULT_BOUNDARY_SLOPE_LIMIT, DEFAULT_INTERIOR_SLOPE_LIMIT, DEFAULT_MIN_SPLIT_FRACTION,
    DEFAULT_NO_SPLIT_TOLERANCE,
};
pub use error::SchumakerError;
pub use node::Node;
pub use output::{Case, Piecewise, QuadraticExpr, ReturnType, SplineOutput};
pub use polynomial::Piece;
pub use spline::{SchumakerSpline, SlopeMode};

/// Builds Schumaker spline through `(x, y)` and returns it in requested representation.
/// When `s` is given, slopes are used as supplied, otherwise they are estimated.
pub fn schumaker_spline(
    x: &[f64],
    y: &[f64],
    s: Option<&[f64]>,
    return_type: ReturnType,
) -> Result<SplineOutput, SchumakerError> {
    let spline = SchumakerSpline::from_slices(x, y, s)?;
    Ok(spline.assemble(return_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_point_two_points() {
        let (knots, coefficients) = schumaker_spline(&[0.0, 1.0], &[0.0, 1.0], None, ReturnType::default())
            .unwrap()
            .into_arrays()
            .unwrap();

        assert_eq!(2, knots.len());
        assert_eq!([0.0, 1.0, 0.0], [coefficients[(0, 0)], coefficients[(0, 1)], coefficients[(0, 2)]]);
    }

    #[test]
    fn entry_point_symbolic() {
        let piecewise = schumaker_spline(&[0.0, 1.0], &[0.0, 1.0], None, "symbolic".parse().unwrap())
            .unwrap()
            .into_piecewise()
            .unwrap();

        assert_eq!("Piecewise((x, (x >= 0) & (x <= 1)))", piecewise.to_string());
    }

    #[test]
    fn entry_point_errors() {
        assert!(schumaker_spline(&[0.0], &[0.0], None, ReturnType::Arrays).unwrap_err().is_degenerate_input());
        assert!(matches!(
            schumaker_spline(&[0.0, 1.0], &[0.0], None, ReturnType::Arrays),
            Err(SchumakerError::ShapeMismatch { .. })
        ));
    }
}
