//! Packaging of a built spline for the caller: coefficient arrays or a symbolic
//! piecewise expression over the same knots.

use std::{fmt::Display, str::FromStr};

use nalgebra::{DMatrix, DVector};

use crate::{error::SchumakerError, polynomial::Piece};

/// Representation requested from [schumaker_spline](crate::schumaker_spline).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnType {
    /// Knots vector and `(N - 1, 3)` coefficient matrix.
    #[default]
    Arrays,
    /// [Piecewise] case expression.
    Symbolic,
}

impl FromStr for ReturnType {
    type Err = SchumakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arrays" | "coeffs" => Ok(ReturnType::Arrays),
            "symbolic" | "sympy" => Ok(ReturnType::Symbolic),
            _ => Err(SchumakerError::InvalidReturnType { given: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SplineOutput {
    Arrays { knots: DVector<f64>, coefficients: DMatrix<f64> },
    Symbolic(Piecewise),
}

impl SplineOutput {
    pub fn into_arrays(self) -> Option<(DVector<f64>, DMatrix<f64>)> {
        match self {
            SplineOutput::Arrays { knots, coefficients } => Some((knots, coefficients)),
            SplineOutput::Symbolic(_) => None,
        }
    }

    pub fn into_piecewise(self) -> Option<Piecewise> {
        match self {
            SplineOutput::Symbolic(piecewise) => Some(piecewise),
            SplineOutput::Arrays { .. } => None,
        }
    }
}

/// Row `i` of the matrix holds `[a, b, c]` of the quadratic on `[knots[i], knots[i + 1]]`.
pub(crate) fn to_arrays(knots: &[f64], pieces: &[Piece]) -> (DVector<f64>, DMatrix<f64>) {
    let knots = DVector::from_column_slice(knots);
    let coefficients = DMatrix::from_fn(pieces.len(), 3, |row, column| pieces[row].coefficients()[column]);
    (knots, coefficients)
}

pub(crate) fn to_piecewise(knots: &[f64], pieces: &[Piece]) -> Piecewise {
    let last = pieces.len().saturating_sub(1);
    let cases = pieces
        .iter()
        .enumerate()
        .map(|(i, piece)| {
            let [a, b, c] = piece.coefficients();
            Case {
                expression: QuadraticExpr { a, b, c, shift: piece.anchor() },
                lower: knots[i],
                upper: knots[i + 1],
                upper_closed: i == last,
            }
        })
        .collect();
    Piecewise { cases }
}

/// `a + b (x - shift) + c (x - shift)^2` in the free variable `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticExpr {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub shift: f64,
}

impl QuadraticExpr {
    pub fn subs(&self, x: f64) -> f64 {
        let dx = x - self.shift;
        (self.c * dx + self.b) * dx + self.a
    }

    fn variable(&self) -> String {
        if self.shift == 0.0 {
            "x".to_string()
        } else if self.shift < 0.0 {
            format!("(x + {})", -self.shift)
        } else {
            format!("(x - {})", self.shift)
        }
    }
}

impl Display for QuadraticExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let variable = self.variable();
        let terms = [
            (self.a, String::new()),
            (self.b, variable.clone()),
            (self.c, format!("{}^2", variable)),
        ];

        let mut written = false;
        for (coefficient, power) in terms.iter() {
            if *coefficient == 0.0 {
                continue;
            }
            let magnitude = coefficient.abs();
            let sign = if *coefficient < 0.0 { "-" } else { "+" };
            match (written, sign) {
                (false, "-") => write!(f, "-")?,
                (false, _) => {}
                (true, _) => write!(f, " {} ", sign)?,
            }
            if power.is_empty() {
                write!(f, "{}", magnitude)?;
            } else if magnitude == 1.0 {
                write!(f, "{}", power)?;
            } else {
                write!(f, "{}*{}", magnitude, power)?;
            }
            written = true;
        }

        if !written {
            write!(f, "0")?;
        }
        Ok(())
    }
}

/// One branch of a [Piecewise]: expression valid for `lower <= x < upper`
/// (`x <= upper` when `upper_closed`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Case {
    pub expression: QuadraticExpr,
    pub lower: f64,
    pub upper: f64,
    pub upper_closed: bool,
}

impl Case {
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && (x < self.upper || (self.upper_closed && x == self.upper))
    }
}

impl Display for Case {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let upper_operator = if self.upper_closed { "<=" } else { "<" };
        write!(
            f,
            "({}, (x >= {}) & (x {} {}))",
            self.expression, self.lower, upper_operator, self.upper
        )
    }
}

/// Symbolic case expression of the whole spline, ready for substitution or plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct Piecewise {
    cases: Vec<Case>,
}

impl Piecewise {
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    /// `(first knot, last knot)`
    pub fn domain(&self) -> Option<(f64, f64)> {
        match (self.cases.first(), self.cases.last()) {
            (Some(first), Some(last)) => Some((first.lower, last.upper)),
            _ => None,
        }
    }

    /// Value of the case containing `x`, `None` outside of all cases.
    pub fn subs(&self, x: f64) -> Option<f64> {
        self.cases
            .iter()
            .find(|case| case.contains(x))
            .map(|case| case.expression.subs(x))
    }
}

impl Display for Piecewise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piecewise(")?;
        for (i, case) in self.cases.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", case)?;
        }
        write!(f, ")")
    }
}
