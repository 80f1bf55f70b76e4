use nalgebra::{DMatrix, DVector};

use crate::{
    config::SchumakerConfig,
    error::SchumakerError,
    node::Node,
    output::{self, Piecewise, ReturnType, SplineOutput},
    polynomial::{build_pieces, Piece},
    resolver::resolve_intervals,
    secant::secants,
    slope::estimate_slopes,
};

/// Origin of the nodal slopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlopeMode {
    /// Slopes estimated from the data.
    Lagrangian,
    /// Slopes supplied with every node.
    Hermite,
}

/// Shape preserving quadratic spline through given nodes.
///
/// Built once and immutable afterwards, so it can be shared between threads freely.
#[derive(Debug, Clone, PartialEq)]
pub struct SchumakerSpline {
    nodes: Vec<Node>,
    slopes: Vec<f64>,
    knots: Vec<f64>,
    pieces: Vec<Piece>,
    mode: SlopeMode,
}

impl SchumakerSpline {
    /// Builds spline with default [SchumakerConfig]. Nodes must be ordered by strictly increasing x
    /// and either all of them or none of them must carry a slope.
    /// # Example
    /// ```
    /// use schumaker_spline::{Node, SchumakerSpline};
    ///
    /// let nodes = vec![Node::new(0.0, 0.0), Node::new(1.0, 1.0), Node::new(2.0, 1.0)];
    /// let spline = SchumakerSpline::new(nodes).unwrap();
    ///
    /// assert_eq!(spline.interpolate(1.0).unwrap(), 1.0);
    /// assert!(spline.interpolate(1.5).unwrap() <= 1.0);
    /// ```
    /// # Errors
    /// ```
    /// use schumaker_spline::{Node, SchumakerSpline};
    ///
    /// let nodes = vec![Node::new(1.0, 0.0), Node::new(0.0, 1.0)];
    /// assert!(SchumakerSpline::new(nodes).is_err());
    /// ```
    pub fn new(nodes: Vec<Node>) -> Result<Self, SchumakerError> {
        Self::with_config(nodes, SchumakerConfig::default())
    }

    pub fn with_config(nodes: Vec<Node>, config: SchumakerConfig) -> Result<Self, SchumakerError> {
        let mode = validate_nodes(&nodes)?;

        let secants = secants(&nodes)?;
        let slopes: Vec<f64> = match mode {
            SlopeMode::Hermite => nodes.iter().filter_map(|node| node.slope).collect(),
            SlopeMode::Lagrangian => estimate_slopes(&secants, &config),
        };

        let resolution = resolve_intervals(&nodes, &slopes, &secants, &config)?;
        let pieces = build_pieces(&resolution.sub_intervals)?;

        log::debug!(
            "built Schumaker spline over {} nodes ({:?}), {} inserted knots",
            nodes.len(),
            mode,
            resolution.inserted_knots(nodes.len())
        );

        Ok(SchumakerSpline { nodes, slopes, knots: resolution.knots, pieces, mode })
    }

    /// Builds spline from coordinate slices; presence of `s` selects Hermite mode.
    /// # Example
    /// ```
    /// use schumaker_spline::SchumakerSpline;
    ///
    /// let spline = SchumakerSpline::from_slices(&[0.0, 1.0], &[0.0, 1.0], None).unwrap();
    /// assert_eq!(spline.pieces()[0].coefficients(), [0.0, 1.0, 0.0]);
    /// ```
    pub fn from_slices(x: &[f64], y: &[f64], s: Option<&[f64]>) -> Result<Self, SchumakerError> {
        Self::from_slices_with_config(x, y, s, SchumakerConfig::default())
    }

    pub fn from_slices_with_config(
        x: &[f64],
        y: &[f64],
        s: Option<&[f64]>,
        config: SchumakerConfig,
    ) -> Result<Self, SchumakerError> {
        check_length("y", x.len(), y.len())?;
        if let Some(s) = s {
            check_length("s", x.len(), s.len())?;
        }

        let nodes = match s {
            Some(s) => x
                .iter()
                .zip(y)
                .zip(s)
                .map(|((x, y), s)| Node::with_slope(*x, *y, *s))
                .collect(),
            None => x.iter().zip(y).map(|(x, y)| Node::new(*x, *y)).collect(),
        };
        Self::with_config(nodes, config)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Slope at every node, as supplied or as estimated.
    pub fn slopes(&self) -> &[f64] {
        &self.slopes
    }

    /// Original x values plus inserted knots, strictly increasing.
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn mode(&self) -> SlopeMode {
        self.mode
    }

    pub fn inserted_knots(&self) -> usize {
        self.knots.len() - self.nodes.len()
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.min_x(), self.max_x())
    }

    pub fn interpolate(&self, x: f64) -> Result<f64, SchumakerError> {
        self.check_range(x)?;
        let index = self.find_interval_index(x);
        Ok(self.pieces[index].evaluate(x))
    }

    pub fn derivative(&self, x: f64) -> Result<f64, SchumakerError> {
        self.check_range(x)?;
        let index = self.find_interval_index(x);
        Ok(self.pieces[index].derivative(x))
    }

    pub fn batch_interpolate(&self, x_vector: &[f64]) -> Result<Vec<f64>, SchumakerError> {
        for x in x_vector {
            self.check_range(*x)?;
        }

        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;
        for x in x_vector {
            index = self.find_interval_index_with_hint(index, *x);
            results.push(self.pieces[index].evaluate(*x));
        }
        Ok(results)
    }

    /// Evaluates outside of the data range by extending the first or last piece.
    pub fn extrapolate(&self, x: f64) -> f64 {
        match self.evaluate_on_boundaries(x) {
            Some(result) => result,
            None => {
                let index = self.find_interval_index(x);
                self.pieces[index].evaluate(x)
            }
        }
    }

    pub fn to_arrays(&self) -> (DVector<f64>, DMatrix<f64>) {
        output::to_arrays(&self.knots, &self.pieces)
    }

    pub fn to_piecewise(&self) -> Piecewise {
        output::to_piecewise(&self.knots, &self.pieces)
    }

    pub fn assemble(&self, return_type: ReturnType) -> SplineOutput {
        match return_type {
            ReturnType::Arrays => {
                let (knots, coefficients) = self.to_arrays();
                SplineOutput::Arrays { knots, coefficients }
            }
            ReturnType::Symbolic => SplineOutput::Symbolic(self.to_piecewise()),
        }
    }

    fn min_x(&self) -> f64 {
        self.knots[0]
    }

    fn max_x(&self) -> f64 {
        self.knots[self.knots.len() - 1]
    }

    fn check_range(&self, x: f64) -> Result<(), SchumakerError> {
        if self.min_x() <= x && x <= self.max_x() {
            Ok(())
        } else {
            Err(SchumakerError::OutOfRange { x, min: self.min_x(), max: self.max_x() })
        }
    }

    fn find_interval_index(&self, x: f64) -> usize {
        let mut min = 0;
        let mut max = self.knots.len() - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if x < self.knots[mid] {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn find_interval_index_with_hint(&self, index_hint: usize, x: f64) -> usize {
        if self.is_in_interval_range(index_hint, x) {
            index_hint
        } else if index_hint + 1 < self.pieces.len() && self.is_in_interval_range(index_hint + 1, x) {
            index_hint + 1
        } else {
            self.find_interval_index(x)
        }
    }

    fn is_in_interval_range(&self, interval_index: usize, x: f64) -> bool {
        self.knots[interval_index] <= x && x <= self.knots[interval_index + 1]
    }

    fn evaluate_on_boundaries(&self, x: f64) -> Option<f64> {
        let size = self.knots.len();
        if x < self.knots[1] {
            Some(self.pieces[0].evaluate(x))
        } else if x > self.knots[size - 2] {
            Some(self.pieces[size - 2].evaluate(x))
        } else {
            None
        }
    }
}

fn check_length(name: &'static str, expected: usize, got: usize) -> Result<(), SchumakerError> {
    if expected != got {
        return Err(SchumakerError::ShapeMismatch { name, expected, got });
    }
    Ok(())
}

/// Checks everything but ordering, which the secant engine verifies, and picks the slope mode.
fn validate_nodes(nodes: &[Node]) -> Result<SlopeMode, SchumakerError> {
    let with_slope = nodes.iter().filter(|node| node.has_slope()).count();
    if with_slope != 0 {
        check_length("s", nodes.len(), with_slope)?;
    }

    if nodes.len() < 2 {
        return Err(SchumakerError::TooFewPoints { got: nodes.len() });
    }

    for (index, node) in nodes.iter().enumerate() {
        if !node.x.is_finite() {
            return Err(SchumakerError::NonFiniteInput { name: "x", index });
        }
        if !node.y.is_finite() {
            return Err(SchumakerError::NonFiniteInput { name: "y", index });
        }
        if node.slope.is_some_and(|slope| !slope.is_finite()) {
            return Err(SchumakerError::NonFiniteInput { name: "s", index });
        }
    }

    if with_slope == 0 {
        Ok(SlopeMode::Lagrangian)
    } else {
        Ok(SlopeMode::Hermite)
    }
}
