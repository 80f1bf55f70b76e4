/// Node represents input data point through which spline passes, optionally with
/// the first derivative the spline must have there.
/// - `x` - coordinate,
/// - `y` - coordinate,
/// - `slope` - first derivative at `x`; `None` when it should be estimated from the data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) slope: Option<f64>,
}

impl Node {
    /// Creates [Node] without slope information (Lagrangian data). Slope is estimated
    /// from neighbouring nodes when spline is built.
    /// # Example
    /// ```
    /// use schumaker_spline::Node;
    ///
    /// let node = Node::new(1.0, 2.0);
    /// assert_eq!(node.get_slope(), None);
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        Node { x, y, slope: None }
    }

    /// Creates [Node] with given first derivative (Hermite data). Slope is used as supplied.
    /// # Example
    /// ```
    /// use schumaker_spline::Node;
    ///
    /// let node = Node::with_slope(1.0, 2.0, -0.5);
    /// assert_eq!(node.get_slope(), Some(-0.5));
    /// ```
    pub fn with_slope(x: f64, y: f64, slope: f64) -> Self {
        Node { x, y, slope: Some(slope) }
    }

    pub fn get_x(&self) -> f64 {
        self.x
    }

    pub fn get_y(&self) -> f64 {
        self.y
    }

    pub fn get_slope(&self) -> Option<f64> {
        self.slope
    }

    pub fn has_slope(&self) -> bool {
        self.slope.is_some()
    }
}

impl From<(f64, f64)> for Node {
    fn from((x, y): (f64, f64)) -> Self {
        Node::new(x, y)
    }
}

impl From<(f64, f64, f64)> for Node {
    fn from((x, y, slope): (f64, f64, f64)) -> Self {
        Node::with_slope(x, y, slope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let x = 1.0;
        let y = 2.5;
        let node = Node::new(x, y);

        assert_eq!(x, node.x);
        assert_eq!(y, node.y);
        assert!(!node.has_slope());
    }

    #[test]
    fn test_with_slope() {
        let x = 1.0;
        let y = 2.5;
        let slope = 0.5;
        let node = Node::with_slope(x, y, slope);

        assert_eq!(x, node.get_x());
        assert_eq!(y, node.get_y());
        assert_eq!(Some(slope), node.get_slope());
        assert!(node.has_slope());
    }

    #[test]
    fn test_from_tuples() {
        let node: Node = (1.0, 2.0).into();
        assert_eq!(Node::new(1.0, 2.0), node);

        let node: Node = (1.0, 2.0, 3.0).into();
        assert_eq!(Node::with_slope(1.0, 2.0, 3.0), node);
    }
}
