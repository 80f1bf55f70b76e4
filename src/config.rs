//! Tunable numeric constants of the construction.
//!
//! [SchumakerConfig] carries:
//! - `no_split_tolerance`   : relative tolerance of the `s_i + s_{i+1} = 2 L_i` test,
//! - `min_split_fraction`   : inserted knot is kept inside `[f h, (1 - f) h]` of its interval,
//! - `boundary_slope_limit` : boundary slope may not exceed this multiple of the adjacent secant,
//! - `interior_slope_limit` : interior slope may not exceed this multiple of the smaller adjacent secant.

use crate::error::SchumakerError;

pub const DEFAULT_NO_SPLIT_TOLERANCE: f64 = 1e-12;
pub const DEFAULT_MIN_SPLIT_FRACTION: f64 = 1e-6;
pub const DEFAULT_BOUNDARY_SLOPE_LIMIT: f64 = 3.0;
pub const DEFAULT_INTERIOR_SLOPE_LIMIT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchumakerConfig {
    pub(crate) no_split_tolerance: f64,
    pub(crate) min_split_fraction: f64,
    pub(crate) boundary_slope_limit: f64,
    pub(crate) interior_slope_limit: f64,
}

impl Default for SchumakerConfig {
    fn default() -> Self {
        Self {
            no_split_tolerance: DEFAULT_NO_SPLIT_TOLERANCE,
            min_split_fraction: DEFAULT_MIN_SPLIT_FRACTION,
            boundary_slope_limit: DEFAULT_BOUNDARY_SLOPE_LIMIT,
            interior_slope_limit: DEFAULT_INTERIOR_SLOPE_LIMIT,
        }
    }
}

impl SchumakerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // getters
    pub fn no_split_tolerance(&self) -> f64 { self.no_split_tolerance }
    pub fn min_split_fraction(&self) -> f64 { self.min_split_fraction }
    pub fn boundary_slope_limit(&self) -> f64 { self.boundary_slope_limit }
    pub fn interior_slope_limit(&self) -> f64 { self.interior_slope_limit }

    pub fn set_no_split_tolerance(mut self, v: f64) -> Result<Self, SchumakerError> {
        if !v.is_finite() || v < 0.0 {
            return Err(SchumakerError::InvalidConfig { name: "no_split_tolerance", value: v });
        }
        self.no_split_tolerance = v;
        Ok(self)
    }

    /// Fraction must lie in `[0, 0.5)`; the midpoint is always admissible.
    pub fn set_min_split_fraction(mut self, v: f64) -> Result<Self, SchumakerError> {
        if !v.is_finite() || !(0.0..0.5).contains(&v) {
            return Err(SchumakerError::InvalidConfig { name: "min_split_fraction", value: v });
        }
        self.min_split_fraction = v;
        Ok(self)
    }

    pub fn set_boundary_slope_limit(mut self, v: f64) -> Result<Self, SchumakerError> {
        if !v.is_finite() || v < 1.0 {
            return Err(SchumakerError::InvalidConfig { name: "boundary_slope_limit", value: v });
        }
        self.boundary_slope_limit = v;
        Ok(self)
    }

    pub fn set_interior_slope_limit(mut self, v: f64) -> Result<Self, SchumakerError> {
        if !v.is_finite() || v < 1.0 {
            return Err(SchumakerError::InvalidConfig { name: "interior_slope_limit", value: v });
        }
        self.interior_slope_limit = v;
        Ok(self)
    }
}
