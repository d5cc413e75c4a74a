//! The closed family of grids used by tabulated spectra

use crate::geometric::GeometricProgressionXScale;
use crate::traits::Scale;
use crate::uniform::UniformXScale;
use crate::variable::VariableXScale;
use serde::{Deserialize, Serialize};
use spectra_core::{ClosedInterval, Error, Result};
use std::fmt;

/// Relative slack when deciding whether a point list is evenly spaced
const UNIFORM_TOLERANCE: f64 = 1e-9;

/// Any x-axis grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum XScale {
    Uniform(UniformXScale),
    Geometric(GeometricProgressionXScale),
    Variable(VariableXScale),
}

macro_rules! dispatch {
    ($self:expr, $s:ident => $body:expr) => {
        match $self {
            XScale::Uniform($s) => $body,
            XScale::Geometric($s) => $body,
            XScale::Variable($s) => $body,
        }
    };
}

impl XScale {
    pub fn uniform(start: f64, end: f64, count: usize) -> Result<Self> {
        UniformXScale::new(start, end, count).map(XScale::Uniform)
    }

    pub fn geometric(start: f64, nominal_end: f64, first_step: f64) -> Result<Self> {
        GeometricProgressionXScale::new(start, nominal_end, first_step).map(XScale::Geometric)
    }

    pub fn variable(points: Vec<f64>) -> Result<Self> {
        VariableXScale::new(points).map(XScale::Variable)
    }

    /// Pick the cheapest representation for `points`
    ///
    /// Evenly spaced points (within a small relative tolerance) become a
    /// uniform grid; anything else is stored as an explicit list.
    pub fn from_points(points: &[f64]) -> Result<Self> {
        match points {
            [] => Err(Error::invalid_scale("cannot build a scale from no points")),
            [x] => Self::uniform(*x, *x, 1),
            [first, .., last] => {
                let n = points.len();
                let span = last - first;
                if span > 0.0 && span.is_finite() {
                    let step = span / (n - 1) as f64;
                    let even = points.iter().enumerate().all(|(i, &x)| {
                        let expected = first + i as f64 * step;
                        (expected - x).abs() <= UNIFORM_TOLERANCE * span.max(x.abs())
                    });
                    if even {
                        return Self::uniform(*first, *last, n);
                    }
                }
                Self::variable(points.to_vec())
            }
        }
    }

    pub fn is_uniform(&self) -> bool {
        matches!(self, XScale::Uniform(_))
    }

    /// Whether two grids can be combined sample-by-sample without resampling
    ///
    /// Only uniform grids qualify, and only when they share count, start and
    /// end. Two non-uniform grids are never considered compatible here.
    pub fn compatible(&self, other: &XScale) -> bool {
        self.is_uniform()
            && other.is_uniform()
            && self.count() == other.count()
            && self.start() == other.start()
            && self.end() == other.end()
    }

    /// Smallest grid of the same family covering both this grid and `other`
    ///
    /// This grid's points are all kept. Where the family cannot stretch
    /// (a single-point uniform grid, or a geometric grid asked to reach a
    /// non-positive x) the result falls back to an explicit point list.
    pub fn extend(&self, other: &XScale) -> XScale {
        let min = self.start().min(other.start());
        let max = self.end().max(other.end());
        match self {
            XScale::Uniform(u) if u.count() > 1 => XScale::Uniform(u.extend_to(min, max)),
            XScale::Uniform(u) => {
                let mut points = vec![min, u.start(), max];
                points.dedup();
                Self::from_points(&points).unwrap_or_else(|_| self.clone())
            }
            XScale::Geometric(g) => match g.extend_to(min, max) {
                Some(extended) => XScale::Geometric(extended),
                None => XScale::Variable(
                    VariableXScale::from_increasing(g.values()).splice(&other.values()),
                ),
            },
            XScale::Variable(v) => XScale::Variable(v.splice(&other.values())),
        }
    }

    /// Sub-grid of existing points inside `interval`
    pub fn restrict(&self, interval: &ClosedInterval) -> Option<XScale> {
        match self {
            XScale::Uniform(u) => u.restrict(interval).map(XScale::Uniform),
            XScale::Geometric(g) => g.restrict(interval).map(XScale::Geometric),
            XScale::Variable(v) => v.restrict(interval).map(XScale::Variable),
        }
    }
}

impl Scale for XScale {
    fn count(&self) -> usize {
        dispatch!(self, s => s.count())
    }

    fn start(&self) -> f64 {
        dispatch!(self, s => s.start())
    }

    fn end(&self) -> f64 {
        dispatch!(self, s => s.end())
    }

    fn value_at(&self, i: usize) -> f64 {
        dispatch!(self, s => s.value_at(i))
    }

    fn index_of(&self, x: f64) -> usize {
        dispatch!(self, s => s.index_of(x))
    }

    fn values(&self) -> Vec<f64> {
        dispatch!(self, s => s.values())
    }
}

impl PartialEq for XScale {
    fn eq(&self, other: &Self) -> bool {
        if self.count() != other.count()
            || self.start() != other.start()
            || self.end() != other.end()
        {
            return false;
        }
        if self.is_uniform() && other.is_uniform() {
            return true;
        }
        (0..self.count()).all(|i| self.value_at(i) == other.value_at(i))
    }
}

impl fmt::Display for XScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{}] in {} steps",
            self.start(),
            self.end(),
            self.count()
        )
    }
}

impl From<UniformXScale> for XScale {
    fn from(s: UniformXScale) -> Self {
        XScale::Uniform(s)
    }
}

impl From<GeometricProgressionXScale> for XScale {
    fn from(s: GeometricProgressionXScale) -> Self {
        XScale::Geometric(s)
    }
}

impl From<VariableXScale> for XScale {
    fn from(s: VariableXScale) -> Self {
        XScale::Variable(s)
    }
}
