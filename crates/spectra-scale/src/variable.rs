//! Grids with an explicit list of points

use crate::traits::Scale;
use serde::{Deserialize, Serialize};
use spectra_core::{ClosedInterval, Error, Result};

/// An arbitrary strictly increasing list of points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct VariableXScale {
    points: Vec<f64>,
}

impl VariableXScale {
    pub fn new(points: Vec<f64>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::invalid_scale("variable scale needs at least one point"));
        }
        if points.iter().any(|p| !p.is_finite()) {
            return Err(Error::non_finite("variable scale points"));
        }
        if let Some(i) = points.windows(2).position(|w| w[1] <= w[0]) {
            return Err(Error::invalid_scale(format!(
                "variable scale points must strictly increase, {} follows {} at index {}",
                points[i + 1],
                points[i],
                i + 1
            )));
        }
        Ok(Self { points })
    }

    /// Wrap points already known to be finite and strictly increasing
    pub(crate) fn from_increasing(points: Vec<f64>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Add the points of `other` that fall outside this grid
    ///
    /// Interior points of `other` are ignored so this grid's own spacing
    /// survives wherever the two overlap.
    pub fn splice(&self, other: &[f64]) -> VariableXScale {
        let (start, end) = (self.start(), self.end());
        let mut points: Vec<f64> = other.iter().copied().filter(|&x| x < start).collect();
        points.extend_from_slice(&self.points);
        points.extend(other.iter().copied().filter(|&x| x > end));
        Self { points }
    }

    /// Points inside `interval`, or `None` if there are none
    pub fn restrict(&self, interval: &ClosedInterval) -> Option<VariableXScale> {
        let kept: Vec<f64> = self
            .points
            .iter()
            .copied()
            .filter(|&x| interval.contains(x))
            .collect();
        if kept.is_empty() {
            return None;
        }
        Some(Self { points: kept })
    }
}

impl TryFrom<Vec<f64>> for VariableXScale {
    type Error = Error;

    fn try_from(points: Vec<f64>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<VariableXScale> for Vec<f64> {
    fn from(scale: VariableXScale) -> Self {
        scale.points
    }
}

impl Scale for VariableXScale {
    fn count(&self) -> usize {
        self.points.len()
    }

    fn start(&self) -> f64 {
        self.points[0]
    }

    fn end(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    fn value_at(&self, i: usize) -> f64 {
        self.points.get(i).copied().unwrap_or(f64::NAN)
    }

    fn index_of(&self, x: f64) -> usize {
        if x <= self.start() {
            return 0;
        }
        if x > self.end() {
            return self.count();
        }
        self.points.partition_point(|&p| p < x)
    }

    fn values(&self) -> Vec<f64> {
        self.points.clone()
    }
}
