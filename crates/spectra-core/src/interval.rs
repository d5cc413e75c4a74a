//! Closed intervals on the real line

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed interval `[min, max]`
///
/// Construction orders the bounds, so `min() <= max()` always holds for
/// finite inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosedInterval {
    min: f64,
    max: f64,
}

impl ClosedInterval {
    pub fn new(a: f64, b: f64) -> Self {
        if b < a {
            Self { min: b, max: a }
        } else {
            Self { min: a, max: b }
        }
    }

    /// Smallest interval covering every value, or `None` for an empty slice
    pub fn spanning(values: &[f64]) -> Option<Self> {
        crate::utils::min_max(values).map(|(lo, hi)| Self::new(lo, hi))
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Inclusive on both ends
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    pub fn intersects(&self, other: &ClosedInterval) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    pub fn intersection(&self, other: &ClosedInterval) -> Option<ClosedInterval> {
        if !self.intersects(other) {
            return None;
        }
        Some(Self {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        })
    }

    pub fn union(&self, other: &ClosedInterval) -> ClosedInterval {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

impl fmt::Display for ClosedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.min, self.max)
    }
}
