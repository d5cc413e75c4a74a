//! Grids whose points grow by a fixed ratio

use crate::traits::{correct_index, Scale};
use serde::{Deserialize, Serialize};
use spectra_core::{ClosedInterval, Error, Result};

const RATIO_TOLERANCE: f64 = 1e-9;

/// A geometric progression `start * ratio^i`
///
/// Common for time-of-flight binning where resolution scales with x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometricProgressionXScale {
    start: f64,
    end: f64,
    ratio: f64,
    count: usize,
}

impl GeometricProgressionXScale {
    /// Build the progression starting at `start` whose first step is
    /// `first_step` long
    ///
    /// The last point is the first one at or beyond `nominal_end`, so the
    /// actual `end()` can exceed the requested one.
    pub fn new(start: f64, nominal_end: f64, first_step: f64) -> Result<Self> {
        if !start.is_finite() || !nominal_end.is_finite() || !first_step.is_finite() {
            return Err(Error::non_finite("geometric scale parameters"));
        }
        if start <= 0.0 {
            return Err(Error::invalid_scale(format!(
                "geometric scale start must be positive, got {start}"
            )));
        }
        if first_step <= 0.0 {
            return Err(Error::invalid_scale(format!(
                "geometric scale first step must be positive, got {first_step}"
            )));
        }
        if nominal_end < start {
            return Err(Error::invalid_scale(format!(
                "geometric scale end {nominal_end} is below start {start}"
            )));
        }
        let ratio = (start + first_step) / start;
        if ratio <= 1.0 {
            return Err(Error::invalid_scale(format!(
                "geometric scale ratio must exceed 1, got {ratio}"
            )));
        }
        let steps = steps_between(start, nominal_end, ratio);
        Ok(Self::from_parts(start, ratio, steps + 1))
    }

    /// Build directly from an already validated start, ratio and count
    fn from_parts(start: f64, ratio: f64, count: usize) -> Self {
        let mut scale = Self {
            start,
            end: start,
            ratio,
            count,
        };
        scale.end = scale.point(count - 1);
        scale
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    fn point(&self, i: usize) -> f64 {
        if i == 0 {
            self.start
        } else {
            self.start * self.ratio.powf(i as f64)
        }
    }

    /// Grow to cover `[min, max]` on the same ratio
    ///
    /// Existing points stay on the grid. Returns `None` when `min` is not
    /// positive, since no geometric progression reaches it.
    pub fn extend_to(&self, min: f64, max: f64) -> Option<GeometricProgressionXScale> {
        if min <= 0.0 {
            return None;
        }
        let n_back = if min < self.start {
            steps_between(min, self.start, self.ratio)
        } else {
            0
        };
        let n_fwd = if max > self.end {
            steps_between(self.end, max, self.ratio)
        } else {
            0
        };
        if n_back == 0 && n_fwd == 0 {
            return Some(self.clone());
        }
        let start = self.start * self.ratio.powf(-(n_back as f64));
        Some(Self::from_parts(
            start,
            self.ratio,
            self.count + n_back + n_fwd,
        ))
    }

    /// The sub-progression of existing points inside `interval`
    pub fn restrict(&self, interval: &ClosedInterval) -> Option<GeometricProgressionXScale> {
        if interval.max() < self.start || interval.min() > self.end {
            return None;
        }
        let lo = self.index_of(interval.min());
        let hi = self.index_glb(interval.max())?;
        if lo > hi {
            return None;
        }
        Some(Self::from_parts(self.point(lo), self.ratio, hi - lo + 1))
    }
}

/// Whole ratio steps from `lo` up to at least `hi`
fn steps_between(lo: f64, hi: f64, ratio: f64) -> usize {
    let exact = (hi / lo).ln() / ratio.ln();
    (exact - RATIO_TOLERANCE).ceil().max(0.0) as usize
}

impl Scale for GeometricProgressionXScale {
    fn count(&self) -> usize {
        self.count
    }

    fn start(&self) -> f64 {
        self.start
    }

    fn end(&self) -> f64 {
        self.end
    }

    fn value_at(&self, i: usize) -> f64 {
        if i >= self.count {
            f64::NAN
        } else if i == self.count - 1 {
            self.end
        } else {
            self.point(i)
        }
    }

    fn index_of(&self, x: f64) -> usize {
        if x <= self.start {
            return 0;
        }
        if x > self.end {
            return self.count;
        }
        if x == self.end {
            return self.count - 1;
        }
        let guess = ((x / self.start).ln() / self.ratio.ln()).ceil();
        correct_index(self, x, guess.max(0.0) as usize)
    }
}
