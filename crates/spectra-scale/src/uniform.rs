//! Evenly spaced grids

use crate::traits::{correct_index, Scale};
use serde::{Deserialize, Serialize};
use spectra_core::{ClosedInterval, Error, Result};
use tracing::debug;

// Slack when counting whole steps, so a bound that sits on the grid up to
// rounding does not pull in an extra point.
const STEP_TOLERANCE: f64 = 1e-9;

/// An arithmetic progression `start + i * step`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniformXScale {
    start: f64,
    end: f64,
    count: usize,
}

impl UniformXScale {
    /// Build a grid of `count` points spanning `[start, end]`
    ///
    /// A single-point grid always has `end == start`.
    pub fn new(start: f64, end: f64, count: usize) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(Error::non_finite("uniform scale bounds"));
        }
        if count == 0 {
            return Err(Error::invalid_scale("uniform scale needs at least one point"));
        }
        if end < start {
            return Err(Error::invalid_scale(format!(
                "uniform scale end {end} is below start {start}"
            )));
        }
        if count == 1 {
            if end != start {
                debug!(start, end, "single-point uniform scale, forcing end to start");
            }
            return Ok(Self {
                start,
                end: start,
                count,
            });
        }
        if end == start {
            return Err(Error::invalid_scale(format!(
                "uniform scale with {count} points has zero width"
            )));
        }
        Ok(Self { start, end, count })
    }

    /// Spacing between points; 0 for a single-point grid
    pub fn step(&self) -> f64 {
        if self.count > 1 {
            (self.end - self.start) / (self.count - 1) as f64
        } else {
            0.0
        }
    }

    /// Grow to cover `[min, max]` while keeping every existing point
    ///
    /// The new bounds are snapped onto this grid's step, so the result may
    /// overshoot the requested interval by less than one step. A
    /// single-point grid has no step and is returned unchanged.
    pub fn extend_to(&self, min: f64, max: f64) -> UniformXScale {
        let step = self.step();
        if step <= 0.0 {
            return self.clone();
        }
        let n_back = whole_steps(self.start - min, step);
        let n_fwd = whole_steps(max - self.end, step);
        if n_back == 0 && n_fwd == 0 {
            return self.clone();
        }
        Self {
            start: self.start - n_back as f64 * step,
            end: self.end + n_fwd as f64 * step,
            count: self.count + n_back + n_fwd,
        }
    }

    /// The sub-grid of existing points inside `interval`
    pub fn restrict(&self, interval: &ClosedInterval) -> Option<UniformXScale> {
        if interval.max() < self.start || interval.min() > self.end {
            return None;
        }
        let lo = self.index_of(interval.min());
        let hi = self.index_glb(interval.max())?;
        if lo > hi {
            return None;
        }
        let start = self.value_at(lo);
        if lo == hi {
            return Some(Self {
                start,
                end: start,
                count: 1,
            });
        }
        Some(Self {
            start,
            end: self.value_at(hi),
            count: hi - lo + 1,
        })
    }
}

/// Number of whole steps needed to cover `distance`, never negative
fn whole_steps(distance: f64, step: f64) -> usize {
    if distance <= 0.0 {
        return 0;
    }
    (distance / step - STEP_TOLERANCE).ceil().max(0.0) as usize
}

impl Scale for UniformXScale {
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
            self.start + i as f64 * self.step()
        }
    }

    fn index_of(&self, x: f64) -> usize {
        if self.count == 1 {
            return if x <= self.start { 0 } else { 1 };
        }
        if x <= self.start {
            return 0;
        }
        if x > self.end {
            return self.count;
        }
        let guess = ((x - self.start) / self.step()).ceil();
        correct_index(self, x, guess.max(0.0) as usize)
    }

    fn values(&self) -> Vec<f64> {
        let step = self.step();
        let mut out: Vec<f64> = (0..self.count)
            .map(|i| self.start + i as f64 * step)
            .collect();
        if let Some(last) = out.last_mut() {
            *last = self.end;
        }
        out
    }
}
