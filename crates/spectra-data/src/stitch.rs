//! Joining two spectra that cover neighbouring or overlapping ranges

use crate::data::{Data, TableKind};
use serde::{Deserialize, Serialize};
use spectra_core::{ClosedInterval, Result};
use spectra_resample::SmoothMode;
use spectra_scale::Scale;
use std::sync::Arc;
use tracing::instrument;

/// Which value to keep where both spectra have data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OverlapPolicy {
    /// The first spectrum's value
    Keep,
    /// The mean of both
    #[default]
    Average,
    /// The second spectrum's value
    Discard,
    /// The sum of both
    Sum,
}

impl Data {
    /// Combine with `other` into one spectrum spanning both ranges
    ///
    /// The grid is this spectrum's, extended to cover `other`. Each sample
    /// is taken from whichever spectrum originally covered it, using
    /// `policy` where both did; samples neither covered are zero. For
    /// histograms a bin counts as covered only when both of its edges lie
    /// inside the original range. Grid points within a billionth of the
    /// grid spacing of a range's ends count as lying on them. When only
    /// this spectrum has errors, `other` is given `sqrt(|count|)` errors
    /// first.
    #[instrument(skip_all, fields(this = self.group_id, other = other.group_id, ?policy))]
    pub fn stitch(&self, other: &Data, policy: OverlapPolicy) -> Result<Data> {
        let this_range = self.scale.interval();
        let mut theirs = other.convert(self.kind, true, other.group_id)?;
        let other_range = theirs.scale.interval();

        if self.errors.is_some() && theirs.errors.is_none() {
            theirs.set_sqrt_errors(true);
        }

        let scale = Arc::new(self.scale.extend(&theirs.scale));
        let x = scale.values();
        // Extended grids reproduce the original end points only to rounding
        let tol = boundary_tolerance(&x);

        let mut mine = self.clone();
        mine.resample_at(scale.clone(), &snap(&x, &this_range, tol), SmoothMode::Linear)?;
        theirs.resample_at(scale.clone(), &snap(&x, &other_range, tol), SmoothMode::Linear)?;

        let this_range = widen(&this_range, tol);
        let other_range = widen(&other_range, tol);
        let covered = |range: &ClosedInterval, i: usize| match self.kind {
            TableKind::Function => range.contains(x[i]),
            TableKind::Histogram => range.contains(x[i]) && range.contains(x[i + 1]),
        };

        let track_errors = mine.errors.is_some();
        let n = mine.values.len();
        let mut values = Vec::with_capacity(n);
        let mut errors = Vec::with_capacity(if track_errors { n } else { 0 });

        for i in 0..n {
            let a = (mine.values[i], error_at(&mine, i));
            let b = (theirs.values[i], error_at(&theirs, i));
            let (y, e) = match (covered(&this_range, i), covered(&other_range, i)) {
                (true, false) => a,
                (false, true) => b,
                (true, true) => merge(a, b, policy),
                (false, false) => (0.0, 0.0),
            };
            values.push(y);
            if track_errors {
                errors.push(e);
            }
        }

        let mut out = mine;
        out.values = values;
        out.errors = track_errors.then_some(errors);
        out.sqrt_errors = false;
        Ok(out)
    }
}

/// A billionth of the tightest spacing on `x`, or of its magnitude when
/// there is no spacing
fn boundary_tolerance(x: &[f64]) -> f64 {
    let spacing = x
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|d| *d > 0.0)
        .fold(f64::INFINITY, f64::min);
    if spacing.is_finite() {
        1e-9 * spacing
    } else {
        1e-9 * x.iter().fold(1.0, |m: f64, v| m.max(v.abs()))
    }
}

fn widen(range: &ClosedInterval, tol: f64) -> ClosedInterval {
    ClosedInterval::new(range.min() - tol, range.max() + tol)
}

/// `x` with points lying just outside `range` moved onto its ends
fn snap(x: &[f64], range: &ClosedInterval, tol: f64) -> Vec<f64> {
    x.iter()
        .map(|&v| {
            if v < range.min() && v >= range.min() - tol {
                range.min()
            } else if v > range.max() && v <= range.max() + tol {
                range.max()
            } else {
                v
            }
        })
        .collect()
}

fn error_at(data: &Data, i: usize) -> f64 {
    data.errors
        .as_ref()
        .and_then(|e| e.get(i).copied())
        .unwrap_or(0.0)
}

fn merge(a: (f64, f64), b: (f64, f64), policy: OverlapPolicy) -> (f64, f64) {
    match policy {
        OverlapPolicy::Keep => a,
        OverlapPolicy::Discard => b,
        OverlapPolicy::Average => ((a.0 + b.0) / 2.0, a.1.hypot(b.1) / 2.0),
        OverlapPolicy::Sum => (a.0 + b.0, a.1.hypot(b.1)),
    }
}
