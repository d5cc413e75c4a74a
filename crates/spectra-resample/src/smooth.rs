//! Resampling of point-valued functions onto a new grid

use crate::Resampled;
use num_traits::Float;
use serde::{Deserialize, Serialize};
use spectra_core::{Error, Result};

/// How values between grid points are reconstructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SmoothMode {
    /// Take the value at the nearest grid point at or below x
    None,
    /// Interpolate linearly between the bracketing grid points
    #[default]
    Linear,
}

/// Evaluate the function `(old_x, old_y)` at one position
///
/// `old_x` must be non-decreasing and as long as `old_y`. Positions
/// outside `[old_x[0], old_x[last]]` evaluate to zero.
pub fn evaluate<T: Float>(old_x: &[T], old_y: &[T], x: T, mode: SmoothMode) -> T {
    if old_y.len() != old_x.len() {
        return T::zero();
    }
    let (Some(&first), Some(&last)) = (old_x.first(), old_x.last()) else {
        return T::zero();
    };
    if x.is_nan() || x < first || x > last {
        return T::zero();
    }
    let hi = old_x.partition_point(|&p| p < x);
    if old_x[hi] == x || hi == 0 {
        return old_y[hi];
    }
    let lo = hi - 1;
    match mode {
        SmoothMode::None => old_y[lo],
        SmoothMode::Linear => {
            let (x0, x1) = (old_x[lo], old_x[hi]);
            if x1 == x0 {
                return old_y[lo];
            }
            let t = (x - x0) / (x1 - x0);
            old_y[lo] + t * (old_y[hi] - old_y[lo])
        }
    }
}

/// Resample a tabulated function onto `new_x`
///
/// Values outside the old grid's range become zero. Errors, when given,
/// are carried through the same reconstruction as the values.
pub fn smooth_resample<T: Float>(
    old_x: &[T],
    old_y: &[T],
    old_err: Option<&[T]>,
    new_x: &[T],
    mode: SmoothMode,
) -> Result<Resampled<T>> {
    if old_y.len() != old_x.len() {
        return Err(Error::size_mismatch(
            old_x.len(),
            old_y.len(),
            "smooth_resample values",
        ));
    }
    if let Some(err) = old_err {
        if err.len() != old_x.len() {
            return Err(Error::size_mismatch(
                old_x.len(),
                err.len(),
                "smooth_resample errors",
            ));
        }
    }

    let values = new_x
        .iter()
        .map(|&x| evaluate(old_x, old_y, x, mode))
        .collect();
    let errors = old_err.map(|err| {
        new_x
            .iter()
            .map(|&x| evaluate(old_x, err, x, mode))
            .collect()
    });
    Ok(Resampled { values, errors })
}
