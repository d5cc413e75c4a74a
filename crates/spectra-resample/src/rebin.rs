//! Count-conserving redistribution of histogram bins

use crate::Resampled;
use num_traits::Float;
use spectra_core::{Error, Result};

/// Redistribute `old_counts` from `old_edges` onto `new_edges`
///
/// Each old bin contributes to each new bin in proportion to their overlap
/// as a fraction of the old bin's width, so counts inside the common range
/// are conserved. Variances follow the same fractions. Both edge lists must
/// be non-decreasing; zero-width old bins are skipped.
pub fn rebin<T: Float>(
    old_edges: &[T],
    old_counts: &[T],
    old_err: Option<&[T]>,
    new_edges: &[T],
) -> Result<Resampled<T>> {
    let n_old = old_edges.len().saturating_sub(1);
    if old_counts.len() != n_old {
        return Err(Error::size_mismatch(n_old, old_counts.len(), "rebin counts"));
    }
    if let Some(err) = old_err {
        if err.len() != n_old {
            return Err(Error::size_mismatch(n_old, err.len(), "rebin errors"));
        }
    }

    let n_new = new_edges.len().saturating_sub(1);
    let mut values = vec![T::zero(); n_new];
    let mut variances = old_err.map(|_| vec![T::zero(); n_new]);

    let mut first = 0;
    for j in 0..n_new {
        let (a, b) = (new_edges[j], new_edges[j + 1]);
        while first < n_old && old_edges[first + 1] <= a {
            first += 1;
        }
        let mut i = first;
        while i < n_old && old_edges[i] < b {
            let (c, d) = (old_edges[i], old_edges[i + 1]);
            let width = d - c;
            let overlap = b.min(d) - a.max(c);
            if width > T::zero() && overlap > T::zero() {
                let frac = overlap / width;
                values[j] = values[j] + old_counts[i] * frac;
                if let (Some(var), Some(err)) = (variances.as_mut(), old_err) {
                    var[j] = var[j] + frac * err[i] * err[i];
                }
            }
            i += 1;
        }
    }

    let errors = variances.map(|var| var.into_iter().map(Float::sqrt).collect());
    Ok(Resampled { values, errors })
}
