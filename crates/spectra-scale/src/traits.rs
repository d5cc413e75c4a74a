//! The contract shared by every x-axis grid

use spectra_core::ClosedInterval;

/// An ordered, immutable sequence of x coordinates
///
/// Lookups never fail: out-of-range indices give `NaN` and positions off
/// either end of the grid are clamped to `0` or `count()`.
pub trait Scale {
    /// Number of grid points, at least 1
    fn count(&self) -> usize;

    fn start(&self) -> f64;

    fn end(&self) -> f64;

    /// The `i`th coordinate, or `NaN` when `i >= count()`
    fn value_at(&self, i: usize) -> f64;

    /// Index of the least point that is `>= x`
    ///
    /// Returns 0 when `x <= start()` and `count()` when `x > end()`.
    fn index_of(&self, x: f64) -> usize;

    /// Materialise every point
    fn values(&self) -> Vec<f64> {
        (0..self.count()).map(|i| self.value_at(i)).collect()
    }

    /// Index of the greatest point that is `<= x`
    ///
    /// `None` when `x` lies left of the first point.
    fn index_glb(&self, x: f64) -> Option<usize> {
        let i = self.index_of(x);
        if i < self.count() && self.value_at(i) == x {
            Some(i)
        } else {
            i.checked_sub(1)
        }
    }

    fn in_range(&self, x: f64) -> bool {
        x >= self.start() && x <= self.end()
    }

    fn interval(&self) -> ClosedInterval {
        ClosedInterval::new(self.start(), self.end())
    }
}

/// Shared rounding fix-up for closed-form `index_of` implementations
///
/// `guess` comes from a `ceil` of a floating-point expression and may be off
/// by one in either direction; this nudges it to the least point `>= x`.
pub(crate) fn correct_index<S: Scale + ?Sized>(scale: &S, x: f64, guess: usize) -> usize {
    let last = scale.count() - 1;
    let pos = guess.min(last);
    if scale.value_at(pos) < x {
        pos + 1
    } else if pos > 0 && scale.value_at(pos - 1) >= x {
        pos - 1
    } else {
        pos
    }
}
