//! Numeric kernels for moving tabulated data between grids
//!
//! - [`smooth_resample`] evaluates a point-valued function on new x values
//! - [`rebin`] redistributes histogram counts onto new bin edges
//!
//! Both work on plain slices of any [`num_traits::Float`] and know nothing
//! about scales or spectra.

pub mod rebin;
pub mod smooth;

pub use rebin::rebin;
pub use smooth::{evaluate, smooth_resample, SmoothMode};

/// Output of a resampling kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Resampled<T> {
    pub values: Vec<T>,
    pub errors: Option<Vec<T>>,
}
