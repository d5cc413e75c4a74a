//! Tabulated spectra for neutron-scattering data reduction
//!
//! This crate gathers the workspace members under one roof:
//!
//! - [`spectra_core`]: errors, closed intervals and grid helpers
//! - [`spectra_scale`]: uniform, geometric and variable x grids
//! - [`spectra_resample`]: interpolation and count-conserving rebinning kernels
//! - [`spectra_data`]: spectra, their arithmetic and stitching, and data sets
//!
//! Most programs only need the [`prelude`].
//!
//! ```rust
//! use spectra::prelude::*;
//!
//! let low = Data::function(XScale::uniform(0.0, 5.0, 6)?, vec![1.0; 6], 1);
//! let high = Data::function(XScale::uniform(3.0, 8.0, 6)?, vec![3.0; 6], 2);
//! let joined = low.stitch(&high, OverlapPolicy::Average)?;
//!
//! assert_eq!(joined.scale().count(), 9);
//! assert_eq!(joined.value_at(4.0, SmoothMode::Linear), 2.0);
//! # Ok::<(), spectra::prelude::Error>(())
//! ```

pub use spectra_core;
pub use spectra_data;
pub use spectra_resample;
pub use spectra_scale;

pub mod prelude {
    pub use spectra_core::{ClosedInterval, Error, Result};
    pub use spectra_data::{
        Attribute, AttributeList, AttributeValue, Data, DataSet, OverlapPolicy, SelectionCounter,
        SortMethod, TableKind,
    };
    pub use spectra_resample::SmoothMode;
    pub use spectra_scale::{Scale, XScale};
}
