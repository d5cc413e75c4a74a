//! Tabulated spectra and collections of them
//!
//! A [`Data`] block is one spectrum: an [`XScale`](spectra_scale::XScale)
//! grid shared through `Arc`, values that are either point samples
//! ([`TableKind::Function`]) or bin counts ([`TableKind::Histogram`]),
//! optional errors and a case-insensitive bag of [`Attribute`]s.
//!
//! Binary arithmetic brings the right operand onto the left operand's kind
//! and grid first, resampling when the grids are not compatible, and
//! propagates errors in quadrature. [`Data::stitch`] joins spectra over
//! neighbouring ranges. [`DataSet`] keeps an ordered list of spectra with
//! selection, hiding and sorting.
//!
//! # Example
//!
//! ```rust
//! use spectra_data::Data;
//! use spectra_scale::XScale;
//!
//! let grid = XScale::uniform(0.0, 2.0, 3).unwrap();
//! let a = Data::function(grid.clone(), vec![1.0, 2.0, 3.0], 1).with_errors(vec![1.0; 3]);
//! let b = Data::function(grid, vec![1.0, 1.0, 1.0], 2).with_errors(vec![1.0; 3]);
//!
//! let sum = a.add(&b).unwrap();
//! assert_eq!(sum.values(), &[2.0, 3.0, 4.0]);
//! ```

pub mod arithmetic;
pub mod attribute;
pub mod attribute_list;
pub mod data;
pub mod dataset;
pub mod geometry;
pub mod merge;
pub mod names;
pub mod selection;
pub mod sort;
pub mod stitch;
mod tabulated;

pub use arithmetic::DIVISION_THRESHOLD;
pub use attribute::{Attribute, AttributeValue};
pub use attribute_list::AttributeList;
pub use data::{Data, TableKind};
pub use dataset::DataSet;
pub use geometry::{AttributeGeometry, DetectorGeometry};
pub use merge::MergeRule;
pub use selection::SelectionCounter;
pub use sort::SortMethod;
pub use stitch::OverlapPolicy;
