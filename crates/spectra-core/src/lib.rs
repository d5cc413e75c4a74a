//! Shared foundations for the spectra crates
//!
//! This crate holds the pieces every other layer depends on: the unified
//! error type, closed intervals over the x axis, and small helpers for
//! turning bin edges into centers and back.
//!
//! # Example
//!
//! ```rust
//! use spectra_core::{utils::bin_centers, ClosedInterval};
//!
//! let edges = [0.0, 1.0, 2.0, 4.0];
//! assert_eq!(bin_centers(&edges), vec![0.5, 1.5, 3.0]);
//!
//! let range = ClosedInterval::new(4.0, 1.0);
//! assert_eq!(range.min(), 1.0);
//! assert!(range.contains(4.0));
//! ```

pub mod error;
pub mod interval;
pub mod utils;

pub use error::{Error, Result};
pub use interval::ClosedInterval;
