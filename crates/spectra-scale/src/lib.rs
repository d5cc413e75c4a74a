//! X-axis grids for tabulated spectra
//!
//! Three grid families share the [`Scale`] contract:
//!
//! - [`UniformXScale`]: evenly spaced points
//! - [`GeometricProgressionXScale`]: each point a fixed ratio above the last
//! - [`VariableXScale`]: an explicit strictly increasing list
//!
//! [`XScale`] wraps all three. Grids are immutable; `extend` and `restrict`
//! build new ones.
//!
//! # Example
//!
//! ```rust
//! use spectra_scale::{Scale, XScale};
//!
//! let grid = XScale::uniform(0.0, 2.0, 5).unwrap();
//! assert_eq!(grid.index_of(0.7), 2);
//! assert_eq!(grid.index_glb(0.7), Some(1));
//! assert_eq!(grid.index_of(3.0), grid.count());
//! ```

pub mod geometric;
pub mod traits;
pub mod uniform;
pub mod variable;
pub mod xscale;

pub use geometric::GeometricProgressionXScale;
pub use traits::Scale;
pub use uniform::UniformXScale;
pub use variable::VariableXScale;
pub use xscale::XScale;
