//! Detector placement as seen by attribute merging

use crate::data::Data;
use crate::names;
use nalgebra::Vector3;

/// Supplies where a spectrum's detector sits and how much solid angle it
/// covers
///
/// Instrument geometry lives outside this crate; implementors adapt it.
pub trait DetectorGeometry {
    fn position(&self, data: &Data) -> Option<Vector3<f64>>;

    fn solid_angle(&self, data: &Data) -> Option<f64>;
}

/// Reads position and solid angle straight from a spectrum's attributes
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeGeometry;

impl DetectorGeometry for AttributeGeometry {
    fn position(&self, data: &Data) -> Option<Vector3<f64>> {
        data.attributes()
            .value(names::DETECTOR_POS)
            .and_then(|v| v.as_position())
            .copied()
    }

    fn solid_angle(&self, data: &Data) -> Option<f64> {
        data.attributes()
            .value(names::SOLID_ANGLE)
            .and_then(|v| v.as_f64())
    }
}
