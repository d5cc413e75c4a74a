//! Shared fixtures for integration tests

#![allow(dead_code)]

use spectra_data::{Attribute, Data, DataSet};
use spectra_scale::{Scale, XScale};

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-10;

/// A function spectrum on a unit-step grid starting at `start`
pub fn function(start: f64, values: &[f64], group_id: i32) -> Data {
    let end = start + values.len().saturating_sub(1) as f64;
    let scale = XScale::uniform(start, end, values.len().max(1)).expect("valid grid");
    Data::function(scale, values.to_vec(), group_id)
}

/// A histogram on the given bin edges
pub fn histogram(edges: &[f64], counts: &[f64], group_id: i32) -> Data {
    let scale = XScale::from_points(edges).expect("valid edges");
    Data::histogram(scale, counts.to_vec(), group_id)
}

/// `f(x)` sampled on `scale`
pub fn sampled(scale: XScale, group_id: i32, f: impl Fn(f64) -> f64) -> Data {
    let values = scale.values().into_iter().map(f).collect();
    Data::function(scale, values, group_id)
}

/// One spectrum per value of `attribute`, with group ids 0, 1, ...
pub fn dataset_with(name: &str, values: &[f64]) -> DataSet {
    let mut ds = DataSet::new("fixture");
    for (i, &v) in values.iter().enumerate() {
        let data = function(0.0, &[v, v], i as i32)
            .with_attribute(Attribute::float(name, v))
            .expect("plain attribute");
        ds.push(data);
    }
    ds
}

pub fn group_ids(ds: &DataSet) -> Vec<i32> {
    ds.iter().map(Data::group_id).collect()
}

/// Values counted by a histogram, or summed by a function
pub fn total(data: &Data) -> f64 {
    data.values().iter().sum()
}
