//! Arithmetic, conversion and stitching across grids and kinds

mod common;

use common::*;
use proptest::prelude::*;
use spectra_data::{names, Attribute, AttributeValue, OverlapPolicy, TableKind};
use spectra_resample::SmoothMode;
use spectra_scale::{Scale, XScale};
use std::sync::Arc;

#[test]
fn test_histogram_round_trip_on_variable_bins() {
    let h = histogram(&[0.0, 1.0, 3.0, 6.0], &[4.0, 6.0, 9.0], 1).with_errors(vec![2.0, 3.0, 3.0]);
    let f = h.convert(TableKind::Function, true, 1).unwrap();
    assert_eq!(f.values(), &[4.0, 3.0, 3.0]);

    let back = f.convert(TableKind::Histogram, true, 1).unwrap();
    assert_eq!(back.values().len(), 3);
    let edges = back.x_values();
    assert_relative_eq!(edges[1], 1.25);
    assert!(back.errors().is_some());
}

#[test]
fn test_shared_scale_survives_resample() {
    let grid = Arc::new(XScale::uniform(0.0, 4.0, 5).unwrap());
    let a = spectra_data::Data::function(grid.clone(), vec![1.0; 5], 1);
    let mut b = spectra_data::Data::function(grid.clone(), vec![0.0, 1.0, 2.0, 3.0, 4.0], 2);

    b.resample(Arc::new(XScale::uniform(0.0, 4.0, 9).unwrap()), SmoothMode::Linear)
        .unwrap();
    assert_eq!(b.values()[1], 0.5);
    assert!(Arc::ptr_eq(a.scale(), &grid));
    assert_eq!(grid.count(), 5);
}

#[test]
fn test_add_onto_geometric_grid() {
    let coarse = XScale::geometric(1.0, 16.0, 1.0).unwrap();
    let fine = XScale::uniform(1.0, 16.0, 31).unwrap();
    let a = sampled(coarse, 1, |x| 2.0 * x);
    let b = sampled(fine, 2, |x| x + 1.0);

    let sum = a.add(&b).unwrap();
    assert_eq!(sum.values().len(), a.values().len());
    for (x, y) in sum.x_values().iter().zip(sum.values()) {
        assert_relative_eq!(*y, 3.0 * x + 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_divide_by_histogram_monitor() {
    let signal = histogram(&[0.0, 1.0, 2.0, 3.0], &[10.0, 20.0, 30.0], 1);
    let monitor = histogram(&[0.0, 1.0, 2.0, 3.0], &[2.0, 0.001, 5.0], 0);
    let normalised = signal.divide(&monitor).unwrap();
    assert_eq!(normalised.values(), &[5.0, 0.0, 6.0]);
    assert!(normalised.errors().is_none());
}

#[test]
fn test_sqrt_errors_propagate() {
    let mut a = histogram(&[0.0, 1.0, 2.0], &[16.0, 9.0], 1);
    let mut b = histogram(&[0.0, 1.0, 2.0], &[9.0, 16.0], 2);
    a.set_sqrt_errors(true);
    b.set_sqrt_errors(true);
    let sum = a.add(&b).unwrap();
    assert_eq!(sum.values(), &[25.0, 25.0]);
    for e in sum.errors().unwrap() {
        assert_relative_eq!(*e, 5.0);
    }
    assert!(!sum.has_sqrt_errors());
}

#[test]
fn test_counting_errors_survive_density_conversion() {
    let mut counts = histogram(&[0.0, 0.5, 1.0, 1.5], &[4.0, 4.0, 4.0], 2);
    counts.set_sqrt_errors(true);
    let base = sampled(XScale::uniform(0.25, 1.25, 5).unwrap(), 1, |_| 0.0).with_errors(vec![0.0; 5]);

    let sum = base.add(&counts).unwrap();
    for (y, e) in sum.values().iter().zip(sum.errors().unwrap()) {
        assert_relative_eq!(*y, 8.0, epsilon = EPSILON);
        assert_relative_eq!(*e, 4.0, epsilon = EPSILON);
    }
}

#[test]
fn test_add_merges_detector_attributes() {
    let mut a = function(0.0, &[1.0, 1.0], 1);
    let mut b = function(0.0, &[1.0, 1.0], 2);
    a.set_attributes(
        [
            Attribute::float(names::RAW_ANGLE, 40.0),
            Attribute::float(names::TOTAL_COUNT, 100.0),
            Attribute::text(names::RUN_TITLE, "cold run"),
            Attribute::text(names::END_DATE, "2003-01-02"),
        ]
        .into_iter()
        .collect(),
    )
    .unwrap();
    b.set_attributes(
        [
            Attribute::float(names::RAW_ANGLE, 43.0),
            Attribute::float(names::TOTAL_COUNT, 50.0),
            Attribute::text(names::RUN_TITLE, "warm run"),
            Attribute::text(names::END_DATE, "2003-01-03"),
        ]
        .into_iter()
        .collect(),
    )
    .unwrap();

    let sum = a.add(&b).unwrap();
    let attributes = sum.attributes();
    assert_eq!(attributes.value(names::TOTAL_COUNT), Some(&AttributeValue::Float(150.0)));
    assert_eq!(attributes.value(names::RAW_ANGLE), Some(&AttributeValue::Float(40.0)));
    assert_eq!(attributes.value(names::DELTA_2THETA), Some(&AttributeValue::Float(3.0)));
    assert_eq!(attributes.value(names::RUN_TITLE).and_then(|v| v.as_text()), Some("cold run"));
    assert!(!attributes.contains(names::END_DATE));
}

#[test]
fn test_stitch_histograms_conserves_outside_overlap() {
    let low = histogram(&[0.0, 1.0, 2.0, 3.0], &[5.0, 5.0, 5.0], 1);
    let high = histogram(&[2.0, 3.0, 4.0, 5.0], &[7.0, 7.0, 7.0], 2);
    let joined = low.stitch(&high, OverlapPolicy::Discard).unwrap();
    assert_eq!(joined.values(), &[5.0, 5.0, 7.0, 7.0, 7.0]);
    assert_relative_eq!(total(&joined), 31.0);
}

#[test]
fn test_stitch_mixed_kinds() {
    let f = function(0.0, &[1.0, 1.0, 1.0], 1);
    let h = histogram(&[1.5, 2.5, 3.5], &[4.0, 4.0], 2);
    let joined = f.stitch(&h, OverlapPolicy::Keep).unwrap();
    assert!(joined.is_function());
    assert_eq!(joined.values()[0], 1.0);
    assert_eq!(joined.values()[2], 1.0);
    assert_relative_eq!(joined.values()[3], 4.0, epsilon = EPSILON);
}

#[test]
fn test_values_on_leaves_original() {
    let f = sampled(XScale::uniform(0.0, 10.0, 11).unwrap(), 1, |x| x * x);
    let target = XScale::variable(vec![0.5, 2.0, 9.5]).unwrap();
    let values = f.values_on(&target, SmoothMode::Linear).unwrap();
    assert_relative_eq!(values[0], 0.5);
    assert_relative_eq!(values[1], 4.0);
    assert_relative_eq!(values[2], 90.5);
    assert_eq!(f.values().len(), 11);
}

proptest! {
    #[test]
    fn prop_rebinned_histogram_keeps_total(
        counts in prop::collection::vec(0.0f64..1e4, 1..40),
        bins in 1usize..80,
    ) {
        let n = counts.len();
        let mut h = histogram(
            &(0..=n).map(|i| i as f64).collect::<Vec<_>>(),
            &counts,
            1,
        );
        let before = total(&h);
        h.resample(Arc::new(XScale::uniform(-1.0, n as f64 + 1.0, bins + 1).unwrap()), SmoothMode::Linear)
            .unwrap();
        prop_assert!((total(&h) - before).abs() <= 1e-9 * before.max(1.0));
    }

    #[test]
    fn prop_subtract_undoes_add(values in prop::collection::vec(-1e3f64..1e3, 2..30)) {
        let a = function(0.0, &values, 1);
        let b = function(0.0, &values.iter().map(|v| v * 0.5 + 1.0).collect::<Vec<_>>(), 2);
        let back = a.add(&b).unwrap().subtract(&b).unwrap();
        for (got, want) in back.values().iter().zip(&values) {
            prop_assert!((got - want).abs() <= 1e-9 * (1.0 + want.abs()));
        }
    }
}
