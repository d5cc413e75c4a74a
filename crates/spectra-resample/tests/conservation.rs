//! Property tests for the resampling kernels

use approx::assert_relative_eq;
use proptest::prelude::*;
use spectra_resample::{rebin, smooth_resample, SmoothMode};

fn edges_from_gaps(start: f64, gaps: &[f64]) -> Vec<f64> {
    let mut edges = vec![start];
    for gap in gaps {
        let next = edges[edges.len() - 1] + gap;
        edges.push(next);
    }
    edges
}

proptest! {
    #[test]
    fn prop_rebin_conserves_total_counts(
        start in -10.0..10.0f64,
        gaps in prop::collection::vec(0.1..5.0f64, 1..40),
        counts_seed in prop::collection::vec(0.0..1000.0f64, 40),
        new_bins in 1usize..60,
    ) {
        let old_edges = edges_from_gaps(start, &gaps);
        let counts: Vec<f64> = counts_seed[..gaps.len()].to_vec();
        let lo = old_edges[0];
        let hi = old_edges[old_edges.len() - 1];

        // New edges spanning exactly the same range
        let step = (hi - lo) / new_bins as f64;
        let mut new_edges: Vec<f64> = (0..new_bins).map(|i| lo + i as f64 * step).collect();
        new_edges.push(hi);

        let out = rebin(&old_edges, &counts, None, &new_edges).unwrap();
        let before: f64 = counts.iter().sum();
        let after: f64 = out.values.iter().sum();
        prop_assert!((before - after).abs() <= 1e-9 * (1.0 + before));
    }

    #[test]
    fn prop_linear_resample_is_exact_on_lines(
        slope in -5.0..5.0f64,
        intercept in -5.0..5.0f64,
        gaps in prop::collection::vec(0.1..2.0f64, 2..30),
        probes in prop::collection::vec(0.0..1.0f64, 1..20),
    ) {
        let x = edges_from_gaps(0.0, &gaps);
        let y: Vec<f64> = x.iter().map(|v| slope * v + intercept).collect();
        let end = x[x.len() - 1];
        let new_x: Vec<f64> = probes.iter().map(|p| p * end).collect();

        let out = smooth_resample(&x, &y, None, &new_x, SmoothMode::Linear).unwrap();
        for (xi, yi) in new_x.iter().zip(out.values.iter()) {
            let expected = slope * xi + intercept;
            prop_assert!((expected - yi).abs() <= 1e-9 * (1.0 + expected.abs()));
        }
    }
}

#[test]
fn rebin_onto_wider_grid_drops_nothing_inside() {
    let old_edges = [1.0, 2.0, 3.0];
    let counts = [5.0, 7.0];
    let out = rebin(&old_edges, &counts, None, &[0.0, 1.5, 4.0]).unwrap();
    assert_relative_eq!(out.values[0], 2.5);
    assert_relative_eq!(out.values[1], 9.5);
}
