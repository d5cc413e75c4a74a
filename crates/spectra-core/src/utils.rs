//! Slice and grid helpers shared across crates

/// Minimum and maximum of the finite values in `values`
///
/// NaN entries are skipped. Returns `None` when nothing finite remains.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Midpoints of consecutive bin edges
///
/// `n` edges give `n - 1` centers; fewer than two edges give none.
pub fn bin_centers(edges: &[f64]) -> Vec<f64> {
    edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
}

/// Widths of consecutive bins
pub fn bin_widths(edges: &[f64]) -> Vec<f64> {
    edges.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Bin edges enclosing a list of sample points
///
/// Interior edges sit halfway between neighbouring points. The outer edges
/// are pushed out by half of the adjacent spacing so the first and last
/// points end up centred in their bins. A single point gets a unit-width
/// bin around it; an empty slice gives no edges.
pub fn bin_edges_from_centers(centers: &[f64]) -> Vec<f64> {
    match centers.len() {
        0 => Vec::new(),
        1 => vec![centers[0] - 0.5, centers[0] + 0.5],
        n => {
            let mut edges = Vec::with_capacity(n + 1);
            edges.push(centers[0] - (centers[1] - centers[0]) / 2.0);
            edges.extend(centers.windows(2).map(|w| (w[0] + w[1]) / 2.0));
            edges.push(centers[n - 1] + (centers[n - 1] - centers[n - 2]) / 2.0);
            edges
        }
    }
}

/// True when `values` never decreases
pub fn is_non_decreasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Resize to `len`, padding with zeros or truncating
pub fn fit_length(mut values: Vec<f64>, len: usize) -> Vec<f64> {
    values.resize(len, 0.0);
    values
}
