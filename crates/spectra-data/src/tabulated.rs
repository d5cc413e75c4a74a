//! Moving a spectrum between representations and grids

use crate::data::{Data, TableKind};
use spectra_core::{
    utils::{bin_centers, bin_edges_from_centers},
    Error, Result,
};
use spectra_resample::{evaluate, rebin, smooth_resample, SmoothMode};
use spectra_scale::{Scale, XScale};
use std::sync::Arc;

impl Data {
    /// Copy this spectrum as `kind`, relabelled with `group_id`
    ///
    /// Histogram to function puts each value at its bin center; function to
    /// histogram builds bins around each point, with the outer edges pushed
    /// out by half a step. With `scale_by_width` the values (and errors)
    /// are divided by the bin width going to a function, and multiplied by
    /// it going to a histogram, turning counts into densities and back.
    /// Counting errors scaled this way become ordinary errors.
    pub fn convert(&self, kind: TableKind, scale_by_width: bool, group_id: i32) -> Result<Data> {
        let mut out = self.clone();
        out.group_id = group_id;
        if kind == self.kind {
            return Ok(out);
        }

        let points = self.scale.values();
        let (new_points, widths) = match kind {
            TableKind::Function => {
                if points.len() < 2 {
                    return Err(Error::EmptyScale(
                        "histogram has no bins to convert".to_string(),
                    ));
                }
                let widths = points.windows(2).map(|w| w[1] - w[0]).collect::<Vec<_>>();
                (bin_centers(&points), widths)
            }
            TableKind::Histogram => {
                let edges = bin_edges_from_centers(&points);
                let widths = edges.windows(2).map(|w| w[1] - w[0]).collect::<Vec<_>>();
                (edges, widths)
            }
        };

        if scale_by_width {
            let factor = |w: f64| match kind {
                TableKind::Function if w > 0.0 => 1.0 / w,
                TableKind::Function => 0.0,
                TableKind::Histogram => w,
            };
            for (y, &w) in out.values.iter_mut().zip(&widths) {
                *y *= factor(w);
            }
            if let Some(errors) = out.errors.as_mut() {
                for (e, &w) in errors.iter_mut().zip(&widths) {
                    *e *= factor(w);
                }
                // Scaled errors are no longer the root of the scaled values
                out.sqrt_errors = false;
            }
        }

        out.kind = kind;
        out.scale = Arc::new(XScale::from_points(&new_points)?);
        Ok(out)
    }

    /// Value at an arbitrary `x`
    ///
    /// Zero outside the grid. Functions interpolate according to `smooth`;
    /// histograms return the count of the bin containing `x`, with the last
    /// edge belonging to the last bin.
    pub fn value_at(&self, x: f64, smooth: SmoothMode) -> f64 {
        if !self.scale.in_range(x) {
            return 0.0;
        }
        match self.kind {
            TableKind::Function => evaluate(&self.scale.values(), &self.values, x, smooth),
            TableKind::Histogram => match self.scale.index_glb(x) {
                Some(i) if !self.values.is_empty() => self.values[i.min(self.values.len() - 1)],
                _ => 0.0,
            },
        }
    }

    /// Values this spectrum would have on `scale`, leaving it untouched
    pub fn values_on(&self, scale: &XScale, smooth: SmoothMode) -> Result<Vec<f64>> {
        if scale.count() == 1 {
            return Ok(vec![self.value_at(scale.start(), smooth)]);
        }
        let mut copy = self.clone();
        copy.resample(Arc::new(scale.clone()), smooth)?;
        Ok(copy.values)
    }

    /// Move onto `scale` in place
    ///
    /// Functions are interpolated with `smooth`; histograms are rebinned,
    /// conserving counts. The old scale is released, not modified.
    pub fn resample(&mut self, scale: Arc<XScale>, smooth: SmoothMode) -> Result<()> {
        let new_x = scale.values();
        self.resample_at(scale, &new_x, smooth)
    }

    /// Move onto `scale`, reading the old spectrum at `new_x` instead of at
    /// the grid's own coordinates
    ///
    /// `new_x` must be as long as `scale` and stay non-decreasing.
    pub(crate) fn resample_at(
        &mut self,
        scale: Arc<XScale>,
        new_x: &[f64],
        smooth: SmoothMode,
    ) -> Result<()> {
        if new_x.len() != scale.count() {
            return Err(Error::size_mismatch(scale.count(), new_x.len(), "resample positions"));
        }
        let old_x = self.scale.values();
        let errors = if self.sqrt_errors {
            None
        } else {
            self.errors.as_deref()
        };
        let out = match self.kind {
            TableKind::Function => smooth_resample(&old_x, &self.values, errors, new_x, smooth)?,
            TableKind::Histogram => rebin(&old_x, &self.values, errors, new_x)?,
        };
        self.values = out.values;
        if self.sqrt_errors {
            self.errors = Some(self.values.iter().map(|y| y.abs().sqrt()).collect());
        } else {
            self.errors = out.errors;
        }
        self.scale = scale;
        Ok(())
    }
}
