//! Reordering a data set by an attribute of its spectra

use crate::attribute::Attribute;
use crate::dataset::DataSet;
use serde::{Deserialize, Serialize};
use spectra_core::{Error, Result};
use tracing::{debug, instrument};

/// Sorting algorithm for [`DataSet::sort`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortMethod {
    /// Entries comparing equal keep their relative order
    #[default]
    Stable,
    /// Faster; equal entries may be reordered
    Quick,
}

impl DataSet {
    /// Order the spectra by the value of attribute `name`
    ///
    /// Text attributes compare lexically, all others by their numeric
    /// value. Fails without touching the set if any spectrum lacks the
    /// attribute. On success every spectrum is labelled by the attribute.
    #[instrument(skip(self), fields(len = self.len()))]
    pub fn sort(&mut self, name: &str, increasing: bool, method: SortMethod) -> Result<()> {
        let keys = self
            .iter()
            .enumerate()
            .map(|(i, d)| d.attribute(name).ok_or_else(|| Error::missing_attribute(name, i)))
            .collect::<Result<Vec<Attribute>>>()?;

        let mut order: Vec<usize> = (0..keys.len()).collect();
        let cmp = |a: &usize, b: &usize| {
            if increasing {
                keys[*a].compare(&keys[*b])
            } else {
                keys[*b].compare(&keys[*a])
            }
        };
        match method {
            SortMethod::Stable => order.sort_by(cmp),
            SortMethod::Quick => order.sort_unstable_by(cmp),
        }

        let data = self.data_mut();
        let mut slots: Vec<_> = data.drain(..).map(Some).collect();
        data.extend(order.iter().filter_map(|&i| slots[i].take()));
        debug!(?order, "sorted");

        self.last_sort_attribute = Some(name.to_string());
        self.set_data_label(name);
        self.add_log_message(format!(
            "Sorted by {name} ({})",
            if increasing { "increasing" } else { "decreasing" }
        ));
        Ok(())
    }
}
