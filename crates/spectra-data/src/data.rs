//! A single tabulated spectrum

use crate::attribute::{names_match, Attribute, AttributeValue};
use crate::attribute_list::AttributeList;
use crate::names;
use crate::selection::SelectionCounter;
use serde::{Deserialize, Serialize};
use spectra_core::{utils::fit_length, Error, Result};
use spectra_scale::{Scale, XScale};
use std::sync::Arc;

/// Whether values sit on grid points or between them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableKind {
    /// One value per grid point
    Function,
    /// One count per bin between consecutive grid points
    Histogram,
}

impl TableKind {
    /// Number of samples a grid with `points` points carries
    pub fn sample_count(self, points: usize) -> usize {
        match self {
            TableKind::Function => points,
            TableKind::Histogram => points.saturating_sub(1),
        }
    }
}

/// One spectrum: a grid, values on it, optional errors and metadata
///
/// Scales are shared through `Arc` and never mutated; resampling swaps in a
/// new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Data {
    pub(crate) group_id: i32,
    pub(crate) kind: TableKind,
    pub(crate) scale: Arc<XScale>,
    pub(crate) values: Vec<f64>,
    pub(crate) errors: Option<Vec<f64>>,
    pub(crate) sqrt_errors: bool,
    pub(crate) attributes: AttributeList,
    pub(crate) selection: u64,
    pub(crate) hidden: bool,
    pub(crate) label: String,
}

impl Data {
    fn with_kind(kind: TableKind, scale: Arc<XScale>, values: Vec<f64>, group_id: i32) -> Self {
        let len = kind.sample_count(scale.count());
        Self {
            group_id,
            kind,
            scale,
            values: fit_length(values, len),
            errors: None,
            sqrt_errors: false,
            attributes: AttributeList::new(),
            selection: 0,
            hidden: false,
            label: names::GROUP_ID.to_string(),
        }
    }

    /// Values at each grid point; padded with zeros or truncated to fit
    pub fn function(scale: impl Into<Arc<XScale>>, values: Vec<f64>, group_id: i32) -> Self {
        Self::with_kind(TableKind::Function, scale.into(), values, group_id)
    }

    /// Counts per bin; padded with zeros or truncated to fit
    pub fn histogram(scale: impl Into<Arc<XScale>>, values: Vec<f64>, group_id: i32) -> Self {
        Self::with_kind(TableKind::Histogram, scale.into(), values, group_id)
    }

    /// Pick function or histogram from how many values there are
    pub fn from_values(scale: impl Into<Arc<XScale>>, values: Vec<f64>, group_id: i32) -> Result<Self> {
        let scale = scale.into();
        let points = scale.count();
        let kind = if values.len() == points {
            TableKind::Function
        } else if values.len() + 1 == points {
            TableKind::Histogram
        } else {
            return Err(Error::size_mismatch(points, values.len(), "values for scale"));
        };
        Ok(Self::with_kind(kind, scale, values, group_id))
    }

    /// Attach errors, padded or truncated to the value count
    pub fn with_errors(mut self, errors: Vec<f64>) -> Self {
        self.set_errors(Some(errors));
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Result<Self> {
        self.set_attribute(attribute)?;
        Ok(self)
    }

    pub fn group_id(&self) -> i32 {
        self.group_id
    }

    pub fn set_group_id(&mut self, group_id: i32) {
        self.group_id = group_id;
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn is_histogram(&self) -> bool {
        self.kind == TableKind::Histogram
    }

    pub fn is_function(&self) -> bool {
        self.kind == TableKind::Function
    }

    pub fn scale(&self) -> &Arc<XScale> {
        &self.scale
    }

    /// Grid coordinates: sample positions for functions, bin edges for
    /// histograms
    pub fn x_values(&self) -> Vec<f64> {
        self.scale.values()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Replace the values, padded or truncated to fit the grid
    pub fn set_values(&mut self, values: Vec<f64>) {
        let len = self.values.len();
        self.values = fit_length(values, len);
        if self.sqrt_errors {
            self.fill_sqrt_errors();
        }
    }

    pub fn errors(&self) -> Option<&[f64]> {
        self.errors.as_deref()
    }

    /// Replace the errors; `None` removes them
    pub fn set_errors(&mut self, errors: Option<Vec<f64>>) {
        let len = self.values.len();
        self.errors = errors.map(|e| fit_length(e, len));
        self.sqrt_errors = false;
    }

    pub fn has_sqrt_errors(&self) -> bool {
        self.sqrt_errors
    }

    /// Use `sqrt(|y|)` as the errors, or drop them again
    pub fn set_sqrt_errors(&mut self, enabled: bool) {
        if enabled {
            self.fill_sqrt_errors();
        } else if self.sqrt_errors {
            self.errors = None;
        }
        self.sqrt_errors = enabled;
    }

    fn fill_sqrt_errors(&mut self) {
        self.errors = Some(self.values.iter().map(|y| y.abs().sqrt()).collect());
    }

    /// Attributes, not including the synthesised group id
    pub fn attributes(&self) -> &AttributeList {
        &self.attributes
    }

    /// Attributes with the group id first
    pub fn attribute_list(&self) -> AttributeList {
        let mut list = self.attributes.clone();
        list.set_at(self.group_id_attribute(), 0);
        list
    }

    fn group_id_attribute(&self) -> Attribute {
        Attribute::int(names::GROUP_ID, i64::from(self.group_id))
    }

    pub fn attribute(&self, name: &str) -> Option<Attribute> {
        if names_match(name, names::GROUP_ID) {
            return Some(self.group_id_attribute());
        }
        self.attributes.get(name).cloned()
    }

    pub fn attribute_value(&self, name: &str) -> Option<AttributeValue> {
        self.attribute(name).map(|a| a.value().clone())
    }

    /// Set an attribute; setting the group id updates the id itself
    ///
    /// A group id that is not a whole number within `i32` is rejected and
    /// leaves the spectrum unchanged.
    pub fn set_attribute(&mut self, attribute: Attribute) -> Result<()> {
        if attribute.is_named(names::GROUP_ID) {
            self.group_id = group_id_from(attribute.value())?;
            return Ok(());
        }
        self.attributes.set(attribute);
        Ok(())
    }

    /// Set each attribute of `list` in order, stopping at the first rejected
    pub fn set_attributes(&mut self, list: AttributeList) -> Result<()> {
        for attribute in list.iter() {
            self.set_attribute(attribute.clone())?;
        }
        Ok(())
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<Attribute> {
        self.attributes.remove(name)
    }

    /// Display label: the value of the attribute named by the label, or
    /// the label text itself when no such attribute exists
    pub fn label(&self) -> String {
        match self.attribute(&self.label) {
            Some(attribute) => attribute.value().to_string(),
            None => self.label.clone(),
        }
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn is_selected(&self) -> bool {
        self.selection != 0
    }

    /// Recency tag of the last selection, 0 when unselected
    pub fn selection_tag(&self) -> u64 {
        self.selection
    }

    pub fn set_selected(&mut self, selected: bool, counter: &SelectionCounter) {
        self.selection = if selected { counter.next_tag() } else { 0 };
    }

    pub fn toggle_selected(&mut self, counter: &SelectionCounter) {
        let selected = !self.is_selected();
        self.set_selected(selected, counter);
    }

    pub fn is_most_recently_selected(&self, counter: &SelectionCounter) -> bool {
        self.selection != 0 && self.selection == counter.current()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn toggle_hidden(&mut self) {
        self.hidden = !self.hidden;
    }
}

fn group_id_from(value: &AttributeValue) -> Result<i32> {
    let id = match value {
        AttributeValue::Int(v) => i32::try_from(*v).ok(),
        AttributeValue::Float(v)
            if v.fract() == 0.0 && (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(v) =>
        {
            Some(*v as i32)
        }
        _ => None,
    };
    id.ok_or_else(|| Error::InvalidParameter(format!("group id {value} is not a 32-bit integer")))
}
