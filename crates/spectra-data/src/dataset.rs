//! An ordered collection of spectra with shared metadata

use crate::attribute_list::AttributeList;
use crate::data::Data;
use crate::selection::SelectionCounter;
use serde::{Deserialize, Serialize};
use spectra_core::{utils::min_max, ClosedInterval, Error, Result};
use spectra_scale::{Scale, UniformXScale};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

static NEXT_TAG: AtomicU64 = AtomicU64::new(1);

fn next_tag() -> u64 {
    NEXT_TAG.fetch_add(1, Ordering::Relaxed)
}

/// Spectra in a meaningful order, plus the attributes and labels they share
///
/// Group ids are expected to be unique within a set; lookups by id return
/// the first match. Every set gets a process-unique [`tag`](Self::tag)
/// recording creation order, and a clone is a new set with a new tag.
#[derive(Debug, Serialize, Deserialize)]
pub struct DataSet {
    title: String,
    x_units: String,
    x_label: String,
    y_units: String,
    y_label: String,
    attributes: AttributeList,
    data: Vec<Data>,
    #[serde(skip, default = "next_tag")]
    tag: u64,
    op_log: Vec<String>,
    pointed_at_index: Option<usize>,
    pointed_at_x: Option<f64>,
    selected_interval: Option<ClosedInterval>,
    pub(crate) last_sort_attribute: Option<String>,
}

impl Default for DataSet {
    fn default() -> Self {
        Self::new("")
    }
}

impl Clone for DataSet {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            ..self.empty_clone()
        }
    }
}

impl DataSet {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_units: String::new(),
            x_label: String::new(),
            y_units: String::new(),
            y_label: String::new(),
            attributes: AttributeList::new(),
            data: Vec::new(),
            tag: next_tag(),
            op_log: Vec::new(),
            pointed_at_index: None,
            pointed_at_x: None,
            selected_interval: None,
            last_sort_attribute: None,
        }
    }

    /// A new set with this one's metadata and no spectra
    pub fn empty_clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            x_units: self.x_units.clone(),
            x_label: self.x_label.clone(),
            y_units: self.y_units.clone(),
            y_label: self.y_label.clone(),
            attributes: self.attributes.clone(),
            data: Vec::new(),
            tag: next_tag(),
            op_log: self.op_log.clone(),
            pointed_at_index: self.pointed_at_index,
            pointed_at_x: self.pointed_at_x,
            selected_interval: self.selected_interval,
            last_sort_attribute: self.last_sort_attribute.clone(),
        }
    }

    /// Creation-order tag, unique within the process
    pub fn tag(&self) -> u64 {
        self.tag
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn x_units(&self) -> &str {
        &self.x_units
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_units(&self) -> &str {
        &self.y_units
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn set_x_axis(&mut self, label: impl Into<String>, units: impl Into<String>) {
        self.x_label = label.into();
        self.x_units = units.into();
    }

    pub fn set_y_axis(&mut self, label: impl Into<String>, units: impl Into<String>) {
        self.y_label = label.into();
        self.y_units = units.into();
    }

    /// Whether both axes carry the same units as `other`'s
    pub fn same_units(&self, other: &DataSet) -> bool {
        self.x_units == other.x_units && self.y_units == other.y_units
    }

    pub fn attributes(&self) -> &AttributeList {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeList {
        &mut self.attributes
    }

    /// Merge `other`'s set-level attributes into this set's
    pub fn combine_attributes(&mut self, other: &DataSet) {
        self.attributes = self.attributes.combine(&other.attributes);
    }

    pub fn add_log_message(&mut self, message: impl Into<String>) {
        self.op_log.push(message.into());
    }

    pub fn op_log(&self) -> &[String] {
        &self.op_log
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Data> {
        self.data.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Data> {
        self.data.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Data> {
        self.data.get_mut(index)
    }

    /// Index of the first spectrum with `group_id`
    pub fn index_of_id(&self, group_id: i32) -> Option<usize> {
        self.data.iter().position(|d| d.group_id() == group_id)
    }

    pub fn get_by_id(&self, group_id: i32) -> Option<&Data> {
        self.index_of_id(group_id).map(|i| &self.data[i])
    }

    pub fn push(&mut self, data: Data) {
        self.data.push(data);
    }

    /// Insert at `index`, or append when `index` is past the end
    pub fn insert(&mut self, index: usize, data: Data) {
        if index < self.data.len() {
            self.data.insert(index, data);
        } else {
            self.data.push(data);
        }
    }

    /// Put `data` at `index`, returning what was there
    pub fn replace(&mut self, index: usize, data: Data) -> Result<Data> {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, data)),
            None => Err(Error::IndexOutOfRange { index, len }),
        }
    }

    /// Replace the spectrum sharing `data`'s group id; false if none does
    pub fn replace_with_id(&mut self, data: Data) -> bool {
        match self.index_of_id(data.group_id()) {
            Some(i) => {
                self.data[i] = data;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<Data> {
        (index < self.data.len()).then(|| self.data.remove(index))
    }

    pub fn remove_with_id(&mut self, group_id: i32) -> Option<Data> {
        let index = self.index_of_id(group_id)?;
        Some(self.data.remove(index))
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub(crate) fn data_mut(&mut self) -> &mut Vec<Data> {
        &mut self.data
    }

    fn valid_index(&self, index: usize, op: &str) -> bool {
        let ok = index < self.data.len();
        if !ok {
            warn!(index, len = self.data.len(), op, "index out of range, ignored");
        }
        ok
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.data.get(index).is_some_and(Data::is_selected)
    }

    pub fn set_selected(&mut self, index: usize, selected: bool, counter: &SelectionCounter) {
        if self.valid_index(index, "set_selected") {
            self.data[index].set_selected(selected, counter);
        }
    }

    pub fn toggle_selected(&mut self, index: usize, counter: &SelectionCounter) {
        if self.valid_index(index, "toggle_selected") {
            self.data[index].toggle_selected(counter);
        }
    }

    pub fn clear_selections(&mut self) {
        for d in &mut self.data {
            d.selection = 0;
        }
    }

    pub fn num_selected(&self) -> usize {
        self.data.iter().filter(|d| d.is_selected()).count()
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_selected())
            .map(|(i, _)| i)
            .collect()
    }

    /// Index of the spectrum selected last, among those still selected
    pub fn most_recently_selected_index(&self) -> Option<usize> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_selected())
            .max_by_key(|(_, d)| d.selection_tag())
            .map(|(i, _)| i)
    }

    pub fn is_hidden(&self, index: usize) -> bool {
        self.data.get(index).is_some_and(Data::is_hidden)
    }

    pub fn set_hidden(&mut self, index: usize, hidden: bool) {
        if self.valid_index(index, "set_hidden") {
            self.data[index].set_hidden(hidden);
        }
    }

    /// Hide every spectrum whose selection state equals `status`
    pub fn hide_selected(&mut self, status: bool) {
        for d in self.data.iter_mut().filter(|d| d.is_selected() == status) {
            d.set_hidden(true);
        }
    }

    pub fn clear_hide_flags(&mut self) {
        for d in &mut self.data {
            d.set_hidden(false);
        }
    }

    pub fn num_hidden(&self) -> usize {
        self.data.iter().filter(|d| d.is_hidden()).count()
    }

    /// Drop every spectrum whose selection state equals `status`
    pub fn remove_selected(&mut self, status: bool) {
        self.data.retain(|d| d.is_selected() != status);
    }

    /// Give every spectrum whose selection state equals `status` one new,
    /// shared group id
    pub fn group_selected(&mut self, status: bool) {
        let id = self.max_group_id().map_or(0, |m| m + 1);
        for d in self.data.iter_mut().filter(|d| d.is_selected() == status) {
            d.set_group_id(id);
        }
    }

    pub fn clear_group_ids(&mut self) {
        for d in &mut self.data {
            d.set_group_id(-1);
        }
    }

    pub fn max_group_id(&self) -> Option<i32> {
        self.data.iter().map(Data::group_id).max()
    }

    /// Use attribute `name` as every spectrum's label
    pub fn set_data_label(&mut self, name: &str) {
        for d in &mut self.data {
            d.set_label(name);
        }
    }

    /// Attribute of the most recent sort, if any
    pub fn last_sort_attribute(&self) -> Option<&str> {
        self.last_sort_attribute.as_deref()
    }

    pub fn pointed_at_index(&self) -> Option<usize> {
        self.pointed_at_index
    }

    pub fn set_pointed_at_index(&mut self, index: Option<usize>) {
        self.pointed_at_index = index;
    }

    pub fn pointed_at_x(&self) -> Option<f64> {
        self.pointed_at_x
    }

    pub fn set_pointed_at_x(&mut self, x: Option<f64>) {
        self.pointed_at_x = x;
    }

    pub fn selected_interval(&self) -> Option<ClosedInterval> {
        self.selected_interval
    }

    pub fn set_selected_interval(&mut self, interval: Option<ClosedInterval>) {
        self.selected_interval = interval;
    }

    /// Largest point count of any spectrum's grid
    pub fn max_x_steps(&self) -> usize {
        self.data.iter().map(|d| d.scale().count()).max().unwrap_or(0)
    }

    /// A uniform grid spanning every spectrum's x range with
    /// [`max_x_steps`](Self::max_x_steps) points
    pub fn x_range(&self) -> Option<UniformXScale> {
        let (lo, hi) = self.data.iter().fold(None, |acc: Option<(f64, f64)>, d| {
            let (s, e) = (d.scale().start(), d.scale().end());
            Some(acc.map_or((s, e), |(lo, hi)| (lo.min(s), hi.max(e))))
        })?;
        let steps = if lo == hi { 1 } else { self.max_x_steps().max(2) };
        UniformXScale::new(lo, hi, steps).ok()
    }

    /// Smallest and largest value across every spectrum
    pub fn y_range(&self) -> Option<ClosedInterval> {
        self.data
            .iter()
            .filter_map(|d| min_max(d.values()))
            .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)))
            .map(|(lo, hi)| ClosedInterval::new(lo, hi))
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a Data;
    type IntoIter = std::slice::Iter<'a, Data>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
