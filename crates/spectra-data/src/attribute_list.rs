//! Ordered bag of attributes with unique, case-insensitive names

use crate::attribute::{Attribute, AttributeValue};
use crate::merge::{combine_rule, MergeRule};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeList {
    attributes: Vec<Attribute>,
}

impl AttributeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.is_named(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.is_named(name))
    }

    pub fn get_at(&self, index: usize) -> Option<&Attribute> {
        self.attributes.get(index)
    }

    pub fn value(&self, name: &str) -> Option<&AttributeValue> {
        self.get(name).map(Attribute::value)
    }

    /// Insert or overwrite by name; new names go to the end
    pub fn set(&mut self, attribute: Attribute) {
        match self.position(attribute.name()) {
            Some(i) => self.attributes[i] = attribute,
            None => self.attributes.push(attribute),
        }
    }

    /// Overwrite by name, or insert a new name at `index`
    ///
    /// An index past the end appends.
    pub fn set_at(&mut self, attribute: Attribute, index: usize) {
        match self.position(attribute.name()) {
            Some(i) => self.attributes[i] = attribute,
            None => {
                let index = index.min(self.attributes.len());
                self.attributes.insert(index, attribute);
            }
        }
    }

    /// Append only if the name is not already present
    pub fn add(&mut self, attribute: Attribute) -> bool {
        if self.contains(attribute.name()) {
            return false;
        }
        self.attributes.push(attribute);
        true
    }

    pub fn remove(&mut self, name: &str) -> Option<Attribute> {
        self.position(name).map(|i| self.attributes.remove(i))
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Attribute> {
        (index < self.attributes.len()).then(|| self.attributes.remove(index))
    }

    /// Merge with another list
    ///
    /// Only names in this list survive. Names present in both are merged
    /// with their registered rule, which defaults to the value kind's own
    /// combine.
    pub fn combine(&self, other: &AttributeList) -> AttributeList {
        let attributes = self
            .attributes
            .iter()
            .filter_map(|mine| {
                let Some(theirs) = other.get(mine.name()) else {
                    return Some(mine.clone());
                };
                match combine_rule(mine.name()) {
                    MergeRule::Drop => None,
                    MergeRule::KeepFirst => Some(mine.clone()),
                    _ => Some(mine.combine(theirs)),
                }
            })
            .collect();
        AttributeList { attributes }
    }
}

impl FromIterator<Attribute> for AttributeList {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut list = AttributeList::new();
        for attribute in iter {
            list.set(attribute);
        }
        list
    }
}

impl<'a> IntoIterator for &'a AttributeList {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}
