//! Named, typed properties attached to spectra and datasets

use nalgebra::{Matrix3, Vector3};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The value carried by an [`Attribute`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Text(String),
    Int(i64),
    Float(f64),
    FloatList(Vec<f64>),
    IntList(Vec<i64>),
    /// Effective detector position in the sample frame, beam along +x
    Position(Vector3<f64>),
    /// Sample orientation matrix
    Orientation(Matrix3<f64>),
    Other(serde_json::Value),
}

impl AttributeValue {
    /// Number used to order values of mixed kinds
    ///
    /// Values with no natural magnitude sort last.
    pub fn numeric_value(&self) -> f64 {
        match self {
            AttributeValue::Int(v) => *v as f64,
            AttributeValue::Float(v) => *v,
            AttributeValue::FloatList(v) => v.first().copied().unwrap_or(f64::MAX),
            AttributeValue::IntList(v) => v.first().map(|&i| i as f64).unwrap_or(f64::MAX),
            AttributeValue::Position(p) => scattering_angle(p).to_degrees(),
            _ => f64::MAX,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Value as a plain number, for the scalar kinds only
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Int(v) => Some(*v as f64),
            AttributeValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_position(&self) -> Option<&Vector3<f64>> {
        match self {
            AttributeValue::Position(p) => Some(p),
            _ => None,
        }
    }

    /// Default merge of two values of the same kind
    ///
    /// Numbers average, integer lists take the sorted union, float lists
    /// average element-wise when their lengths agree and positions meet at
    /// the midpoint. Anything else, including mismatched kinds, keeps `self`.
    pub fn combine(&self, other: &AttributeValue) -> AttributeValue {
        use AttributeValue::*;
        match (self, other) {
            (Int(a), Int(b)) => Int(((i128::from(*a) + i128::from(*b)) / 2) as i64),
            (Float(a), Float(b)) => Float((a + b) / 2.0),
            (IntList(a), IntList(b)) => {
                let mut ids: Vec<i64> = a.iter().chain(b.iter()).copied().collect();
                ids.sort_unstable();
                ids.dedup();
                IntList(ids)
            }
            (FloatList(a), FloatList(b)) if a.len() == b.len() => {
                FloatList(a.iter().zip(b).map(|(x, y)| (x + y) / 2.0).collect())
            }
            (Position(a), Position(b)) => Position((a + b) / 2.0),
            _ => self.clone(),
        }
    }

    /// Sum two values; kinds without a meaningful sum fall back to
    /// [`combine`](Self::combine)
    ///
    /// Integer sums saturate at the `i64` bounds.
    pub fn add(&self, other: &AttributeValue) -> AttributeValue {
        use AttributeValue::*;
        match (self, other) {
            (Int(a), Int(b)) => Int(a.saturating_add(*b)),
            (Float(a), Float(b)) => Float(a + b),
            (Int(a), Float(b)) | (Float(b), Int(a)) => Float(*a as f64 + b),
            _ => self.combine(other),
        }
    }
}

/// Angle between a position and the +x beam axis, in radians
fn scattering_angle(p: &Vector3<f64>) -> f64 {
    let transverse = (p.y * p.y + p.z * p.z).sqrt();
    transverse.atan2(p.x)
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(s) => f.write_str(s),
            AttributeValue::Int(v) => write!(f, "{v}"),
            AttributeValue::Float(v) => write!(f, "{v}"),
            AttributeValue::FloatList(v) => write_list(f, v),
            AttributeValue::IntList(v) => write_list(f, v),
            AttributeValue::Position(p) => write!(f, "({}, {}, {})", p.x, p.y, p.z),
            AttributeValue::Orientation(m) => {
                let rows: Vec<String> = (0..3)
                    .map(|r| format!("[{}, {}, {}]", m[(r, 0)], m[(r, 1)], m[(r, 2)]))
                    .collect();
                write!(f, "[{}]", rows.join(", "))
            }
            AttributeValue::Other(v) => write!(f, "{v}"),
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

/// Case-insensitive comparison of attribute names
pub(crate) fn names_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}

/// A name paired with a typed value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    name: String,
    value: AttributeValue,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: AttributeValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, AttributeValue::Text(value.into()))
    }

    pub fn int(name: impl Into<String>, value: i64) -> Self {
        Self::new(name, AttributeValue::Int(value))
    }

    pub fn float(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, AttributeValue::Float(value))
    }

    pub fn position(name: impl Into<String>, value: Vector3<f64>) -> Self {
        Self::new(name, AttributeValue::Position(value))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &AttributeValue {
        &self.value
    }

    pub fn set_value(&mut self, value: AttributeValue) {
        self.value = value;
    }

    /// Case-insensitive name match
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    pub fn numeric_value(&self) -> f64 {
        self.value.numeric_value()
    }

    /// Merge with `other`, keeping this attribute's name
    pub fn combine(&self, other: &Attribute) -> Attribute {
        Attribute::new(self.name.clone(), self.value.combine(&other.value))
    }

    /// Sum with `other`, keeping this attribute's name
    pub fn add(&self, other: &Attribute) -> Attribute {
        Attribute::new(self.name.clone(), self.value.add(&other.value))
    }

    /// Ordering used when sorting spectra by an attribute
    ///
    /// Two text values compare lexicographically; every other pairing
    /// compares numeric values.
    pub fn compare(&self, other: &Attribute) -> Ordering {
        match (self.value.as_text(), other.value.as_text()) {
            (Some(a), Some(b)) => a.cmp(b),
            _ => OrderedFloat(self.numeric_value()).cmp(&OrderedFloat(other.numeric_value())),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}
