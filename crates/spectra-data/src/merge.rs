//! Name-keyed rules for merging attributes
//!
//! Most attributes merge by their value kind's default combine. The tables
//! here list the exceptions: a handful of names that keep the first value
//! or are dropped whenever two lists merge, and a further set that is
//! treated specially when two spectra are added.

use crate::attribute::{names_match, Attribute, AttributeValue};
use crate::attribute_list::AttributeList;
use crate::data::Data;
use crate::geometry::DetectorGeometry;
use crate::names;

/// How one named attribute is merged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeRule {
    /// The value kind's own combine
    Default,
    /// First operand's value wins
    KeepFirst,
    /// Removed from the result
    Drop,
    /// Values added
    Sum,
    /// Detector positions averaged with solid-angle weights
    WeightedPosition,
    /// Angular spread widened to cover both raw detector angles
    MaxAngularSpread,
}

/// When an add rule applies, by comparing the operands' group ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Groups {
    Any,
    Same,
    Different,
}

static COMBINE_RULES: &[(&str, MergeRule)] = &[
    (names::RUN_TITLE, MergeRule::KeepFirst),
    (names::GROUP_ID, MergeRule::KeepFirst),
    (names::END_TIME, MergeRule::Drop),
    (names::END_DATE, MergeRule::Drop),
];

static ADD_RULES: &[(&str, Groups, MergeRule)] = &[
    (names::TOTAL_COUNT, Groups::Any, MergeRule::Sum),
    (names::DETECTOR_POS, Groups::Any, MergeRule::WeightedPosition),
    (names::NUMBER_OF_PULSES, Groups::Same, MergeRule::Sum),
    (names::SOLID_ANGLE, Groups::Different, MergeRule::Sum),
    (names::RAW_ANGLE, Groups::Different, MergeRule::KeepFirst),
    (names::DELTA_2THETA, Groups::Different, MergeRule::MaxAngularSpread),
];

/// Rule used by [`AttributeList::combine`] for `name`
pub fn combine_rule(name: &str) -> MergeRule {
    COMBINE_RULES
        .iter()
        .find(|(rule_name, _)| names_match(rule_name, name))
        .map(|(_, rule)| *rule)
        .unwrap_or(MergeRule::Default)
}

/// Attributes of the sum of two spectra
///
/// Starts from the general list merge, then applies the add-specific rules.
pub fn combine_for_add(first: &Data, second: &Data, geometry: &dyn DetectorGeometry) -> AttributeList {
    let mut merged = first.attributes().combine(second.attributes());
    let same_group = first.group_id() == second.group_id();

    for &(name, groups, rule) in ADD_RULES {
        let applies = match groups {
            Groups::Any => true,
            Groups::Same => same_group,
            Groups::Different => !same_group,
        };
        if applies {
            apply_add_rule(&mut merged, name, rule, first, second, geometry);
        }
    }
    merged
}

fn apply_add_rule(
    merged: &mut AttributeList,
    name: &str,
    rule: MergeRule,
    first: &Data,
    second: &Data,
    geometry: &dyn DetectorGeometry,
) {
    let mine = first.attributes().get(name);
    let theirs = second.attributes().get(name);

    match rule {
        MergeRule::Sum => {
            if let (Some(a), Some(b)) = (mine, theirs) {
                merged.set(a.add(b));
            }
        }
        MergeRule::KeepFirst => {
            if let Some(a) = mine {
                merged.set(a.clone());
            }
        }
        MergeRule::Drop => {
            merged.remove(name);
        }
        MergeRule::WeightedPosition => {
            let positions = geometry.position(first).zip(geometry.position(second));
            let weights = geometry.solid_angle(first).zip(geometry.solid_angle(second));
            if let (Some((p1, p2)), Some((w1, w2))) = (positions, weights) {
                let total = w1 + w2;
                if total > 0.0 {
                    let position = (p1 * w1 + p2 * w2) / total;
                    merged.set(Attribute::position(name, position));
                }
            }
        }
        MergeRule::MaxAngularSpread => {
            let raw = |d: &Data| d.attributes().value(names::RAW_ANGLE).and_then(AttributeValue::as_f64);
            if let (Some(r1), Some(r2)) = (raw(first), raw(second)) {
                let spread = (r1 - r2).abs();
                let existing = mine.and_then(|a| a.value().as_f64());
                let delta = existing.map_or(spread, |d| d.max(spread));
                merged.set(Attribute::float(name, delta));
            }
        }
        MergeRule::Default => {}
    }
}
