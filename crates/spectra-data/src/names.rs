//! Well-known attribute names
//!
//! Lookups are case-insensitive, so these spellings are canonical but not
//! required.

pub const TITLE: &str = "DataSet Name";
pub const LABEL: &str = "Label";
pub const RUN_TITLE: &str = "Run Title";
pub const RUN_NUM: &str = "Run Number";
pub const END_DATE: &str = "End Date";
pub const END_TIME: &str = "End Time";
pub const START_DATE: &str = "Start Date";
pub const START_TIME: &str = "Start Time";
pub const DETECTOR_POS: &str = "Effective Position";
pub const RAW_ANGLE: &str = "Raw Detector Angle";
pub const SOLID_ANGLE: &str = "Total Solid Angle";
pub const DELTA_2THETA: &str = "\u{0394}2\u{03b8}";
pub const DETECTOR_IDS: &str = "Detector IDs";
pub const GROUP_ID: &str = "Group ID";
pub const SAMPLE_ORIENTATION: &str = "Sample Orientation";
pub const TEMPERATURE: &str = "Temperature";
pub const NUMBER_OF_PULSES: &str = "Number of Pulses";
pub const TOTAL_COUNT: &str = "Total Count";
pub const ENERGY_IN: &str = "Energy In";
pub const INITIAL_PATH: &str = "Initial Path";
