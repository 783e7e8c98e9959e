//! Data elements, tracked-entity attributes, option sets and legend sets

use super::types::ValueType;

/// A tracked-entity attribute declared by a program
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedEntityAttribute {
    pub uid: String,
    pub name: String,
    pub value_type: ValueType,
}

impl TrackedEntityAttribute {
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        TrackedEntityAttribute {
            uid: uid.into(),
            name: name.into(),
            value_type: ValueType::Text,
        }
    }
}

/// A set of coded options backing a data element or attribute
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSet {
    pub uid: String,
    pub options: Vec<OptionItem>,
}

impl OptionSet {
    /// All option uids, in declaration order
    pub fn option_uids(&self) -> Vec<String> {
        self.options.iter().map(|o| o.uid.clone()).collect()
    }

    /// Options whose code matches one of the given values
    pub fn options_by_code<'a>(&'a self, codes: &[String]) -> Vec<&'a OptionItem> {
        self.options
            .iter()
            .filter(|o| codes.iter().any(|c| c == &o.code))
            .collect()
    }
}

/// One option within an option set; grids store the option code
#[derive(Debug, Clone, PartialEq)]
pub struct OptionItem {
    pub uid: String,
    pub name: String,
    pub code: String,
}

/// A legend set backing a numeric item
#[derive(Debug, Clone, PartialEq)]
pub struct LegendSet {
    pub uid: String,
    pub legends: Vec<Legend>,
}

impl LegendSet {
    pub fn legend_uids(&self) -> Vec<String> {
        self.legends.iter().map(|l| l.uid.clone()).collect()
    }
}

/// One legend within a legend set
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub uid: String,
    pub name: String,
    pub code: Option<String>,
}
