//! Shared value-level types for reference entities

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Value type of a data element or tracked-entity attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    Text,
    LongText,
    Number,
    Integer,
    Boolean,
    Date,
    DateTime,
    OrganisationUnit,
    Username,
    Coordinate,
}

impl Default for ValueType {
    fn default() -> Self {
        ValueType::Text
    }
}

impl ValueType {
    pub fn is_organisation_unit(&self) -> bool {
        matches!(self, ValueType::OrganisationUnit)
    }
}

/// Identifier scheme used when rendering dimension items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IdScheme {
    Uid,
    Code,
    Name,
}

impl Default for IdScheme {
    fn default() -> Self {
        IdScheme::Uid
    }
}

impl fmt::Display for IdScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdScheme::Uid => write!(f, "UID"),
            IdScheme::Code => write!(f, "CODE"),
            IdScheme::Name => write!(f, "NAME"),
        }
    }
}

/// Which display property of an entity is rendered in responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DisplayProperty {
    Name,
    ShortName,
}

impl Default for DisplayProperty {
    fn default() -> Self {
        DisplayProperty::Name
    }
}

impl FromStr for DisplayProperty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NAME" => Ok(DisplayProperty::Name),
            "SHORTNAME" => Ok(DisplayProperty::ShortName),
            other => Err(format!("Unknown display property: {other}")),
        }
    }
}
