//! Sort parameters

use std::fmt;

use super::dimension::DimensionParam;
use super::identifier::DimensionIdentifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Case-insensitive parse; anything but `asc`/`desc` is rejected
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// A classified sort parameter
///
/// `index` is the position in the caller's sort list; downstream
/// processing must preserve the caller's ordering even when the list is
/// re-sorted for output.
#[derive(Debug, Clone, PartialEq)]
pub struct SortParam {
    pub index: usize,
    pub identifier: DimensionIdentifier<DimensionParam>,
    pub direction: SortDirection,
}
