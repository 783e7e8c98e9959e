//! Response-side nouns: result grid, pagers, metadata payload

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// One column of a result grid; `name` is the qualified dimension key
#[derive(Debug, Clone, PartialEq)]
pub struct GridHeader {
    pub name: String,
    pub column: String,
}

impl GridHeader {
    pub fn new(name: impl Into<String>, column: impl Into<String>) -> Self {
        GridHeader {
            name: name.into(),
            column: column.into(),
        }
    }
}

/// A SQL result grid as delivered by the query layer
#[derive(Debug, Clone, Default)]
pub struct Grid {
    pub headers: Vec<GridHeader>,
    pub rows: Vec<Vec<Value>>,
}

impl Grid {
    pub fn new(headers: Vec<GridHeader>) -> Self {
        Grid {
            headers,
            rows: vec![],
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.name == name)
    }

    pub fn truncate_rows(&mut self, len: usize) {
        self.rows.truncate(len);
    }

    /// Distinct string values of one column, in row order
    pub fn column_values(&self, index: usize) -> Vec<String> {
        let mut values = vec![];
        for row in &self.rows {
            if let Some(value) = row.get(index).and_then(Value::as_str) {
                if !values.iter().any(|v| v == value) {
                    values.push(value.to_string());
                }
            }
        }
        values
    }

    /// Whether any cell holds the given string value
    pub fn contains_value(&self, value: &str) -> bool {
        self.rows
            .iter()
            .any(|row| row.iter().any(|cell| cell.as_str() == Some(value)))
    }
}

/// Response pagination descriptor
///
/// The exact form carries a total row count; the slim form only a
/// last-page flag, cheaper because it needs no `COUNT(*)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Pager {
    Exact {
        page: u32,
        #[serde(rename = "pageCount")]
        page_count: u32,
        #[serde(rename = "pageSize")]
        page_size: u32,
        total: u64,
    },
    Slim {
        page: u32,
        #[serde(rename = "pageSize")]
        page_size: u32,
        #[serde(rename = "isLastPage")]
        is_last_page: bool,
    },
}

impl Pager {
    pub fn exact(page: u32, page_size: u32, total: u64) -> Self {
        let page_count = if page_size == 0 {
            1
        } else {
            (total.div_ceil(u64::from(page_size)) as u32).max(1)
        };
        Pager::Exact {
            page,
            page_count,
            page_size,
            total,
        }
    }

    pub fn slim(page: u32, page_size: u32, is_last_page: bool) -> Self {
        Pager::Slim {
            page,
            page_size,
            is_last_page,
        }
    }

    pub fn page(&self) -> u32 {
        match self {
            Pager::Exact { page, .. } => *page,
            Pager::Slim { page, .. } => *page,
        }
    }

    pub fn is_last_page(&self) -> Option<bool> {
        match self {
            Pager::Slim { is_last_page, .. } => Some(*is_last_page),
            Pager::Exact { .. } => None,
        }
    }
}

/// Display descriptor of one metadata entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataItem {
    pub name: String,
    /// Only rendered when the caller asked for metadata details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl MetadataItem {
    pub fn new(name: impl Into<String>, uid: Option<String>, code: Option<String>) -> Self {
        MetadataItem {
            name: name.into(),
            uid,
            code,
        }
    }
}

/// The metadata block of a response, keyed for direct JSON serialization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub items: BTreeMap<String, MetadataItem>,
    pub dimensions: BTreeMap<String, Vec<String>>,
    #[serde(rename = "ouHierarchy", skip_serializing_if = "Option::is_none")]
    pub org_unit_hierarchy: Option<BTreeMap<String, String>>,
    #[serde(rename = "ouNameHierarchy", skip_serializing_if = "Option::is_none")]
    pub org_unit_name_hierarchy: Option<BTreeMap<String, String>>,
}
