//! Raw analytics request DTO

use serde::Deserialize;

use crate::model::{DisplayProperty, IdScheme};

fn default_paging() -> bool {
    true
}

/// Flat, string-encoded request parameters as received from the HTTP
/// layer
///
/// Dimension, filter and date-filter entries use the dimension token
/// grammar (`prog[offset].stage[offset].dim:op:val`); sort entries append
/// `:asc`/`:desc`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsRequest {
    pub program: Vec<String>,
    pub dimension: Vec<String>,
    pub filter: Vec<String>,
    pub date_filter: Vec<String>,
    pub headers: Vec<String>,
    pub sort: Vec<String>,
    pub user_org_unit: Option<String>,
    /// Anchor date for relative period expressions, passed through to the
    /// dimension lookup
    pub relative_period_date: Option<String>,
    #[serde(default = "default_paging")]
    pub paging: bool,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub total_pages: bool,
    /// Caller-side request to lift the page size ceiling
    pub ignore_limit: bool,
    pub output_id_scheme: IdScheme,
    pub display_property: DisplayProperty,
    pub include_metadata_details: bool,
    pub hierarchy_meta: bool,
    pub show_hierarchy: bool,
    pub skip_meta: bool,
}

impl AnalyticsRequest {
    pub fn new() -> Self {
        AnalyticsRequest {
            paging: true,
            ..Default::default()
        }
    }
}
