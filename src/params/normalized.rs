//! The fully normalized parameter set produced by the request normalizer

use crate::model::{DisplayProperty, IdScheme, OrgUnit, Program};

use super::dimension::{DimensionParam, QueryItem};
use super::identifier::DimensionIdentifier;
use super::paging::AnalyticsPagingParams;
use super::sorting::SortParam;

/// Everything the query builder and the response assembler need for one
/// request
///
/// Identifier lists keep request order; the planner treats group ids as
/// "OR within group, AND across groups".
#[derive(Debug, Clone)]
pub struct NormalizedParams {
    pub programs: Vec<Program>,
    pub user_org_units: Vec<OrgUnit>,
    pub dimensions: Vec<DimensionIdentifier<DimensionParam>>,
    pub filters: Vec<DimensionIdentifier<DimensionParam>>,
    pub date_filters: Vec<DimensionIdentifier<DimensionParam>>,
    pub sorting: Vec<SortParam>,
    pub headers: Vec<DimensionIdentifier<DimensionParam>>,
    pub paging: AnalyticsPagingParams,
    pub display_property: DisplayProperty,
    pub id_scheme: IdScheme,
    pub include_metadata_details: bool,
    pub hierarchy_meta: bool,
    pub show_hierarchy: bool,
    pub skip_meta: bool,
}

impl NormalizedParams {
    /// Dimensions and filters, the scope of the header consistency check
    pub fn dimensions_and_filters(
        &self,
    ) -> impl Iterator<Item = &DimensionIdentifier<DimensionParam>> {
        self.dimensions.iter().chain(self.filters.iter())
    }

    /// Every classified identifier across all three parameter groups
    pub fn all_identifiers(&self) -> impl Iterator<Item = &DimensionIdentifier<DimensionParam>> {
        self.dimensions
            .iter()
            .chain(self.filters.iter())
            .chain(self.date_filters.iter())
    }

    /// All query items across the parameter groups
    pub fn query_items(&self) -> impl Iterator<Item = &QueryItem> {
        self.all_identifiers()
            .filter_map(|id| id.dimension().as_query_item())
    }
}
