use tracing::debug;

use crate::classifier::{classify, ClassifyContext};
use crate::error::QueryError;
use crate::grammar;
use crate::model::Program;
use crate::params::{
    AnalyticsPagingParams, DimensionIdentifier, DimensionParam, NormalizedParams, PagingSettings,
    SortDirection, SortParam, DEFAULT_PAGE_SIZE,
};
use crate::query::{AnalyticsRequest, DimensionLookup, ItemLookup, ProgramCatalog};
use crate::resolver::{resolve_reference, ReferenceError};

use super::validate::validate_headers;
use thiserror::Error;

/// Either of the two terminal error kinds a request can fail with
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error(transparent)]
    Reference(#[from] ReferenceError),
    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Per-request group id source; deterministic so output order and
/// equality are reproducible in tests
#[derive(Debug, Default)]
struct GroupIdGenerator {
    count: u32,
}

impl GroupIdGenerator {
    fn next(&mut self) -> String {
        self.count += 1;
        format!("g-{}", self.count)
    }
}

/// Drives the full request: program resolution, classification of every
/// parameter group, paging, and consistency validation
pub struct Normalizer<'a, C, D, I>
where
    C: ProgramCatalog,
    D: DimensionLookup,
    I: ItemLookup,
{
    catalog: &'a C,
    dimensions: &'a D,
    items: &'a I,
    settings: PagingSettings,
}

impl<'a, C, D, I> Normalizer<'a, C, D, I>
where
    C: ProgramCatalog,
    D: DimensionLookup,
    I: ItemLookup,
{
    pub fn new(catalog: &'a C, dimensions: &'a D, items: &'a I, settings: PagingSettings) -> Self {
        Normalizer {
            catalog,
            dimensions,
            items,
            settings,
        }
    }

    /// Normalize one request into the typed parameter set
    pub fn normalize(&self, request: &AnalyticsRequest) -> Result<NormalizedParams, NormalizeError> {
        let programs = self.resolve_programs(&request.program)?;
        let user_org_units = self
            .dimensions
            .user_org_units(request.user_org_unit.as_deref());
        debug!(
            programs = programs.len(),
            org_units = user_org_units.len(),
            "resolved request references"
        );

        let ctx = ClassifyContext {
            relative_period_date: request.relative_period_date.as_deref(),
            user_org_units: &user_org_units,
            display_property: request.display_property,
            id_scheme: request.output_id_scheme,
        };

        let mut groups = GroupIdGenerator::default();

        let dimension_tokens = with_program_attributes(&request.dimension, &programs);
        let dimensions = self.classify_group(&dimension_tokens, &programs, ctx, &mut groups)?;
        let filters = self.classify_group(&request.filter, &programs, ctx, &mut groups)?;
        let date_filters = self.classify_group(&request.date_filter, &programs, ctx, &mut groups)?;
        let sorting = self.classify_sorting(&request.sort, &programs, ctx, &mut groups)?;
        let headers = self.classify_headers(&request.headers, &programs, ctx, &mut groups)?;

        let paging = compute_paging(self.settings, request);
        debug!(
            dimensions = dimensions.len(),
            filters = filters.len(),
            date_filters = date_filters.len(),
            headers = headers.len(),
            page = paging.page,
            page_size = paging.page_size,
            "normalized request"
        );

        validate_headers(&headers, &dimensions, &filters)?;

        Ok(NormalizedParams {
            programs,
            user_org_units,
            dimensions,
            filters,
            date_filters,
            sorting,
            headers,
            paging,
            display_property: request.display_property,
            id_scheme: request.output_id_scheme,
            include_metadata_details: request.include_metadata_details,
            hierarchy_meta: request.hierarchy_meta,
            show_hierarchy: request.show_hierarchy,
            skip_meta: request.skip_meta,
        })
    }

    /// All requested programs must resolve; the error lists every missing
    /// uid rather than failing on the first
    fn resolve_programs(&self, uids: &[String]) -> Result<Vec<Program>, ReferenceError> {
        let programs = self.catalog.programs_by_uid(uids);
        let mut missing: Vec<String> = uids
            .iter()
            .filter(|uid| !programs.iter().any(|p| &p.uid == *uid))
            .cloned()
            .collect();
        missing.sort();
        missing.dedup();
        if !missing.is_empty() {
            return Err(ReferenceError::ProgramsNotFound { uids: missing });
        }
        Ok(programs)
    }

    /// OR-split, parse, resolve and classify one parameter group,
    /// flattening into one ordered list
    fn classify_group(
        &self,
        tokens: &[String],
        programs: &[Program],
        ctx: ClassifyContext<'_>,
        groups: &mut GroupIdGenerator,
    ) -> Result<Vec<DimensionIdentifier<DimensionParam>>, NormalizeError> {
        let mut out = vec![];
        for token in tokens {
            // OR-siblings of one token share a group id; distinct tokens
            // land in separate AND-groups
            let group_id = groups.next();
            for sibling in grammar::split_or(token) {
                out.push(self.classify_token(sibling, programs, ctx, &group_id)?);
            }
        }
        Ok(out)
    }

    fn classify_token(
        &self,
        token: &str,
        programs: &[Program],
        ctx: ClassifyContext<'_>,
        group_id: &str,
    ) -> Result<DimensionIdentifier<DimensionParam>, NormalizeError> {
        let parsed = grammar::parse(token)?;
        let identifier = resolve_reference(programs, &parsed)?;
        let classified = classify(
            self.dimensions,
            self.items,
            identifier,
            &parsed.filters,
            ctx,
            group_id,
        )?;
        Ok(classified)
    }

    /// Sort tokens are `dimensionToken:direction`; the caller's ordering
    /// is retained on the index field
    fn classify_sorting(
        &self,
        tokens: &[String],
        programs: &[Program],
        ctx: ClassifyContext<'_>,
        groups: &mut GroupIdGenerator,
    ) -> Result<Vec<SortParam>, NormalizeError> {
        let mut out = vec![];
        for (index, token) in tokens.iter().enumerate() {
            let (dimension_part, direction_part) = token
                .rsplit_once(':')
                .ok_or_else(|| QueryError::InvalidSortDirection(token.clone()))?;
            let direction = SortDirection::parse(direction_part)
                .ok_or_else(|| QueryError::InvalidSortDirection(direction_part.to_string()))?;
            let group_id = groups.next();
            let identifier = self.classify_token(dimension_part, programs, ctx, &group_id)?;
            out.push(SortParam {
                index,
                identifier,
                direction,
            });
        }
        Ok(out)
    }

    /// Headers are a set: duplicates collapse to the first occurrence,
    /// order preserved
    fn classify_headers(
        &self,
        tokens: &[String],
        programs: &[Program],
        ctx: ClassifyContext<'_>,
        groups: &mut GroupIdGenerator,
    ) -> Result<Vec<DimensionIdentifier<DimensionParam>>, NormalizeError> {
        let mut seen: Vec<&str> = vec![];
        let mut out = vec![];
        for token in tokens {
            if seen.contains(&token.as_str()) {
                continue;
            }
            seen.push(token.as_str());
            let group_id = groups.next();
            out.push(self.classify_token(token, programs, ctx, &group_id)?);
        }
        Ok(out)
    }
}

/// Offer every tracked-entity attribute declared by the resolved
/// programs as a dimension, without explicit request syntax
fn with_program_attributes(tokens: &[String], programs: &[Program]) -> Vec<String> {
    let mut out = tokens.to_vec();
    for program in programs {
        for attribute in &program.attributes {
            if !out.iter().any(|t| t == &attribute.uid) {
                out.push(attribute.uid.clone());
            }
        }
    }
    out
}

/// Derive the paging parameters from the request and the configured
/// ceiling
///
/// An explicit page size is honored up to the ceiling; an absent one is
/// still bounded unless the server is configured with no ceiling at all.
pub fn compute_paging(settings: PagingSettings, request: &AnalyticsRequest) -> AnalyticsPagingParams {
    let max_limit = settings.max_limit;
    let unlimited = settings.is_unlimited();
    let has_max_limit = !unlimited && !request.ignore_limit;

    if request.paging {
        let page = request.page.unwrap_or(1).max(1);
        let mut page_size = request.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if has_max_limit && page_size > max_limit {
            page_size = max_limit;
        }
        return AnalyticsPagingParams {
            page,
            page_size,
            paging: true,
            total_pages: request.total_pages,
            unlimited: false,
        };
    }

    if unlimited || request.ignore_limit {
        // No paging, no ceiling: serve everything
        return AnalyticsPagingParams {
            page: 1,
            page_size: 0,
            paging: false,
            total_pages: false,
            unlimited: true,
        };
    }

    // Bounded "unpaged" fetch
    AnalyticsPagingParams {
        page: 1,
        page_size: max_limit,
        paging: false,
        total_pages: false,
        unlimited: false,
    }
}
