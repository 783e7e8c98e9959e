//! Normalized parameter types (nouns)
//!
//! The output vocabulary of the normalizer: scoped dimension identifiers,
//! the closed classification variant, sorting, and paging.

mod dimension;
mod identifier;
mod normalized;
mod paging;
mod sorting;

pub use dimension::{
    DimensionParam, DimensionType, DimensionalItem, DimensionalObject, QueryFilter, QueryItem,
    QueryItemKind, QueryOperator, StaticDimension, OPTION_SEP,
};
pub use identifier::{DimensionIdentifier, ElementWithOffset, Identifiable, StringUid};
pub use normalized::NormalizedParams;
pub use paging::{AnalyticsPagingParams, PagingSettings, DEFAULT_PAGE_SIZE};
pub use sorting::{SortDirection, SortParam};
