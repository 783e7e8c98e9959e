//! dimnorm - Normalize analytics requests into typed dimension trees
//!
//! This library provides:
//! - Dimension token grammar parsing (`prog[offset].stage[offset].dim:op:val`)
//! - Reference resolution against caller-supplied program catalogs
//! - Classification into static dimensions, dimensional objects and query items
//! - Request orchestration with OR-group expansion, sorting, headers and paging
//! - Response assembly: pagers, metadata items, org unit hierarchies
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `model/` - reference entities (Program, ProgramStage, OrgUnit, User, option/legend sets)
//! - `query/` - request types and collaborator contracts (AnalyticsRequest, lookups)
//! - `params/` - normalized parameter types (DimensionIdentifier, DimensionParam, paging)
//! - `grid/` - response types (Grid, Pager, Metadata)
//!
//! **Verb modules** (transformations):
//! - `grammar/` - token string → structural tuple
//! - `resolver/` - structural tuple + allowed programs → DimensionIdentifier<StringUid>
//! - `classifier/` - identifier + lookups → DimensionIdentifier<DimensionParam>
//! - `normalizer/` - AnalyticsRequest → NormalizedParams
//! - `assembler/` - Grid + NormalizedParams → Pager + Metadata
//!
//! # Example
//!
//! ```ignore
//! use dimnorm::{Normalizer, PagingSettings, apply_paging, assemble_metadata};
//!
//! let normalizer = Normalizer::new(&catalog, &dimensions, &items, PagingSettings::new(50));
//! let params = normalizer.normalize(&request)?;
//! // ... hand params to the query builder, get a grid back ...
//! let pager = apply_paging(&mut grid, &params.paging, None);
//! let metadata = assemble_metadata(&grid, &params, user.as_ref());
//! ```

pub mod assembler;
pub mod classifier;
pub mod error;
pub mod grammar;
pub mod grid;
pub mod model;
pub mod normalizer;
pub mod params;
pub mod query;
pub mod resolver;

// Re-export commonly used types
pub use assembler::{apply_paging, assemble_metadata};
pub use error::QueryError;
pub use grid::{Grid, GridHeader, Metadata, MetadataItem, Pager};
pub use model::{DisplayProperty, IdScheme, OrgUnit, Program, ProgramStage, User, ValueType};
pub use normalizer::{compute_paging, NormalizeError, Normalizer};
pub use params::{
    AnalyticsPagingParams, DimensionIdentifier, DimensionParam, ElementWithOffset,
    NormalizedParams, PagingSettings, QueryItem, SortDirection, SortParam, StaticDimension,
    StringUid,
};
pub use query::{AnalyticsRequest, DimensionLookup, ItemLookup, ProgramCatalog};
pub use resolver::{resolve_reference, ReferenceError};
