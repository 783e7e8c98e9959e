//! Query-semantics errors
//!
//! `QueryError` covers everything that makes a request semantically
//! unanswerable: malformed dimension syntax, dimensions that resolve to
//! nothing, item types that are not allowed in a given position, and
//! headers with no backing dimension. Reference failures (unknown
//! programs/stages) live in [`crate::resolver::ReferenceError`].

use thiserror::Error;

/// Errors raised while parsing and classifying dimension strings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Token has more than three dot-separated segments, or an empty segment
    #[error("Invalid dimension string: `{0}`")]
    MalformedDimension(String),

    /// Bracketed repeat offset is not an integer
    #[error("Invalid offset in dimension string: `{0}`")]
    InvalidOffset(String),

    /// Query item filter operator is not recognized
    #[error("Query operator is not valid: `{0}`")]
    InvalidOperator(String),

    /// Sort parameter direction is not `asc` or `desc`
    #[error("Sort direction is not valid: `{0}`")]
    InvalidSortDirection(String),

    /// Unscoped dimension that is neither static, dimensional, nor a
    /// known tracked-entity attribute
    #[error("Dimension is not fully qualified: `{0}`")]
    NotFullyQualified(String),

    /// Program-scoped dimension that resolves to no known query item
    #[error("Query item or filter is invalid: `{0}`")]
    ItemNotFound(String),

    /// Tracked-entity attributes are addressed without a program prefix
    #[error("Tracked entity attribute must not be specified with a program prefix: `{0}`")]
    PrefixedAttribute(String),

    /// Item type not supported in this position, e.g. a program indicator
    #[error("Item type `{kind}` is not supported for dimension: `{uid}`")]
    UnsupportedItemType { uid: String, kind: String },

    /// Stage-scoped static header with no matching dimension or filter
    #[error("Header `{stage}.{dimension}` has no matching dimension or filter in program stage `{stage}`")]
    HeaderWithoutDimension { stage: String, dimension: String },
}
