//! Collaborator contracts implemented by the surrounding system
//!
//! The core never touches storage. Reference lookups that may hit a
//! database are injected behind these traits and called synchronously;
//! failures propagate to the caller with no retry.

use crate::model::{DisplayProperty, IdScheme, OrgUnit, Program};
use crate::params::{DimensionalObject, QueryItem};

/// Program reference data for one request
pub trait ProgramCatalog {
    /// Programs for the given uids; partial results are allowed, the
    /// normalizer computes the missing set and rejects the request
    fn programs_by_uid(&self, uids: &[String]) -> Vec<Program>;
}

/// Resolves org/period/category style dimensions to concrete objects
pub trait DimensionLookup {
    /// Org units in scope for the requesting user; an explicit uid
    /// overrides the user's own units
    fn user_org_units(&self, explicit_uid: Option<&str>) -> Vec<OrgUnit>;

    /// A dynamic dimensional object for the uid, or `None` when the uid
    /// does not denote one
    fn dimensional_object(
        &self,
        uid: &str,
        items: &[String],
        relative_period_date: Option<&str>,
        user_org_units: &[OrgUnit],
        display_property: DisplayProperty,
        id_scheme: IdScheme,
    ) -> Option<DimensionalObject>;
}

/// Resolves data elements and tracked-entity attributes to query items
pub trait ItemLookup {
    /// The query item backing the uid, scoped to the given program when
    /// present; `None` when the uid resolves to nothing, in which case
    /// the classifier raises the appropriate typed error
    fn query_item(&self, uid: &str, program: Option<&Program>) -> Option<QueryItem>;
}
