//! Request types and collaborator contracts

mod lookups;
mod request;

pub use lookups::{DimensionLookup, ItemLookup, ProgramCatalog};
pub use request::AnalyticsRequest;
