//! Reference entities (nouns)
//!
//! These types represent the caller-supplied reference data a request is
//! resolved against. They are read-only snapshots for the duration of one
//! request; this crate never loads or persists them.

mod element;
mod orgunit;
mod program;
mod types;
mod user;

pub use element::{Legend, LegendSet, OptionItem, OptionSet, TrackedEntityAttribute};
pub use orgunit::{parent_graph_map, parent_name_graph_map, OrgUnit, OrgUnitAncestor};
pub use program::{Program, ProgramStage};
pub use types::{DisplayProperty, IdScheme, ValueType};
pub use user::User;
