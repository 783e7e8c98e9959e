//! Header/dimension consistency validation

use crate::error::QueryError;
use crate::params::{DimensionIdentifier, DimensionParam, StaticDimension};

/// Check that every stage-scoped static event-level header has a backing
/// dimension or filter
///
/// A header like `stageUid.OU` asks for an event-level column that only
/// exists when the same stage also appears as a query dimension. Org
/// unit headers additionally match dimensional-object org unit
/// dimensions in the stage, since org unit items may have been resolved
/// through the dynamic-object path instead of staying static.
pub fn validate_headers(
    headers: &[DimensionIdentifier<DimensionParam>],
    dimensions: &[DimensionIdentifier<DimensionParam>],
    filters: &[DimensionIdentifier<DimensionParam>],
) -> Result<(), QueryError> {
    for header in headers {
        let Some(stage) = header.program_stage() else {
            continue;
        };
        let Some(kind) = header.dimension().as_static() else {
            continue;
        };
        if !kind.is_event_level() {
            continue;
        }

        let matched = dimensions.iter().chain(filters.iter()).any(|candidate| {
            let Some(candidate_stage) = candidate.program_stage() else {
                return false;
            };
            if candidate_stage.uid() != stage.uid() {
                return false;
            }
            match candidate.dimension() {
                DimensionParam::Static { dimension, .. } => *dimension == kind,
                DimensionParam::Dimensional(object) => {
                    kind == StaticDimension::Ou && object.is_org_unit()
                }
                DimensionParam::Item(_) => false,
            }
        });

        if !matched {
            return Err(QueryError::HeaderWithoutDimension {
                stage: stage.uid().to_string(),
                dimension: kind.name().to_string(),
            });
        }
    }
    Ok(())
}
