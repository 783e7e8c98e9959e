//! Reference resolution of parsed dimension tokens

use crate::grammar::ParsedToken;
use crate::model::Program;
use crate::params::{DimensionIdentifier, ElementWithOffset, StringUid};

use super::error::ReferenceError;

/// Resolve a parsed token's program/stage segments against the programs
/// allowed for this request
///
/// The dimension itself stays a bare uid string; classification happens
/// later. A stage segment requires its program segment to resolve first,
/// which keeps cross-program stage references out by construction.
pub fn resolve_reference(
    programs: &[Program],
    token: &ParsedToken,
) -> Result<DimensionIdentifier<StringUid>, ReferenceError> {
    let dimension = StringUid::of(token.dimension.clone());

    let Some(program_segment) = &token.program else {
        return Ok(DimensionIdentifier::of(None, None, dimension));
    };

    let program = programs
        .iter()
        .find(|p| p.uid == program_segment.uid)
        .ok_or_else(|| ReferenceError::ProgramNotFound(program_segment.uid.clone()))?;

    let program_element = ElementWithOffset::of(program.clone(), program_segment.offset);

    let Some(stage_segment) = &token.stage else {
        return Ok(DimensionIdentifier::of(Some(program_element), None, dimension));
    };

    let stage = program
        .stage(&stage_segment.uid)
        .ok_or_else(|| ReferenceError::StageNotFound {
            stage: stage_segment.uid.clone(),
            program: program.uid.clone(),
        })?;

    Ok(DimensionIdentifier::of(
        Some(program_element),
        Some(ElementWithOffset::of(stage.clone(), stage_segment.offset)),
        dimension,
    ))
}
