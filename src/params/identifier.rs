//! Dimension identifiers: program/stage scope with repeat offsets

use std::fmt;

use crate::model::{Program, ProgramStage};

/// Reference entities addressable by uid
pub trait Identifiable {
    fn uid(&self) -> &str;
}

impl Identifiable for Program {
    fn uid(&self) -> &str {
        &self.uid
    }
}

impl Identifiable for ProgramStage {
    fn uid(&self) -> &str {
        &self.uid
    }
}

/// A dimension uid that has passed reference resolution but not yet
/// classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringUid(String);

impl StringUid {
    pub fn of(uid: impl Into<String>) -> Self {
        StringUid(uid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StringUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A program or stage reference plus its repeat offset
///
/// The offset selects which occurrence of a repeatable stage event the
/// dimension refers to; 0 means "not repeated".
#[derive(Debug, Clone, PartialEq)]
pub struct ElementWithOffset<E> {
    element: E,
    offset: i32,
}

impl<E> ElementWithOffset<E> {
    pub fn of(element: E, offset: i32) -> Self {
        ElementWithOffset { element, offset }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn has_offset(&self) -> bool {
        self.offset != 0
    }
}

impl<E: Identifiable> ElementWithOffset<E> {
    pub fn uid(&self) -> &str {
        self.element.uid()
    }

    /// Canonical rendering: `uid` or `uid[offset]`
    pub fn render(&self) -> String {
        if self.has_offset() {
            format!("{}[{}]", self.uid(), self.offset)
        } else {
            self.uid().to_string()
        }
    }
}

/// A dimension scoped to an optional program and program stage
///
/// Invariant: a stage reference implies a program reference. The group id
/// ties OR-expanded siblings of one request token together; the planner
/// combines identifiers with OR within a group and AND across groups.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionIdentifier<P> {
    program: Option<ElementWithOffset<Program>>,
    stage: Option<ElementWithOffset<ProgramStage>>,
    dimension: P,
    group_id: String,
}

impl<P> DimensionIdentifier<P> {
    pub fn of(
        program: Option<ElementWithOffset<Program>>,
        stage: Option<ElementWithOffset<ProgramStage>>,
        dimension: P,
    ) -> Self {
        assert!(
            stage.is_none() || program.is_some(),
            "a stage-scoped dimension must also be program-scoped"
        );
        DimensionIdentifier {
            program,
            stage,
            dimension,
            group_id: String::new(),
        }
    }

    pub fn has_program(&self) -> bool {
        self.program.is_some()
    }

    pub fn has_program_stage(&self) -> bool {
        self.stage.is_some()
    }

    pub fn program(&self) -> Option<&ElementWithOffset<Program>> {
        self.program.as_ref()
    }

    pub fn program_stage(&self) -> Option<&ElementWithOffset<ProgramStage>> {
        self.stage.as_ref()
    }

    pub fn dimension(&self) -> &P {
        &self.dimension
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn with_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = group_id.into();
        self
    }

    /// Rebuild with a different payload, keeping scope and group id
    pub fn map<Q>(self, f: impl FnOnce(P) -> Q) -> DimensionIdentifier<Q> {
        DimensionIdentifier {
            program: self.program,
            stage: self.stage,
            dimension: f(self.dimension),
            group_id: self.group_id,
        }
    }

    /// `prog[off].stage[off].` prefix of the qualified key, empty when
    /// unscoped
    pub fn scope_prefix(&self) -> String {
        let mut prefix = String::new();
        if let Some(program) = &self.program {
            prefix.push_str(&program.render());
            prefix.push('.');
        }
        if let Some(stage) = &self.stage {
            prefix.push_str(&stage.render());
            prefix.push('.');
        }
        prefix
    }
}

impl DimensionIdentifier<StringUid> {
    /// Fully qualified dimension key, e.g. `progUid[1].stageUid.dimUid`
    pub fn key(&self) -> String {
        format!("{}{}", self.scope_prefix(), self.dimension.as_str())
    }
}
