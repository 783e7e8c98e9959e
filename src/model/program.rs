//! Program and program stage reference entities

use super::element::TrackedEntityAttribute;

/// A program as loaded by the caller
///
/// Carries the declared stages (for stage reference validation) and the
/// tracked-entity attributes the program declares (each one is offered as
/// a dimension automatically, without explicit request syntax).
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub uid: String,
    pub name: String,
    pub stages: Vec<ProgramStage>,
    pub attributes: Vec<TrackedEntityAttribute>,
}

impl Program {
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        Program {
            uid: uid.into(),
            name: name.into(),
            stages: vec![],
            attributes: vec![],
        }
    }

    /// Find a declared stage by uid
    pub fn stage(&self, uid: &str) -> Option<&ProgramStage> {
        self.stages.iter().find(|s| s.uid == uid)
    }
}

/// A program stage; stages of repeatable programs are addressed with a
/// repeat offset in dimension strings
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramStage {
    pub uid: String,
    pub name: String,
}

impl ProgramStage {
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        ProgramStage {
            uid: uid.into(),
            name: name.into(),
        }
    }
}
