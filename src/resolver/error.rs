//! Reference resolution errors

use thiserror::Error;

/// A referenced program or program stage does not exist or is not
/// allowed for this request
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReferenceError {
    /// Dimension is scoped to a program the caller did not request
    #[error("Program does not exist or is not in the request: `{0}`")]
    ProgramNotFound(String),

    /// Stage uid is not among the resolved program's declared stages
    #[error("Program stage `{stage}` is not a stage of program `{program}`")]
    StageNotFound { stage: String, program: String },

    /// Requested program uids with no counterpart in the catalog; the
    /// whole request is rejected, partial matches are not tolerated
    #[error("Program is specified but does not exist: `[{}]`", .uids.join(", "))]
    ProgramsNotFound { uids: Vec<String> },
}
