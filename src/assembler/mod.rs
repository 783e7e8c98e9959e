//! Response assembly (verb module)
//!
//! Consumes the delivered result grid together with the normalized
//! parameters: builds the pager (trimming the lookahead row used for
//! last-page detection) and the metadata block.

mod metadata;
mod paging;

pub use metadata::assemble_metadata;
pub use paging::apply_paging;
