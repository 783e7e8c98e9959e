//! Request normalization (verb module)
//!
//! Orchestrates the whole request: resolves the program list, classifies
//! every dimension/filter/date-filter/sort/header parameter, derives the
//! paging parameters, and cross-checks header consistency before
//! returning the normalized parameter set.

mod normalize;
mod validate;

pub use normalize::{compute_paging, NormalizeError, Normalizer};
pub use validate::validate_headers;
