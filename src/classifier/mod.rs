//! Dimension classification (verb module)
//!
//! Turns a reference-resolved identifier into exactly one of the three
//! payload variants. The cascade is ordered and the first match wins:
//! static keyword, then dynamic dimensional object, then query item.
//! Lookups are injected so each branch is testable with a fake.

mod classify;

pub use classify::{classify, ClassifyContext};
