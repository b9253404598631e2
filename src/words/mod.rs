//! Word source: the pool of root words a round is drawn from.
//!
//! The pool is read once from a newline-delimited file. Loading never fails
//! outward; an unusable file falls back to a single default word.

pub mod pool;

pub use pool::{RootWordPool, WordSourceError, DEFAULT_ROOT_WORD};
