//! Round engine: round state and the checks a submission must pass.
//!
//! - `validation`: `is_possible`, `is_original`, `is_real`
//! - `round`: `Round`, `SubmitResult`, `Rejection`
//!
//! The engine never does I/O. Root words come from `words::RootWordPool`
//! and spelling from a `dictionary::Dictionary`.

pub mod validation;
pub mod round;

pub use validation::{is_original, is_possible, is_real};
pub use round::{Rejection, Round, SubmitResult};
