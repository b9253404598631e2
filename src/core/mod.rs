//! Core building blocks: RNG and round configuration.

pub mod rng;
pub mod config;

pub use rng::{RoundRng, RoundRngState};
pub use config::{RoundRules, DEFAULT_LANGUAGE};
