//! Test support for the score-forest workspace.
//!
//! - [`fuzzer`]: seeded random records and operation sequences.

pub mod fuzzer;

pub use fuzzer::{Fuzzer, Op};
