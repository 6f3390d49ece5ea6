//! Error types for lexing and token-stream matching.
//!
//! Every error is fatal: scanning stops at the first one and the caller
//! receives it together with the position where it happened.

pub mod errors;
