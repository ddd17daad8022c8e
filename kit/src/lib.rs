#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Facade crate for writing incremental, push-driven byte-stream parsers.
//!
//! Re-exports [`trickle_core`]'s public surface under a shorter name.
pub use trickle_core::*;
