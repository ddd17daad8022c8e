#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Runtime for incremental, push-driven byte-stream parsers.
//!
//! A parser is an ordinary `async fn(reader: Reader) -> Result<(), E>` that
//! calls [`Reader::read`] and [`Reader::read_until`] against a shared,
//! cheaply-cloneable [`Reader`] handle. [`Harness`] drives that parser across
//! chunks pushed in over time, and [`Collector`] wraps a harness with an
//! event sink for tests and simple consumers.

#[cfg(feature = "fuzz")]
pub mod arbitrary_support;
pub mod collector;
pub mod config;
pub mod error;
pub mod harness;
pub mod reader;

#[cfg(feature = "fuzz")]
pub use arbitrary_support::ChunkPlan;
pub use collector::{Collector, EventSink};
pub use config::ReaderConfig;
pub use error::{Error, PushError};
pub use harness::Harness;
pub use reader::{ReadExact, ReadUntil, Reader};
