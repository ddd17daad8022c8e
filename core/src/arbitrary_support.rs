//! `arbitrary`-backed fuzzing support.
//!
//! Raw fuzzer bytes rarely make good chunk boundaries on their own — a
//! single-byte chunk stream exercises very different code paths than one
//! big chunk. [`ChunkPlan`] lets `arbitrary` carve one fuzzer input into a
//! realistic sequence of pushes (including an explicit EOF marker) instead
//! of fuzzing a single `push` call in isolation.

use arbitrary::Arbitrary;

/// A fuzzer-generated sequence of pushes to replay against a [`crate::Harness`]
/// or [`crate::Collector`].
#[derive(Debug, Clone, Arbitrary)]
pub struct ChunkPlan {
    chunks: Vec<Vec<u8>>,
    send_eof: bool,
}

impl ChunkPlan {
    /// The chunks to push, in order. Empty chunks are filtered out here
    /// since an empty push already has a reserved meaning (EOF) that
    /// [`Self::send_eof`] controls explicitly.
    pub fn chunks(&self) -> impl Iterator<Item = &[u8]> {
        self.chunks.iter().filter(|c| !c.is_empty()).map(Vec::as_slice)
    }

    /// Whether the plan ends with an EOF push.
    pub fn send_eof(&self) -> bool {
        self.send_eof
    }
}
