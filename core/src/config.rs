//! Reader configuration for buffer compaction tuning.
//!
//! This module provides [`ReaderConfig`], which controls how aggressively a
//! [`crate::Reader`] reclaims consumed bytes from the front of its buffer.
//!
//! # Truncation
//!
//! Every byte a primitive consumes stays in the buffer until the consumed
//! prefix is compacted away; compaction is checked once, when a new
//! primitive (`read`/`read_until`) is entered. Compacting on every single
//! push would mean repeatedly shifting a growing prefix for no benefit on
//! small streams, so it only runs once the consumed prefix crosses
//! `truncate_threshold`.
//!
//! # Example
//!
//! ```
//! use trickle_core::ReaderConfig;
//!
//! // Use the default threshold (64 KiB).
//! let config = ReaderConfig::default();
//!
//! // Compact more eagerly for memory-constrained hosts.
//! let config = ReaderConfig::new().with_truncate_threshold(4096);
//! ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Consumed-byte threshold past which a new primitive triggers
    /// compaction of the front of the buffer.
    ///
    /// Default: 65536 (64 KiB).
    pub truncate_threshold: usize,
}

impl Default for ReaderConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ReaderConfig {
    /// Default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self {
        truncate_threshold: 1 << 16,
    };

    /// Creates a new configuration with default values.
    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the compaction threshold.
    ///
    /// # Arguments
    ///
    /// * `threshold` - Consumed-byte count past which compaction runs on the
    ///   next primitive. Use `usize::MAX` to disable compaction entirely.
    #[inline]
    pub const fn with_truncate_threshold(mut self, threshold: usize) -> Self {
        self.truncate_threshold = threshold;
        self
    }

    /// Disables compaction; the buffer only ever grows.
    #[inline]
    pub const fn disable_compaction(self) -> Self {
        self.with_truncate_threshold(usize::MAX)
    }
}
