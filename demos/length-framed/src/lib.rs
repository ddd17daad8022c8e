//! A length-prefixed binary frame decoder, written against [`trickle`] to
//! show how a real wire format composes the two primitives.
//!
//! Wire format: a 4-byte big-endian length prefix followed by that many
//! payload bytes, repeated until the stream closes.

use thiserror::Error;
use trickle::{Collector, Error as CoreError, EventSink, Harness, ReaderConfig};

/// Frames larger than this are rejected rather than buffered, so a
/// corrupt length prefix can't make the decoder allocate unbounded memory.
pub const MAX_FRAME_LEN: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("stream ended with an incomplete frame ({0} bytes buffered)")]
    Truncated(usize),
    #[error("frame length {0} exceeds the {MAX_FRAME_LEN}-byte limit")]
    FrameTooLarge(usize),
}

impl From<CoreError> for FrameError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Incomplete { partial } => FrameError::Truncated(partial.len()),
        }
    }
}

/// Decodes length-prefixed frames, emitting each payload as it completes.
pub fn decoder() -> Collector<Vec<u8>, FrameError> {
    Collector::new(|sink: EventSink<Vec<u8>>| {
        Harness::start(
            move |mut reader| {
                let sink = sink.clone();
                async move {
                    loop {
                        let header = reader.read(4).await?;
                        let len = u32::from_be_bytes([header[0], header[1], header[2], header[3]])
                            as usize;
                        if len > MAX_FRAME_LEN {
                            return Err(FrameError::FrameTooLarge(len));
                        }
                        let payload = reader.read(len).await?;
                        sink.emit(payload);
                    }
                }
            },
            ReaderConfig::default(),
        )
    })
}
