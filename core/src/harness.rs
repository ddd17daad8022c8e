//! Drives a resumable parser future across chunks pushed in over time.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, Waker};

use crate::config::ReaderConfig;
use crate::error::PushError;
use crate::reader::Reader;

/// Drives a single parser instance: primes it, then resumes it once per
/// pushed chunk until it reaches a terminal state.
///
/// A harness reaches a terminal state in exactly one of three ways: the
/// parser's future resolves `Ok(())` (clean finish), it resolves `Err(e)`
/// (the parser's own domain error, which folds in [`crate::Error::Incomplete`]
/// via `From`), or it is still `Pending` but the stream's end-of-data has
/// been observed with nothing left unconsumed — a parser loop that simply
/// never returns after reading everything it expects.
pub struct Harness<E> {
    reader: Reader,
    future: Pin<Box<dyn Future<Output = Result<(), E>>>>,
    finished: bool,
}

impl<E> Harness<E> {
    /// Builds a fresh [`Reader`], hands it to `factory`, and primes the
    /// resulting future with one poll.
    pub fn start<F, Fut>(factory: F, config: ReaderConfig) -> Self
    where
        F: FnOnce(Reader) -> Fut,
        Fut: Future<Output = Result<(), E>> + 'static,
    {
        let reader = Reader::new(config);
        let future = Box::pin(factory(reader.clone()));
        let mut harness = Self {
            reader,
            future,
            finished: false,
        };
        harness.drive();
        harness
    }

    /// Whether the harness has reached a terminal state (clean finish,
    /// parser error, or end-of-data with nothing left to read).
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Feeds a chunk of bytes, or (if `chunk` is empty) signals end of
    /// stream, then resumes the parser exactly once.
    pub fn push(&mut self, chunk: &[u8]) -> Result<(), PushError<E>> {
        if self.finished {
            return Err(PushError::AlreadyEof);
        }
        if chunk.is_empty() {
            self.reader.signal_eof();
        } else {
            self.reader.append(chunk);
        }
        match self.drive() {
            Some(Err(e)) => Err(PushError::Parser(e)),
            _ => Ok(()),
        }
    }

    /// Named alias for `push(&[])`, for callers who want the end-of-stream
    /// intent spelled out at the call site.
    pub fn push_eof(&mut self) -> Result<(), PushError<E>> {
        self.push(&[])
    }

    fn drive(&mut self) -> Option<Result<(), E>> {
        let waker: Waker = Waker::noop().clone();
        let mut cx = Context::from_waker(&waker);
        match self.future.as_mut().poll(&mut cx) {
            Poll::Pending => {
                let reader_state = self.reader.inner.borrow();
                let drained_and_done = reader_state.eof_seen() && reader_state.is_drained();
                drop(reader_state);
                if drained_and_done {
                    self.finished = true;
                    Some(Ok(()))
                } else {
                    None
                }
            }
            Poll::Ready(result) => {
                self.finished = true;
                Some(result)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn counting_harness() -> Harness<Error> {
        // Never returns on its own — relies entirely on the harness's
        // generic "Pending + eof_seen + drained" rule to close cleanly
        // once the stream ends on a record boundary.
        Harness::start(
            |mut reader| async move {
                loop {
                    reader.read(3).await?;
                }
            },
            ReaderConfig::default(),
        )
    }

    #[test]
    fn push_after_finish_is_already_eof() {
        let mut h = counting_harness();
        h.push(b"abc").unwrap();
        h.push(b"").unwrap();
        assert!(h.is_finished());
        assert_eq!(h.push(b"x"), Err(PushError::AlreadyEof));
    }

    #[test]
    fn pending_without_eof_is_not_finished() {
        let mut h = counting_harness();
        h.push(b"ab").unwrap();
        assert!(!h.is_finished());
    }

    #[test]
    fn push_eof_is_equivalent_to_empty_push() {
        let mut h = counting_harness();
        h.push(b"abc").unwrap();
        h.push_eof().unwrap();
        assert!(h.is_finished());
    }

    #[test]
    fn incomplete_final_read_reports_parser_error() {
        let mut h: Harness<Error> = Harness::start(
            |mut reader| async move {
                reader.read(5).await?;
                Ok(())
            },
            ReaderConfig::default(),
        );
        h.push(b"ab").unwrap();
        let err = h.push(b"").unwrap_err();
        assert_eq!(
            err,
            PushError::Parser(Error::Incomplete {
                partial: b"ab".to_vec()
            })
        );
    }
}
