//! The suspendable byte-stream primitives parsers are written against.
//!
//! [`Reader`] is a cheap handle (an `Rc<RefCell<_>>` underneath) around a
//! growing byte buffer. Parser-author code never touches the buffer
//! directly — it only calls [`Reader::read`] and [`Reader::read_until`],
//! `.await`-ing the futures they return. Those futures are hand-rolled
//! leaf [`core::future::Future`] implementations: no async runtime is
//! required to drive them, since suspension is nothing more than returning
//! [`Poll::Pending`] and [`crate::Harness`] decides when to poll again.

use core::cell::RefCell;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::rc::Rc;

use crate::config::ReaderConfig;
use crate::error::Error;

#[derive(Debug)]
pub(crate) struct State {
    buf: Vec<u8>,
    pos: usize,
    eof_seen: bool,
    eof_pending: bool,
    truncate_threshold: usize,
}

impl State {
    fn compact_if_needed(&mut self) {
        if self.pos > self.truncate_threshold {
            self.buf.drain(..self.pos);
            self.pos = 0;
        }
    }

    fn take_eof_pending(&mut self) -> bool {
        if self.eof_pending {
            self.eof_pending = false;
            true
        } else {
            false
        }
    }

    pub(crate) fn is_drained(&self) -> bool {
        self.pos == self.buf.len()
    }

    pub(crate) fn eof_seen(&self) -> bool {
        self.eof_seen
    }
}

/// A shared handle onto a parser's byte buffer.
///
/// Cloning a `Reader` is cheap (an `Rc` bump) and yields a handle onto the
/// *same* underlying buffer — this is what lets a leaf future hold its own
/// handle across `.await` points while [`crate::Harness`] independently
/// appends bytes to the same state between polls.
#[derive(Clone)]
pub struct Reader {
    pub(crate) inner: Rc<RefCell<State>>,
}

impl Reader {
    pub(crate) fn new(config: ReaderConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(State {
                buf: Vec::new(),
                pos: 0,
                eof_seen: false,
                eof_pending: false,
                truncate_threshold: config.truncate_threshold,
            })),
        }
    }

    pub(crate) fn append(&mut self, chunk: &[u8]) {
        self.inner.borrow_mut().buf.extend_from_slice(chunk);
    }

    pub(crate) fn signal_eof(&mut self) {
        self.inner.borrow_mut().eof_pending = true;
    }

    /// Reads exactly `size` bytes, suspending until they have all arrived.
    ///
    /// `size == 0` resolves immediately without inspecting end-of-stream
    /// state at all.
    pub fn read(&mut self, size: usize) -> ReadExact {
        self.inner.borrow_mut().compact_if_needed();
        ReadExact {
            state: self.inner.clone(),
            size,
        }
    }

    /// Reads up to (and optionally including) the next occurrence of `sep`.
    ///
    /// `include` controls whether `sep` itself is part of the returned
    /// bytes. `eof` marks this call as end-of-stream tolerant: if the
    /// stream ends with a non-empty residual and no `sep` was ever found,
    /// the residual is returned instead of failing with
    /// [`Error::Incomplete`].
    ///
    /// # Panics
    ///
    /// Panics immediately if `sep` is empty — an empty delimiter can never
    /// be found, and failing fast here beats suspending forever.
    pub fn read_until(&mut self, sep: &[u8], include: bool, eof: bool) -> ReadUntil {
        assert!(!sep.is_empty(), "read_until: separator must not be empty");
        let mut state = self.inner.borrow_mut();
        state.compact_if_needed();
        let scan_from = state.pos;
        drop(state);
        ReadUntil {
            state: self.inner.clone(),
            sep: sep.to_vec(),
            include,
            eof_tolerant: eof,
            scan_from,
        }
    }
}

/// Future returned by [`Reader::read`].
pub struct ReadExact {
    state: Rc<RefCell<State>>,
    size: usize,
}

impl Future for ReadExact {
    type Output = Result<Vec<u8>, Error>;

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if this.size == 0 {
            return Poll::Ready(Ok(Vec::new()));
        }
        let mut state = this.state.borrow_mut();
        let available = state.buf.len() - state.pos;
        if available >= this.size {
            let start = state.pos;
            let end = start + this.size;
            let out = state.buf[start..end].to_vec();
            state.pos = end;
            return Poll::Ready(Ok(out));
        }
        if state.take_eof_pending() {
            state.eof_seen = true;
            let residual_len = state.buf.len() - state.pos;
            if residual_len == 0 {
                return Poll::Pending;
            }
            let partial = state.buf[state.pos..].to_vec();
            state.pos = state.buf.len();
            return Poll::Ready(Err(Error::Incomplete { partial }));
        }
        Poll::Pending
    }
}

/// Future returned by [`Reader::read_until`].
pub struct ReadUntil {
    state: Rc<RefCell<State>>,
    sep: Vec<u8>,
    include: bool,
    eof_tolerant: bool,
    /// Earliest absolute index at which a fresh search needs to look;
    /// advanced on every failed search so later polls never rescan bytes
    /// that provably cannot contain the start of `sep`.
    scan_from: usize,
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

impl Future for ReadUntil {
    type Output = Result<Vec<u8>, Error>;

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let mut state = this.state.borrow_mut();
        let search_start = this.scan_from.max(state.pos);

        if let Some(rel) = find_subslice(&state.buf[search_start..], &this.sep) {
            let delim_start = search_start + rel;
            let delim_end = delim_start + this.sep.len();
            let result_end = if this.include { delim_end } else { delim_start };
            let out = state.buf[state.pos..result_end].to_vec();
            state.pos = delim_end;
            return Poll::Ready(Ok(out));
        }

        // `(len(buf) + 1) - len(sep)`, reassociated so the subtraction never
        // needs to go negative before the `+1` can pull it back up — doing
        // `len(buf) - len(sep)` first would floor at 0 and overstate the
        // next scan start whenever the buffer is still shorter than `sep`.
        let next_scan = (state.buf.len() + 1)
            .saturating_sub(this.sep.len())
            .max(search_start);
        this.scan_from = next_scan;

        if state.take_eof_pending() {
            state.eof_seen = true;
            let residual_len = state.buf.len() - state.pos;
            if residual_len == 0 {
                return Poll::Pending;
            }
            if this.eof_tolerant {
                let out = state.buf[state.pos..].to_vec();
                state.pos = state.buf.len();
                return Poll::Ready(Ok(out));
            }
            let partial = state.buf[state.pos..].to_vec();
            state.pos = state.buf.len();
            return Poll::Ready(Err(Error::Incomplete { partial }));
        }
        Poll::Pending
    }
}
