//! A small test/consumer façade pairing a [`Harness`] with an event sink.

use core::cell::RefCell;
use std::rc::Rc;

use crate::error::PushError;
use crate::harness::Harness;

/// A cloneable handle a parser uses to emit events as it recognizes them.
///
/// Cloning shares the same backing buffer — a parser can stash a clone
/// wherever convenient (closures, nested helper futures) without needing to
/// thread a `&mut` reference through.
pub struct EventSink<Ev> {
    buf: Rc<RefCell<Vec<Ev>>>,
}

impl<Ev> Clone for EventSink<Ev> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
        }
    }
}

impl<Ev> EventSink<Ev> {
    /// Records one event, in emission order.
    pub fn emit(&self, event: Ev) {
        self.buf.borrow_mut().push(event);
    }
}

/// Binds a parser factory and its event sink to a [`Harness`], draining
/// whatever events accumulated on each push.
pub struct Collector<Ev, E> {
    buf: Rc<RefCell<Vec<Ev>>>,
    harness: Harness<E>,
}

impl<Ev, E> Collector<Ev, E> {
    /// Builds the event sink, then asks `factory` to build the [`Harness`]
    /// that will emit into it.
    pub fn new<F>(factory: F) -> Self
    where
        F: FnOnce(EventSink<Ev>) -> Harness<E>,
    {
        let buf = Rc::new(RefCell::new(Vec::new()));
        let sink = EventSink { buf: buf.clone() };
        let harness = factory(sink);
        Self { buf, harness }
    }

    /// Whether the underlying harness has reached a terminal state.
    pub fn is_finished(&self) -> bool {
        self.harness.is_finished()
    }

    /// Pushes a chunk (or signals EOF on an empty one), returning whatever
    /// events the parser emitted during that single push, in order.
    pub fn send(&mut self, chunk: &[u8]) -> Result<Vec<Ev>, PushError<E>> {
        let result = self.harness.push(chunk);
        let events = self.buf.borrow_mut().drain(..).collect();
        result.map(|()| events)
    }
}
