// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coppice Events: subscription-token publish/subscribe primitives.
//!
//! This crate provides [`Emitter`], a minimal synchronous notification list
//! used by the Coppice controllers (paging, navigation, zoom) to announce
//! lifecycle moments such as "navigation starting" or "zoom completed".
//!
//! Handlers run synchronously on the calling thread, in subscription order.
//! There is no queue, no threading, and no payload machinery beyond the event
//! value itself; controllers that need richer channels are expected to build
//! them at a higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use coppice_events::Emitter;
//!
//! let mut started = Emitter::<()>::new();
//! let token = started.subscribe(Box::new(|_| {
//!     // react to the notification
//! }));
//!
//! started.emit(&());
//! started.unsubscribe(token);
//!
//! // Stale tokens are silently ignored.
//! started.unsubscribe(token);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Handler callback stored by an [`Emitter`].
pub type Handler<E> = Box<dyn FnMut(&E)>;

/// Opaque token identifying one subscription on one [`Emitter`].
///
/// Tokens are only meaningful for the emitter that produced them. Passing a
/// token to a different emitter, or unsubscribing twice, is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// A synchronous, ordered notification list.
///
/// `Emitter` owns a list of boxed handlers. [`Emitter::emit`] invokes them in
/// subscription order on the calling thread and returns once every handler
/// has run. All mutation goes through `&mut self`, so emitters are
/// single-thread-only by construction, matching the cooperative model of the
/// controllers that own them.
pub struct Emitter<E = ()> {
    handlers: Vec<(u64, Handler<E>)>,
    next_id: u64,
}

impl<E> Emitter<E> {
    /// Creates an empty emitter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers a handler and returns its subscription token.
    ///
    /// Handlers fire in subscription order.
    pub fn subscribe(&mut self, handler: Handler<E>) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.handlers.push((id, handler));
        Subscription(id)
    }

    /// Removes the handler identified by `token`.
    ///
    /// Returns `true` if a handler was removed. Unknown or already-removed
    /// tokens are ignored.
    pub fn unsubscribe(&mut self, token: Subscription) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(id, _)| *id != token.0);
        self.handlers.len() != before
    }

    /// Invokes every handler with `event`, in subscription order.
    pub fn emit(&mut self, event: &E) {
        for (_, handler) in &mut self.handlers {
            handler(event);
        }
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no handlers are subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<E> Default for Emitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Emitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("handlers", &self.handlers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::Emitter;

    #[test]
    fn emit_fires_in_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = Emitter::<()>::new();

        for tag in [1, 2, 3] {
            let order = Rc::clone(&order);
            emitter.subscribe(Box::new(move |_| order.borrow_mut().push(tag)));
        }

        emitter.emit(&());
        assert_eq!(*order.borrow(), [1, 2, 3]);
    }

    #[test]
    fn unsubscribe_removes_only_the_token_owner() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = Emitter::<u32>::new();

        let first = {
            let hits = Rc::clone(&hits);
            emitter.subscribe(Box::new(move |e| hits.borrow_mut().push(("a", *e))))
        };
        {
            let hits = Rc::clone(&hits);
            emitter.subscribe(Box::new(move |e| hits.borrow_mut().push(("b", *e))));
        }

        assert!(emitter.unsubscribe(first));
        emitter.emit(&7);
        assert_eq!(*hits.borrow(), [("b", 7)]);
    }

    #[test]
    fn stale_token_unsubscribe_is_a_no_op() {
        let mut emitter = Emitter::<()>::new();
        let token = emitter.subscribe(Box::new(|_| {}));

        assert!(emitter.unsubscribe(token));
        assert!(!emitter.unsubscribe(token));
        assert!(emitter.is_empty());
    }

    #[test]
    fn emit_with_no_handlers_is_safe() {
        let mut emitter = Emitter::<()>::new();
        emitter.emit(&());
        assert_eq!(emitter.len(), 0);
    }

    #[test]
    fn handlers_receive_the_event_payload() {
        let seen = Rc::new(RefCell::new(None));
        let mut emitter = Emitter::<u64>::new();
        {
            let seen = Rc::clone(&seen);
            emitter.subscribe(Box::new(move |e| *seen.borrow_mut() = Some(*e)));
        }

        emitter.emit(&42);
        assert_eq!(*seen.borrow(), Some(42));
    }
}
