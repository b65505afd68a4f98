//! A router shared with event callbacks that may re-enter it.
//!
//! Browsers fire `popstate` synchronously from inside a `location.hash`
//! write, so a listener can be called while the router is still handling
//! the click that wrote the hash. Such events are queued and delivered to
//! the router once the outer event returns, in arrival order.
//!
//! ```text
//! click ──▶ dispatch ──▶ set_hash ──▶ popstate ──▶ dispatch (busy: queue)
//!                 └──────── returns ──▶ drain queue ──▶ popstate (suppressed)
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;

use super::{Dispatched, Router, RouterEvent};
use crate::dom::{History, Page};
use crate::{debug, log};

/// Upper bound on queued events delivered after one outer event.
const MAX_DEFERRED: usize = 16;

pub struct SharedRouter<P: Page, H: History> {
    router: RefCell<Option<Router<P, H>>>,
    deferred: RefCell<VecDeque<RouterEvent>>,
}

impl<P: Page, H: History> SharedRouter<P, H> {
    pub const fn new() -> Self {
        Self {
            router: RefCell::new(None),
            deferred: RefCell::new(VecDeque::new()),
        }
    }

    /// Install `router`, returning the previous one.
    ///
    /// # Panics
    ///
    /// When called from inside [`SharedRouter::dispatch`].
    pub fn replace(&self, router: Router<P, H>) -> Option<Router<P, H>> {
        self.router.replace(Some(router))
    }

    pub fn is_installed(&self) -> bool {
        self.router.try_borrow().is_ok_and(|router| router.is_some())
    }

    /// Run `f` on the router; `None` when none is installed or it is busy.
    pub fn with_router<R>(&self, f: impl FnOnce(&mut Router<P, H>) -> R) -> Option<R> {
        let mut slot = self.router.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    }

    /// Deliver `event`, then every event that arrived while it was handled.
    ///
    /// The event's own outcome comes first. Returns nothing when no router is
    /// installed, or when the router is busy and `event` was queued.
    pub fn dispatch(&self, event: RouterEvent) -> Vec<Dispatched> {
        let Ok(mut slot) = self.router.try_borrow_mut() else {
            debug!("router"; "queueing {:?} until the current event is handled", event.kind());
            self.deferred.borrow_mut().push_back(event);
            return Vec::new();
        };
        let Some(router) = slot.as_mut() else {
            return Vec::new();
        };

        let mut out = vec![deliver(router, event)];
        for _ in 0..MAX_DEFERRED {
            let next = self.deferred.borrow_mut().pop_front();
            match next {
                Some(event) => out.push(deliver(router, event)),
                None => return out,
            }
        }

        let dropped = self.deferred.borrow_mut().drain(..).count();
        if dropped > 0 {
            log!("warning"; "dropped {} queued events after {} deliveries", dropped, MAX_DEFERRED);
        }
        out
    }
}

impl<P: Page, H: History> Default for SharedRouter<P, H> {
    fn default() -> Self {
        Self::new()
    }
}

fn deliver<P: Page, H: History>(router: &mut Router<P, H>, event: RouterEvent) -> Dispatched {
    let outcome = router.dispatch(&event);
    Dispatched {
        event: event.kind(),
        outcome,
    }
}
