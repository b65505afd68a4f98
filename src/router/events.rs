//! Browser event dispatch.
//!
//! | Event        | Path mode                          | Hash mode              |
//! |--------------|------------------------------------|------------------------|
//! | `click`      | same-origin `/segment` links       | ignored                |
//! | `popstate`   | route location, unless suppressed  | ignored                |
//! | `hashchange` | ignored                            | route current anchor   |

use serde::Serialize;

use super::{Navigation, Router};
use crate::config::RoutingMode;
use crate::core::{is_routable_link, route_key};
use crate::debug;
use crate::dom::{ClickTarget, History, Page};

/// An event the router listens to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterEvent {
    Click(ClickTarget),
    PopState,
    HashChange,
}

impl RouterEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Click(_) => EventKind::Click,
            Self::PopState => EventKind::PopState,
            Self::HashChange => EventKind::HashChange,
        }
    }
}

/// Event names, for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Load,
    Click,
    PopState,
    HashChange,
}

/// How the router reacted to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum EventOutcome {
    /// The router navigated; for clicks the default action must be prevented.
    Routed(Navigation),
    /// A popstate caused by our own hash write was swallowed.
    Suppressed,
    /// Not for us; the browser handles it.
    Ignored,
}

impl EventOutcome {
    pub fn navigation(&self) -> Option<&Navigation> {
        match self {
            Self::Routed(nav) => Some(nav),
            _ => None,
        }
    }

    pub fn is_routed(&self) -> bool {
        matches!(self, Self::Routed(_))
    }
}

impl<P: Page, H: History> Router<P, H> {
    pub fn dispatch(&mut self, event: &RouterEvent) -> EventOutcome {
        match event {
            RouterEvent::Click(target) => self.handle_click(target),
            RouterEvent::PopState => self.handle_pop_state(),
            RouterEvent::HashChange => self.handle_hash_change(),
        }
    }

    /// Take over clicks on same-origin single-segment links (path mode).
    pub fn handle_click(&mut self, target: &ClickTarget) -> EventOutcome {
        if self.mode != RoutingMode::Path || !target.is_anchor() {
            return EventOutcome::Ignored;
        }
        if target.host != self.history.location().host || !is_routable_link(&target.pathname) {
            debug!("router"; "leaving `{}{}` to the browser", target.host, target.pathname);
            return EventOutcome::Ignored;
        }
        let path = route_key(&target.pathname).to_string();
        EventOutcome::Routed(self.process_path(&path, Some(&target.hash), false))
    }

    /// Back/forward (path mode), consuming a pending suppression first.
    pub fn handle_pop_state(&mut self) -> EventOutcome {
        if self.mode != RoutingMode::Path {
            return EventOutcome::Ignored;
        }
        if self.state.suppress_pop_state {
            self.state.suppress_pop_state = false;
            return EventOutcome::Suppressed;
        }
        let location = self.history.location();
        EventOutcome::Routed(self.process_path(&location.pathname, location.hash.as_deref(), true))
    }

    /// Anchor changes (hash mode).
    pub fn handle_hash_change(&mut self) -> EventOutcome {
        if self.mode != RoutingMode::Hash {
            return EventOutcome::Ignored;
        }
        let anchor = self.current_anchor();
        EventOutcome::Routed(self.process_anchor(&anchor))
    }
}
