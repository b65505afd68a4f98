//! Replay navigation against a router over [`MemoryHistory`].
//!
//! A browser fires `popstate`/`hashchange` on its own after hash writes and
//! traversal. `Session` plays that role: after every step it pumps the
//! events queued by the history back into the router until none are left.

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use url::Url;

use super::{EventKind, EventOutcome, Router, RouterError, RouterEvent};
use crate::config::RouterConfig;
use crate::dom::{ClickTarget, History, HistoryEvent, MemoryHistory, Page};

/// Upper bound on event pumping rounds per step.
const MAX_SETTLE_ROUNDS: usize = 16;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid URL `{0}`: {1}")]
    Url(String, #[source] url::ParseError),

    #[error(transparent)]
    Router(#[from] RouterError),

    #[error("unknown step `{0}`, expected click:<href>, hash:<anchor>, back or forward")]
    Step(String),
}

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Click a link with this href (resolved against the current URL).
    Click(String),
    /// Edit the address bar hash.
    Hash(String),
    Back,
    Forward,
}

impl FromStr for Step {
    type Err = SessionError;

    /// `click:/projects`, `hash:about/team`, `back`, `forward`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some(("click", href)) => Ok(Self::Click(href.to_string())),
            Some(("hash", anchor)) => Ok(Self::Hash(anchor.to_string())),
            None if s == "back" => Ok(Self::Back),
            None if s == "forward" => Ok(Self::Forward),
            _ => Err(SessionError::Step(s.to_string())),
        }
    }
}

/// An event and the router's reaction to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dispatched {
    pub event: EventKind,
    #[serde(flatten)]
    pub outcome: EventOutcome,
}

pub struct Session<P: Page> {
    router: Router<P, MemoryHistory>,
}

impl<P: Page> Session<P> {
    /// Open `page` at `url`; nothing is routed until [`Session::load`].
    pub fn new(config: &RouterConfig, page: P, url: &str) -> Result<Self, SessionError> {
        let url = Url::parse(url).map_err(|err| SessionError::Url(url.to_string(), err))?;
        let router = Router::new(config, page, MemoryHistory::new(url))?;
        Ok(Self { router })
    }

    pub fn router(&self) -> &Router<P, MemoryHistory> {
        &self.router
    }

    pub fn history(&self) -> &MemoryHistory {
        self.router.history()
    }

    pub fn page(&self) -> &P {
        self.router.page()
    }

    /// Initial routing, as the script does when the page loads.
    pub fn load(&mut self) -> Vec<Dispatched> {
        let nav = self.router.start();
        let mut out = vec![Dispatched {
            event: EventKind::Load,
            outcome: EventOutcome::Routed(nav),
        }];
        self.settle(&mut out);
        out
    }

    pub fn run(&mut self, step: &Step) -> Result<Vec<Dispatched>, SessionError> {
        let mut out = Vec::new();
        match step {
            Step::Click(href) => {
                let base = self.router.history().current_url();
                let target = ClickTarget::anchor(href, base)
                    .map_err(|err| SessionError::Url(href.clone(), err))?;
                self.dispatch(RouterEvent::Click(target), &mut out);
            }
            Step::Hash(anchor) => self.router.history_mut().set_hash(anchor),
            Step::Back => {
                self.router.history_mut().back();
            }
            Step::Forward => {
                self.router.history_mut().forward();
            }
        }
        self.settle(&mut out);
        Ok(out)
    }

    fn dispatch(&mut self, event: RouterEvent, out: &mut Vec<Dispatched>) {
        let outcome = self.router.dispatch(&event);
        out.push(Dispatched {
            event: event.kind(),
            outcome,
        });
    }

    /// Deliver queued history events until the history is quiet.
    fn settle(&mut self, out: &mut Vec<Dispatched>) {
        for _ in 0..MAX_SETTLE_ROUNDS {
            let events = self.router.history_mut().take_events();
            if events.is_empty() {
                return;
            }
            for event in events {
                let event = match event {
                    HistoryEvent::PopState => RouterEvent::PopState,
                    HistoryEvent::HashChange => RouterEvent::HashChange,
                };
                self.dispatch(event, out);
            }
        }
        crate::log!("warning"; "history did not settle after {} rounds", MAX_SETTLE_ROUNDS);
    }
}
