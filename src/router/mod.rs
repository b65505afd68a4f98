//! Fragment router.
//!
//! # Module Structure
//!
//! | Module    | Purpose                                                |
//! |-----------|--------------------------------------------------------|
//! | `table`   | Path table built from the page at startup              |
//! | `path`    | Path mode: `/about` URLs via the History API           |
//! | `hash`    | Hash mode: `#about` and `#about/team` anchors          |
//! | `events`  | Click / popstate / hashchange dispatch                 |
//! | `session` | Drives a router over `MemoryHistory` (tests, CLI)      |
//! | `shared`  | Router shared with re-entrant event listeners (wasm)   |
//!
//! # Routing state
//!
//! ```text
//! initial_load        true ──first route──▶ false   (never back)
//! suppress_pop_state  false ──hash write──▶ true ──next popstate──▶ false
//! ```
//!
//! Whatever is requested, exactly one fragment is visible and exactly one
//! navigation link is selected afterwards, both for the same key, and that
//! key is in the path table.

mod error;
mod events;
mod hash;
mod path;
mod session;
mod shared;
mod table;

pub use error::RouterError;
pub use events::{EventKind, EventOutcome, RouterEvent};
pub use session::{Dispatched, Session, SessionError, Step};
pub use shared::SharedRouter;
pub use table::{PathEntry, PathTable};

use serde::Serialize;

use crate::config::{CascadeFallback, ClassConfig, RouterConfig, RoutingMode, TitleConfig};
use crate::dom::{History, Page};

/// Flags carried between routing steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingState {
    /// No route has been processed yet; history is left alone.
    pub initial_load: bool,
    /// The next popstate was caused by our own hash write.
    pub suppress_pop_state: bool,
}

impl Default for RoutingState {
    fn default() -> Self {
        Self {
            initial_load: true,
            suppress_pop_state: false,
        }
    }
}

/// What one routing step did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// Route now shown.
    pub key: String,
    /// Path or anchor that was asked for.
    pub requested: String,
    /// `requested` was unknown or malformed; the default route is shown.
    pub fell_back: bool,
    /// A history entry was pushed.
    pub pushed: bool,
    /// The current history entry was replaced.
    pub replaced: bool,
    /// Hash written to the location, without `#`.
    pub hash: Option<String>,
    /// Sub-anchor scrolled into view (hash mode cascades).
    pub scrolled_to: Option<String>,
}

impl Navigation {
    fn requested(requested: &str) -> Self {
        Self {
            requested: requested.to_string(),
            ..Default::default()
        }
    }
}

/// Shows one fragment at a time and keeps title, navigation and history in step.
pub struct Router<P: Page, H: History> {
    page: P,
    history: H,
    table: PathTable<P::Element>,
    mode: RoutingMode,
    default_index: usize,
    title: TitleConfig,
    classes: ClassConfig,
    cascade: CascadeFallback,
    state: RoutingState,
}

impl<P: Page, H: History> Router<P, H> {
    /// Build the path table from `page` and check the default route exists.
    ///
    /// Nothing on the page changes until [`Router::start`].
    pub fn new(config: &RouterConfig, page: P, history: H) -> Result<Self, RouterError> {
        let table = PathTable::build(&page, config)?;
        let default_index =
            table
                .position(&config.router.default)
                .ok_or_else(|| RouterError::UnknownDefault {
                    default: config.router.default.clone(),
                    known: table.keys().collect::<Vec<_>>().join(", "),
                })?;

        Ok(Self {
            page,
            history,
            table,
            mode: config.router.mode,
            default_index,
            title: config.title.clone(),
            classes: config.classes.clone(),
            cascade: config.hash.cascade,
            state: RoutingState::default(),
        })
    }

    /// Route the current location, as on page load.
    pub fn start(&mut self) -> Navigation {
        match self.mode {
            RoutingMode::Path => {
                let location = self.history.location();
                self.process_path(&location.pathname, location.hash.as_deref(), false)
            }
            RoutingMode::Hash => self.initialise_anchor(),
        }
    }

    pub fn mode(&self) -> RoutingMode {
        self.mode
    }

    pub fn state(&self) -> RoutingState {
        self.state
    }

    pub fn table(&self) -> &PathTable<P::Element> {
        &self.table
    }

    pub fn default_key(&self) -> &str {
        &self.table.entries()[self.default_index].key
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Hand the backends back.
    pub fn into_parts(self) -> (P, H) {
        (self.page, self.history)
    }

    /// Show the fragment at `index`, hide the rest, update title and links.
    fn render(&mut self, index: usize) {
        let visible = self.classes.visible_fragment();
        let hidden = self.classes.hidden_fragment();
        let selected = [self.classes.selected.as_str()];

        for (i, entry) in self.table.entries().iter().enumerate() {
            if i == index {
                self.page.set_classes(&entry.fragment, &visible);
                self.page.set_classes(&entry.link, &selected);
            } else {
                self.page.set_classes(&entry.fragment, &hidden);
                self.page.set_classes(&entry.link, &[]);
            }
        }

        let title = self.title.format(&self.table.entries()[index].label);
        self.page.set_title(&title);
    }

    fn key_at(&self, index: usize) -> String {
        self.table.entries()[index].key.clone()
    }
}

#[cfg(test)]
mod tests;
