//! Path mode routing.

use super::{Navigation, Router};
use crate::core::{normalize_hash, route_key, route_url};
use crate::debug;
use crate::dom::{History, Page};

impl<P: Page, H: History> Router<P, H> {
    /// Route to `path` (`/about`, `about/`, ...) with an optional hash.
    ///
    /// Unknown paths show the default route and replace the current history
    /// entry. A new entry is pushed only after the initial load and never
    /// for popstate-driven calls. A non-empty hash replaces the entry too,
    /// then is written to the location with the next popstate suppressed.
    pub fn process_path(&mut self, path: &str, hash: Option<&str>, caused_by_pop: bool) -> Navigation {
        let requested = route_key(path);
        let mut nav = Navigation::requested(requested);

        let index = match self.table.position(requested) {
            Some(index) => index,
            None => {
                debug!(
                    "router";
                    "unknown path `{}`, showing `{}`",
                    requested,
                    self.default_key()
                );
                nav.fell_back = true;
                self.default_index
            }
        };
        let key = self.key_at(index);
        let hash = hash.and_then(normalize_hash);

        self.render(index);

        // initial load and popstate already have their entry
        if !self.state.initial_load && !caused_by_pop {
            self.history.push_state(&route_url(&key));
            nav.pushed = true;
        }

        if nav.fell_back || hash.is_some() {
            self.history.replace_state(&route_url(&key));
            nav.replaced = true;
        }

        if let Some(hash) = hash {
            self.state.suppress_pop_state = true;
            self.history.set_hash(hash);
            nav.hash = Some(hash.to_string());
        }

        self.state.initial_load = false;
        nav.key = key;
        nav
    }
}
