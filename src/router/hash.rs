//! Hash mode routing with `root/sub` anchor cascades.

use super::{Navigation, Router};
use crate::config::CascadeFallback;
use crate::core::{AnchorPath, MalformedAnchor, parse_anchor};
use crate::debug;
use crate::dom::{History, Page};

impl<P: Page, H: History> Router<P, H> {
    /// Location text after the first `#`, empty without one.
    pub fn current_anchor(&self) -> String {
        self.history.location().hash.unwrap_or_default()
    }

    /// Route the current anchor on page load; without any `#` in the URL
    /// the default anchor is set.
    pub fn initialise_anchor(&mut self) -> Navigation {
        match self.history.location().hash {
            Some(anchor) => self.process_anchor(&anchor),
            None => {
                let mut nav = Navigation::requested("");
                self.reset_anchor(&mut nav);
                self.state.initial_load = false;
                nav
            }
        }
    }

    /// Route an anchor (without `#`): `about` or the cascade `about/team`.
    ///
    /// Empty anchors, stray `#`s and unknown roots reset to the default.
    /// Unresolvable cascades follow the configured [`CascadeFallback`].
    pub fn process_anchor(&mut self, anchor: &str) -> Navigation {
        let mut nav = Navigation::requested(anchor);

        match parse_anchor(anchor) {
            Ok(AnchorPath { root, sub }) => match self.table.position(root) {
                Some(index) => {
                    self.set_anchor(index, &mut nav);
                    if let Some(sub) = sub {
                        self.scroll_to_sub(index, sub, &mut nav);
                    }
                }
                None => {
                    debug!("router"; "unknown anchor `{}`", anchor);
                    self.reset_anchor(&mut nav);
                }
            },
            Err(MalformedAnchor::TooDeep { root }) => {
                debug!("router"; "anchor `{}` is nested too deep", anchor);
                match (self.cascade, self.table.position(root)) {
                    (CascadeFallback::Root, Some(index)) => self.set_anchor(index, &mut nav),
                    _ => self.reset_anchor(&mut nav),
                }
            }
            Err(MalformedAnchor::Empty | MalformedAnchor::StrayHash) => {
                self.reset_anchor(&mut nav);
            }
        }

        self.state.initial_load = false;
        nav
    }

    /// Scroll `sub` into view if it lives inside the fragment at `index`.
    fn scroll_to_sub(&mut self, index: usize, sub: &str, nav: &mut Navigation) {
        let fragment = &self.table.entries()[index].fragment;
        match self.page.element_by_id(sub) {
            Some(element) if self.page.contains(fragment, &element) => {
                self.page.scroll_into_view(&element);
                nav.scrolled_to = Some(sub.to_string());
            }
            _ => {
                debug!("router"; "`{}` is not inside `{}`", sub, self.key_at(index));
                if self.cascade == CascadeFallback::Default {
                    self.reset_anchor(nav);
                }
            }
        }
    }

    fn reset_anchor(&mut self, nav: &mut Navigation) {
        nav.fell_back = true;
        self.set_anchor(self.default_index, nav);
    }

    /// Show the route at `index` and make the location hash point at it.
    fn set_anchor(&mut self, index: usize, nav: &mut Navigation) {
        self.render(index);
        let key = self.key_at(index);

        if self.current_anchor() != key {
            self.history.set_hash(&key);
            nav.hash = Some(key.clone());
        }
        nav.key = key;
    }
}
