//! Path table: route key -> (fragment, navigation link, label).
//!
//! Built once when the router starts and never modified afterwards.

use rustc_hash::FxHashMap;

use super::RouterError;
use crate::config::RouterConfig;
use crate::debug;
use crate::dom::{Page, Selector};

/// One routable section of the page.
#[derive(Debug, Clone)]
pub struct PathEntry<E> {
    pub key: String,
    pub fragment: E,
    pub link: E,
    /// Title label for this route.
    pub label: String,
}

/// Immutable mapping from route key to its elements, in page/config order.
#[derive(Debug, Clone)]
pub struct PathTable<E> {
    entries: Vec<PathEntry<E>>,
    positions: FxHashMap<String, usize>,
}

impl<E: Clone> PathTable<E> {
    /// Build the table from declared routes, or by discovering
    /// `.fragment[id]` elements when none are declared.
    ///
    /// Every route must have its fragment and exactly-addressed navigation
    /// link on the page; the first missing piece aborts the build.
    pub fn build<P>(page: &P, config: &RouterConfig) -> Result<Self, RouterError>
    where
        P: Page<Element = E>,
    {
        let mut table = Self {
            entries: Vec::new(),
            positions: FxHashMap::default(),
        };

        if config.routes.is_empty() {
            let selector = Selector::fragments(&config.classes.fragment);
            for fragment in page.query_all(&selector) {
                let id = page.id(&fragment);
                if id.is_empty() {
                    debug!("router"; "skipping fragment with empty id");
                    continue;
                }
                let link = find_link(page, config, &id)?;
                let label = page.inner_html(&link).trim().to_string();
                table.insert(PathEntry {
                    key: id,
                    fragment,
                    link,
                    label,
                })?;
            }
        } else {
            for route in &config.routes {
                let selector = Selector::fragment(&config.classes.fragment, &route.id);
                let fragment = page
                    .query(&selector)
                    .ok_or_else(|| RouterError::MissingFragment {
                        id: route.id.clone(),
                        selector: selector.to_css(),
                    })?;
                let link = find_link(page, config, &route.id)?;
                let label = match &route.label {
                    Some(label) => label.clone(),
                    None => page.inner_html(&link).trim().to_string(),
                };
                table.insert(PathEntry {
                    key: route.id.clone(),
                    fragment,
                    link,
                    label,
                })?;
            }
        }

        if table.is_empty() {
            return Err(RouterError::EmptyTable(
                Selector::fragments(&config.classes.fragment).to_css(),
            ));
        }
        Ok(table)
    }

    fn insert(&mut self, entry: PathEntry<E>) -> Result<(), RouterError> {
        if self.positions.contains_key(&entry.key) {
            return Err(RouterError::DuplicateRoute(entry.key));
        }
        self.positions.insert(entry.key.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }
}

impl<E> PathTable<E> {
    /// Index of a route key.
    #[inline]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.positions.get(key).copied()
    }

    pub fn get(&self, key: &str) -> Option<&PathEntry<E>> {
        self.position(key).map(|index| &self.entries[index])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    pub fn entries(&self) -> &[PathEntry<E>] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Navigation link for a route, per mode and container settings.
fn find_link<P: Page>(page: &P, config: &RouterConfig, id: &str) -> Result<P::Element, RouterError> {
    let href = config.router.mode.link_href(id);
    let selector = Selector::nav_link(config.nav.container(), &href);
    page.query(&selector).ok_or_else(|| RouterError::MissingLink {
        id: id.to_string(),
        selector: selector.to_css(),
    })
}
