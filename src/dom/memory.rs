//! In-memory page and history.
//!
//! `MemoryPage` is a flat element arena with parent links, enough to answer
//! [`Selector`] queries. `MemoryHistory` mimics the session history of one
//! document: an entry stack plus the `popstate`/`hashchange` events a browser
//! would queue while traversing it.

use std::collections::VecDeque;

use serde::Serialize;
use url::Url;

use super::{History, Location, Page, Selector};
use crate::log;

// ============================================================================
// MemoryPage
// ============================================================================

/// Handle into a [`MemoryPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

/// A single element of a [`MemoryPage`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementData {
    /// Lowercase tag name.
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub href: Option<String>,
    pub inner_html: String,
    pub parent: Option<ElementId>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_href(mut self, href: &str) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_html(mut self, html: &str) -> Self {
        self.inner_html = html.into();
        self
    }

    /// Set `class` from a raw attribute value.
    pub fn with_class_attr(mut self, value: &str) -> Self {
        self.classes = value.split_whitespace().map(str::to_string).collect();
        self
    }
}

/// Document model backed by a `Vec` of elements in document order.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    elements: Vec<ElementData>,
    title: String,
    scrolled: Vec<ElementId>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element under `parent` (document order = insertion order).
    pub fn push(&mut self, mut element: ElementData, parent: Option<ElementId>) -> ElementId {
        element.parent = parent;
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    pub fn element(&self, id: ElementId) -> &ElementData {
        &self.elements[id.0]
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Current class attribute, space separated.
    pub fn class_name(&self, id: ElementId) -> String {
        self.element(id).classes.join(" ")
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.element(id).classes.iter().any(|c| c == class)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Elements scrolled into view, oldest first.
    pub fn scrolled(&self) -> &[ElementId] {
        &self.scrolled
    }

    fn matches(&self, element: &ElementData, selector: &Selector) -> bool {
        if selector.tag.as_deref().is_some_and(|tag| element.tag != tag) {
            return false;
        }
        if let Some(class) = &selector.class
            && !element.classes.iter().any(|c| c == class)
        {
            return false;
        }
        if let Some(id) = &selector.id
            && element.id.as_ref() != Some(id)
        {
            return false;
        }
        if selector.has_id && element.id.is_none() {
            return false;
        }
        if let Some(href) = &selector.href
            && element.href.as_ref() != Some(href)
        {
            return false;
        }
        if let Some(parent_tag) = &selector.parent_tag {
            return element
                .parent
                .is_some_and(|parent| &self.element(parent).tag == parent_tag);
        }
        true
    }
}

impl Page for MemoryPage {
    type Element = ElementId;

    fn query_all(&self, selector: &Selector) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| self.matches(element, selector))
            .map(|(index, _)| ElementId(index))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|element| element.id.as_deref() == Some(id))
            .map(ElementId)
    }

    fn id(&self, element: &ElementId) -> String {
        self.element(*element).id.clone().unwrap_or_default()
    }

    fn inner_html(&self, element: &ElementId) -> String {
        self.element(*element).inner_html.clone()
    }

    fn set_classes(&mut self, element: &ElementId, classes: &[&str]) {
        self.elements[element.0].classes = classes
            .iter()
            .flat_map(|class| class.split_whitespace())
            .map(str::to_string)
            .collect();
    }

    fn contains(&self, ancestor: &ElementId, element: &ElementId) -> bool {
        let mut current = Some(*element);
        while let Some(id) = current {
            if id == *ancestor {
                return true;
            }
            current = self.element(id).parent;
        }
        false
    }

    fn scroll_into_view(&mut self, element: &ElementId) {
        self.scrolled.push(*element);
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }
}

// ============================================================================
// MemoryHistory
// ============================================================================

/// Events a browser fires while the session history changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryEvent {
    PopState,
    HashChange,
}

/// Session history of a single document.
///
/// `push_state`/`replace_state` are silent, like the History API. Hash writes
/// and traversal queue the events a browser would fire; drain them with
/// [`MemoryHistory::take_events`].
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Url>,
    index: usize,
    events: VecDeque<HistoryEvent>,
}

impl MemoryHistory {
    pub fn new(url: Url) -> Self {
        Self {
            entries: vec![url],
            index: 0,
            events: VecDeque::new(),
        }
    }

    pub fn current_url(&self) -> &Url {
        &self.entries[self.index]
    }

    /// All entries as strings, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.iter().map(Url::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the current entry.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Traverse one entry back. Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.traverse_to(self.index - 1);
        true
    }

    /// Traverse one entry forward. Returns `false` at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.traverse_to(self.index + 1);
        true
    }

    /// Take queued events in firing order.
    pub fn take_events(&mut self) -> Vec<HistoryEvent> {
        self.events.drain(..).collect()
    }

    fn traverse_to(&mut self, index: usize) {
        let hash_changed = self.entries[self.index].fragment() != self.entries[index].fragment();
        self.index = index;
        self.events.push_back(HistoryEvent::PopState);
        if hash_changed {
            self.events.push_back(HistoryEvent::HashChange);
        }
    }

    /// Resolve `url` for `pushState`/`replaceState`. Browsers throw on
    /// unparsable or cross-origin URLs; the history is left unchanged.
    fn resolve(&self, url: &str) -> Option<Url> {
        let current = self.current_url();
        match current.join(url) {
            Ok(resolved) if resolved.origin() == current.origin() => Some(resolved),
            Ok(resolved) => {
                log!(
                    "error";
                    "cannot move history from {} to {}: different origin",
                    current.origin().ascii_serialization(),
                    resolved.origin().ascii_serialization()
                );
                None
            }
            Err(err) => {
                log!("error"; "cannot move history to `{}`: {}", url, err);
                None
            }
        }
    }

    fn push_entry(&mut self, url: Url) {
        self.entries.truncate(self.index + 1);
        self.entries.push(url);
        self.index = self.entries.len() - 1;
    }
}

impl History for MemoryHistory {
    fn location(&self) -> Location {
        Location::from_url(self.current_url())
    }

    fn push_state(&mut self, url: &str) {
        if let Some(url) = self.resolve(url) {
            self.push_entry(url);
        }
    }

    fn replace_state(&mut self, url: &str) {
        if let Some(url) = self.resolve(url) {
            self.entries[self.index] = url;
        }
    }

    fn set_hash(&mut self, hash: &str) {
        let hash = hash.strip_prefix('#').unwrap_or(hash);
        let mut url = self.current_url().clone();
        url.set_fragment(Some(hash));
        if url == *self.current_url() {
            return;
        }
        self.push_entry(url);
        self.events.push_back(HistoryEvent::PopState);
        self.events.push_back(HistoryEvent::HashChange);
    }
}

// ============================================================================
// Test fixtures
// ============================================================================

/// Build the usual site layout: a nav list plus one fragment per route.
///
/// ```text
/// <ul><li><a href="/about">About</a></li>...</ul>
/// <main><div class="fragment" id="about">...</div>...</main>
/// ```
#[cfg(test)]
pub(crate) fn sample_site(
    href_prefix: &str,
    fragment_class: &str,
    routes: &[(&str, &str)],
) -> MemoryPage {
    let mut page = MemoryPage::new();
    let nav = page.push(ElementData::new("ul"), None);
    for (id, label) in routes {
        let item = page.push(ElementData::new("li"), Some(nav));
        page.push(
            ElementData::new("a")
                .with_href(&format!("{href_prefix}{id}"))
                .with_html(label),
            Some(item),
        );
    }
    let main = page.push(ElementData::new("main"), None);
    for (id, _) in routes {
        let section = page.push(
            ElementData::new("div").with_id(id).with_class(fragment_class),
            Some(main),
        );
        page.push(
            ElementData::new("h2").with_id(&format!("{id}-intro")),
            Some(section),
        );
    }
    page
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_query_fragments_and_links() {
        let page = sample_site("/", "fragment", &[("about", "About"), ("projects", "Projects")]);

        let fragments = page.query_all(&Selector::fragments("fragment"));
        assert_eq!(fragments.len(), 2);
        assert_eq!(page.id(&fragments[1]), "projects");

        let link = page.query(&Selector::nav_link(Some("li"), "/about")).unwrap();
        assert_eq!(page.inner_html(&link), "About");
        assert!(page.query(&Selector::nav_link(Some("nav"), "/about")).is_none());
        assert!(page.query(&Selector::nav_link(None, "/about")).is_some());
    }

    #[test]
    fn test_contains_and_classes() {
        let mut page = sample_site("/", "fragment", &[("about", "About")]);
        let about = page.element_by_id("about").unwrap();
        let intro = page.element_by_id("about-intro").unwrap();

        assert!(page.contains(&about, &intro));
        assert!(page.contains(&about, &about));
        assert!(!page.contains(&intro, &about));

        page.set_classes(&about, &["hidden fragment"]);
        assert_eq!(page.class_name(about), "hidden fragment");
        assert!(page.has_class(about, "hidden"));
    }

    #[test]
    fn test_history_push_replace() {
        let mut history = MemoryHistory::new(url("https://example.com/about"));
        history.push_state("/projects");
        history.replace_state("/blog");
        assert_eq!(history.len(), 2);
        assert_eq!(history.location().pathname, "/blog");
        assert!(history.take_events().is_empty());
    }

    #[test]
    fn test_history_rejects_bad_urls() {
        let mut history = MemoryHistory::new(url("https://example.com/about"));
        history.push_state("http://[oops");
        history.push_state("https://other.example/projects");
        history.replace_state("http://example.com/blog");
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_url().as_str(), "https://example.com/about");
    }

    #[test]
    fn test_history_set_hash_queues_events() {
        let mut history = MemoryHistory::new(url("https://example.com/about"));
        history.set_hash("team");
        assert_eq!(history.len(), 2);
        assert_eq!(history.location().hash.as_deref(), Some("team"));
        assert_eq!(
            history.take_events(),
            [HistoryEvent::PopState, HistoryEvent::HashChange]
        );

        // same hash again: no navigation
        history.set_hash("#team");
        assert_eq!(history.len(), 2);
        assert!(history.take_events().is_empty());
    }

    #[test]
    fn test_history_traversal() {
        let mut history = MemoryHistory::new(url("https://example.com/about"));
        history.push_state("/projects");
        history.push_state("/blog");

        assert!(history.back());
        assert_eq!(history.location().pathname, "/projects");
        assert_eq!(history.take_events(), [HistoryEvent::PopState]);

        // pushing drops forward entries
        history.push_state("/contact");
        assert!(!history.forward());
        assert_eq!(history.entries().len(), 3);

        assert!(history.back());
        assert!(history.back());
        assert!(!history.back());
        assert_eq!(history.index(), 0);
    }
}
