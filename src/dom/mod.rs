//! DOM and history seams.
//!
//! The router never touches the browser directly. It talks to a [`Page`]
//! (element lookup, classes, title, scrolling) and a [`History`] (location,
//! push/replace, hash writes).
//!
//! | Backend          | Module   | Used by                          |
//! |------------------|----------|----------------------------------|
//! | `MemoryPage`     | `memory` | tests, CLI replay                |
//! | `MemoryHistory`  | `memory` | tests, CLI replay                |
//! | HTML loader      | `html`   | `fragroute check` / `route`      |
//! | `WebPage`        | `web`    | the wasm32 browser build         |
//! | `WebHistory`     | `web`    | the wasm32 browser build         |

mod html;
mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use html::HtmlError;
pub use memory::{ElementData, ElementId, HistoryEvent, MemoryHistory, MemoryPage};
#[cfg(test)]
pub(crate) use memory::sample_site;

use serde::Serialize;
use url::Url;

// ============================================================================
// Seams
// ============================================================================

/// Document operations the router needs.
pub trait Page {
    /// Element handle; cheap to clone.
    type Element: Clone;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &Selector) -> Vec<Self::Element>;

    /// First element matching `selector`.
    fn query(&self, selector: &Selector) -> Option<Self::Element> {
        self.query_all(selector).into_iter().next()
    }

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// The element's `id` attribute, empty when absent.
    fn id(&self, element: &Self::Element) -> String;

    fn inner_html(&self, element: &Self::Element) -> String;

    /// Replace the whole class attribute.
    fn set_classes(&mut self, element: &Self::Element, classes: &[&str]);

    /// Whether `element` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &Self::Element, element: &Self::Element) -> bool;

    fn scroll_into_view(&mut self, element: &Self::Element);

    fn set_title(&mut self, title: &str);
}

/// Session history operations the router needs.
///
/// Entries never carry state; `url` is always a same-document URL.
pub trait History {
    fn location(&self) -> Location;

    fn push_state(&mut self, url: &str);

    fn replace_state(&mut self, url: &str);

    /// Write the location hash (without `#`); browsers add an entry for it.
    fn set_hash(&mut self, hash: &str);
}

// ============================================================================
// Location / ClickTarget
// ============================================================================

/// The parts of `window.location` routing looks at.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Location {
    /// `host[:port]`
    pub host: String,
    /// Always starts with `/`.
    pub pathname: String,
    /// Text after the first `#`; `Some("")` for a bare `#`, `None` without one.
    pub hash: Option<String>,
}

impl Location {
    pub fn from_url(url: &Url) -> Self {
        Self {
            host: host_of(url),
            pathname: url.path().to_string(),
            hash: url.fragment().map(str::to_string),
        }
    }

    /// `location.hash` as the browser reports it: `#x`, or empty.
    pub fn hash_str(&self) -> String {
        match self.hash.as_deref() {
            Some(hash) if !hash.is_empty() => format!("#{hash}"),
            _ => String::new(),
        }
    }
}

/// `host[:port]` of a URL, as `location.host` renders it.
pub fn host_of(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}

/// What a click landed on, reduced to the fields click interception reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickTarget {
    /// `nodeName` of the event target (`A` for anchors).
    pub node_name: String,
    pub host: String,
    pub pathname: String,
    /// `#x` or empty, like `HTMLAnchorElement.hash`.
    pub hash: String,
}

impl ClickTarget {
    /// An anchor whose `href` resolves against `base`.
    pub fn anchor(href: &str, base: &Url) -> Result<Self, url::ParseError> {
        let url = base.join(href)?;
        let location = Location::from_url(&url);
        Ok(Self {
            node_name: "A".into(),
            hash: location.hash_str(),
            host: location.host,
            pathname: location.pathname,
        })
    }

    pub fn is_anchor(&self) -> bool {
        self.node_name.eq_ignore_ascii_case("a")
    }
}

// ============================================================================
// Selector
// ============================================================================

/// The small structural selector subset routing needs.
///
/// Renders to CSS for browser backends; memory backends match it directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub tag: Option<String>,
    pub class: Option<String>,
    /// Exact `id` value.
    pub id: Option<String>,
    /// Require a non-empty `id` attribute.
    pub has_id: bool,
    /// Exact `href` attribute value.
    pub href: Option<String>,
    /// Tag of the direct parent.
    pub parent_tag: Option<String>,
}

impl Selector {
    /// `.class[id]`: every routable fragment.
    pub fn fragments(class: &str) -> Self {
        Self {
            class: Some(class.into()),
            has_id: true,
            ..Default::default()
        }
    }

    /// `.class[id="id"]`: one routable fragment.
    pub fn fragment(class: &str, id: &str) -> Self {
        Self {
            class: Some(class.into()),
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// `container > a[href="href"]`: the navigation link for a route.
    pub fn nav_link(container: Option<&str>, href: &str) -> Self {
        Self {
            tag: Some("a".into()),
            href: Some(href.into()),
            parent_tag: container.map(str::to_string),
            ..Default::default()
        }
    }

    /// `container > a[href]`: every navigation link.
    pub fn nav_links(container: Option<&str>) -> Self {
        Self {
            tag: Some("a".into()),
            parent_tag: container.map(str::to_string),
            ..Default::default()
        }
    }

    /// Render as a CSS selector.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(parent) = &self.parent_tag {
            css.push_str(parent);
            css.push_str(" > ");
        }
        match &self.tag {
            Some(tag) => css.push_str(tag),
            None if self.class.is_none() && self.id.is_none() && !self.has_id => css.push('*'),
            None => {}
        }
        if let Some(class) = &self.class {
            css.push('.');
            css.push_str(class);
        }
        if let Some(id) = &self.id {
            css.push_str(&format!("[id=\"{}\"]", escape_css_string(id)));
        } else if self.has_id {
            css.push_str("[id]");
        }
        if let Some(href) = &self.href {
            css.push_str(&format!("[href=\"{}\"]", escape_css_string(href)));
        }
        css
    }
}

/// Escape a value for a double-quoted CSS attribute selector.
fn escape_css_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
