//! Browser backends built on `web-sys`.
//!
//! Failures reported by the browser (a rejected `pushState`, a detached
//! node) are logged and otherwise ignored, the page keeps working with
//! normal navigation.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlAnchorElement, Window};

use super::{ClickTarget, History, Location, Page, Selector};
use crate::core::anchor_of;
use crate::log;

/// [`Page`] over the live document.
pub struct WebPage {
    document: Document,
}

impl WebPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Page for WebPage {
    type Element = Element;

    fn query_all(&self, selector: &Selector) -> Vec<Element> {
        let css = selector.to_css();
        let Ok(list) = self.document.query_selector_all(&css) else {
            log!("error"; "invalid selector `{}`", css);
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn id(&self, element: &Element) -> String {
        element.id()
    }

    fn inner_html(&self, element: &Element) -> String {
        element.inner_html()
    }

    fn set_classes(&mut self, element: &Element, classes: &[&str]) {
        element.set_class_name(&classes.join(" "));
    }

    fn contains(&self, ancestor: &Element, element: &Element) -> bool {
        let node: &web_sys::Node = element;
        ancestor.contains(Some(node))
    }

    fn scroll_into_view(&mut self, element: &Element) {
        element.scroll_into_view();
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }
}

/// [`History`] over `window.history` and `window.location`.
pub struct WebHistory {
    window: Window,
}

impl WebHistory {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn report(action: &str, result: Result<(), JsValue>) {
        if let Err(err) = result {
            log!("error"; "{} failed: {:?}", action, err);
        }
    }
}

impl History for WebHistory {
    fn location(&self) -> Location {
        let location = self.window.location();
        let href = location.href().unwrap_or_default();
        Location {
            host: location.host().unwrap_or_default(),
            pathname: location.pathname().unwrap_or_else(|_| "/".into()),
            hash: anchor_of(&href).map(str::to_string),
        }
    }

    fn push_state(&mut self, url: &str) {
        let result = self
            .window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(url)));
        Self::report("pushState", result);
    }

    fn replace_state(&mut self, url: &str) {
        let result = self
            .window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(url)));
        Self::report("replaceState", result);
    }

    fn set_hash(&mut self, hash: &str) {
        Self::report("set hash", self.window.location().set_hash(hash));
    }
}

/// Click target of an event, as seen by click interception.
///
/// Non-anchor targets keep their `nodeName` and empty URL parts.
pub fn click_target(event: &web_sys::Event) -> Option<ClickTarget> {
    let element = event.target()?.dyn_into::<Element>().ok()?;
    let node_name = element.node_name();
    match element.dyn_into::<HtmlAnchorElement>() {
        Ok(anchor) => Some(ClickTarget {
            node_name,
            host: anchor.host(),
            pathname: anchor.pathname(),
            hash: anchor.hash(),
        }),
        Err(_) => Some(ClickTarget {
            node_name,
            host: String::new(),
            pathname: String::new(),
            hash: String::new(),
        }),
    }
}
