//! Browser entry point.
//!
//! ```text
//! window ──click/popstate/hashchange──▶ Closure ──▶ ROUTER.dispatch()
//! ```
//!
//! The router lives in a thread-local for the lifetime of the page; the
//! listener closures are leaked so the browser can call them at any time.
//! Listeners called while the router is busy (the `popstate` fired inside
//! a hash write) are queued by [`SharedRouter`].

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::RouterConfig;
use crate::dom::web::{WebHistory, WebPage, click_target};
use crate::logger::set_verbose;
use crate::debug;
use crate::router::{Dispatched, Router, RouterEvent, SharedRouter};

thread_local! {
    static ROUTER: SharedRouter<WebPage, WebHistory> = const { SharedRouter::new() };
}

/// Build the router from `config_toml` (defaults when absent), route the
/// current location and install the event listeners.
///
/// Calling it again replaces the router but keeps the listeners.
#[wasm_bindgen]
pub fn start(config_toml: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = match config_toml.as_deref() {
        Some(toml) => RouterConfig::from_str(toml).map_err(to_js)?,
        None => RouterConfig::default(),
    };
    set_verbose(config.log.verbose);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let mut router = Router::new(
        &config,
        WebPage::new(document),
        WebHistory::new(window.clone()),
    )
    .map_err(to_js)?;
    let nav = router.start();
    debug!("router"; "loaded `{}` (requested `{}`)", nav.key, nav.requested);

    let first = ROUTER.with(|shared| shared.replace(router).is_none());
    if first {
        install_listeners(&window)?;
    }
    Ok(())
}

fn install_listeners(window: &web_sys::Window) -> Result<(), JsValue> {
    let on_click = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let Some(target) = click_target(&event) else {
            return;
        };
        let routed = dispatch(RouterEvent::Click(target))
            .first()
            .is_some_and(|click| click.outcome.is_routed());
        if routed {
            event.prevent_default();
            event.stop_propagation();
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    window.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    let on_pop_state = Closure::wrap(Box::new(move |_: web_sys::Event| {
        dispatch(RouterEvent::PopState);
    }) as Box<dyn FnMut(web_sys::Event)>);
    window.add_event_listener_with_callback("popstate", on_pop_state.as_ref().unchecked_ref())?;
    on_pop_state.forget();

    let on_hash_change = Closure::wrap(Box::new(move |_: web_sys::Event| {
        dispatch(RouterEvent::HashChange);
    }) as Box<dyn FnMut(web_sys::Event)>);
    window.add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())?;
    on_hash_change.forget();

    Ok(())
}

fn dispatch(event: RouterEvent) -> Vec<Dispatched> {
    ROUTER.with(|shared| shared.dispatch(event))
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
