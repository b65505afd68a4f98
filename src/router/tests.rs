use url::Url;

use super::*;
use crate::config::{CascadeFallback, RouteConfig};
use crate::dom::{ClickTarget, ElementData, ElementId, MemoryHistory, MemoryPage, sample_site};

const ROUTES: &[(&str, &str)] = &[("about", "About"), ("projects", "Projects"), ("blog", "Blog")];

fn path_router(url: &str) -> Router<MemoryPage, MemoryHistory> {
    let page = sample_site("/", "fragment", ROUTES);
    let history = MemoryHistory::new(Url::parse(url).unwrap());
    Router::new(&RouterConfig::default(), page, history).unwrap()
}

fn hash_router(url: &str, cascade: CascadeFallback) -> Router<MemoryPage, MemoryHistory> {
    let page = sample_site("#", "content", ROUTES);
    let history = MemoryHistory::new(Url::parse(url).unwrap());
    let mut config = RouterConfig::default();
    config.router.mode = RoutingMode::Hash;
    config.classes.fragment = "content".into();
    config.hash.cascade = cascade;
    Router::new(&config, page, history).unwrap()
}

/// Keys of visible fragments and selected links.
fn shown(router: &Router<MemoryPage, MemoryHistory>) -> (Vec<String>, Vec<String>) {
    let page = router.page();
    let mut fragments = Vec::new();
    let mut links = Vec::new();
    for entry in router.table().entries() {
        if !page.has_class(entry.fragment, "hidden") {
            fragments.push(entry.key.clone());
        }
        if page.has_class(entry.link, "header-selected") {
            links.push(entry.key.clone());
        }
    }
    (fragments, links)
}

fn assert_shows(router: &Router<MemoryPage, MemoryHistory>, key: &str) {
    let (fragments, links) = shown(router);
    assert_eq!(fragments, [key], "visible fragments");
    assert_eq!(links, [key], "selected links");
}

fn fragment(router: &Router<MemoryPage, MemoryHistory>, key: &str) -> ElementId {
    router.table().get(key).unwrap().fragment
}

// ============================================================================
// construction
// ============================================================================

#[test]
fn test_unknown_default_fails_fast() {
    let page = sample_site("/", "fragment", ROUTES);
    let history = MemoryHistory::new(Url::parse("https://example.com/").unwrap());
    let mut config = RouterConfig::default();
    config.router.default = "home".into();

    let err = Router::new(&config, page, history).err().unwrap();
    assert_eq!(
        err,
        RouterError::UnknownDefault {
            default: "home".into(),
            known: "about, projects, blog".into()
        }
    );
}

#[test]
fn test_nothing_changes_before_start() {
    let router = path_router("https://example.com/projects");
    assert!(router.state().initial_load);
    assert_eq!(router.page().title(), "");
    assert_eq!(router.default_key(), "about");
}

// ============================================================================
// path mode
// ============================================================================

#[test]
fn test_initial_load_known_path() {
    let mut router = path_router("https://example.com/about");
    let nav = router.process_path("about", None, false);

    assert_shows(&router, "about");
    assert_eq!(router.page().title(), "Philip Trauner - About");
    assert!(!nav.pushed);
    assert!(!nav.replaced);
    assert_eq!(nav.hash, None);
    assert_eq!(router.history().len(), 1);
    assert_eq!(router.history().location().hash, None);
    assert!(!router.state().initial_load);
}

#[test]
fn test_class_attributes() {
    let mut router = path_router("https://example.com/projects");
    router.start();

    let page = router.page();
    assert_eq!(page.class_name(fragment(&router, "projects")), "fragment");
    assert_eq!(page.class_name(fragment(&router, "about")), "hidden fragment");
    let link = router.table().get("about").unwrap().link;
    assert_eq!(page.class_name(link), "");
}

#[test]
fn test_unknown_path_falls_back_and_replaces() {
    let mut router = path_router("https://example.com/xyz");
    let nav = router.start();

    assert_shows(&router, "about");
    assert_eq!(nav.key, "about");
    assert_eq!(nav.requested, "xyz");
    assert!(nav.fell_back);
    assert!(!nav.pushed);
    assert!(nav.replaced);
    assert_eq!(router.history().len(), 1);
    assert_eq!(router.history().location().pathname, "/about");
}

#[test]
fn test_unknown_path_after_load_pushes_then_replaces() {
    let mut router = path_router("https://example.com/about");
    router.start();

    let nav = router.process_path("/nope", None, false);
    assert!(nav.pushed && nav.replaced);
    assert_shows(&router, "about");
    assert_eq!(router.history().entries().len(), 2);
}

#[test]
fn test_every_known_path_shows_exactly_one() {
    let mut router = path_router("https://example.com/");
    router.start();
    for (key, label) in ROUTES {
        let nav = router.process_path(&format!("/{key}/"), None, false);
        assert_eq!(nav.key, *key);
        assert!(!nav.fell_back);
        assert_shows(&router, key);
        assert_eq!(router.page().title(), format!("Philip Trauner - {label}"));
    }
    for bogus in ["", "/", "about/team", "ABOUT", "#about"] {
        router.process_path(bogus, None, false);
        assert_shows(&router, "about");
    }
}

#[test]
fn test_push_only_after_initial_load() {
    let mut router = path_router("https://example.com/about");
    let first = router.process_path("about", None, false);
    let second = router.process_path("about", None, false);
    assert!(!first.pushed);
    assert!(second.pushed);
    assert_eq!(router.history().len(), 2);
}

#[test]
fn test_pop_never_pushes() {
    let mut router = path_router("https://example.com/about");
    router.start();
    let nav = router.process_path("projects", None, true);
    assert!(!nav.pushed);
    assert_eq!(router.history().len(), 1);
}

#[test]
fn test_hash_replaces_and_suppresses_next_pop_once() {
    let mut router = path_router("https://example.com/about");
    router.start();

    let nav = router.process_path("projects", Some("#rust"), false);
    assert!(nav.pushed && nav.replaced);
    assert_eq!(nav.hash.as_deref(), Some("rust"));
    assert!(router.state().suppress_pop_state);
    assert_eq!(router.history().location().hash.as_deref(), Some("rust"));

    assert_eq!(router.handle_pop_state(), EventOutcome::Suppressed);
    assert!(!router.state().suppress_pop_state);

    // the next one is processed
    router.history_mut().back();
    let outcome = router.handle_pop_state();
    assert!(outcome.is_routed());
    assert_eq!(outcome.navigation().unwrap().key, "projects");
}

#[test]
fn test_empty_hash_is_ignored() {
    let mut router = path_router("https://example.com/about");
    router.start();
    let nav = router.process_path("blog", Some("#"), false);
    assert!(!nav.replaced);
    assert_eq!(nav.hash, None);
    assert!(!router.state().suppress_pop_state);
}

#[test]
fn test_initial_hash_is_kept() {
    let mut router = path_router("https://example.com/projects#rust");
    let nav = router.start();
    assert_shows(&router, "projects");
    assert!(nav.replaced);
    assert_eq!(router.history().location().hash.as_deref(), Some("rust"));
}

// ============================================================================
// events
// ============================================================================

#[test]
fn test_click_interception() {
    let mut router = path_router("https://example.com/about");
    router.start();
    let base = Url::parse("https://example.com/about").unwrap();

    let outcome = router.handle_click(&ClickTarget::anchor("/projects", &base).unwrap());
    assert!(outcome.is_routed());
    assert_shows(&router, "projects");
    assert_eq!(router.history().location().pathname, "/projects");

    for href in ["https://github.com/about", "/blog/post", "/", "mailto:me@example.com"] {
        let target = ClickTarget::anchor(href, &base).unwrap();
        assert_eq!(router.handle_click(&target), EventOutcome::Ignored, "{href}");
    }
    assert_shows(&router, "projects");
}

#[test]
fn test_click_on_non_anchor_is_ignored() {
    let mut router = path_router("https://example.com/about");
    router.start();
    let target = ClickTarget {
        node_name: "SPAN".into(),
        host: "example.com".into(),
        pathname: "/projects".into(),
        hash: String::new(),
    };
    assert_eq!(router.handle_click(&target), EventOutcome::Ignored);
}

#[test]
fn test_pop_state_routes_location() {
    let mut router = path_router("https://example.com/about");
    router.start();
    router.process_path("blog", None, false);

    router.history_mut().back();
    let outcome = router.dispatch(&RouterEvent::PopState);
    let nav = outcome.navigation().unwrap();
    assert_eq!(nav.key, "about");
    assert!(!nav.pushed);
    assert_shows(&router, "about");
}

#[test]
fn test_mode_filters_events() {
    let mut router = path_router("https://example.com/about");
    router.start();
    assert_eq!(router.dispatch(&RouterEvent::HashChange), EventOutcome::Ignored);

    let mut router = hash_router("https://example.com/#about", CascadeFallback::Default);
    router.start();
    assert_eq!(router.dispatch(&RouterEvent::PopState), EventOutcome::Ignored);
    let base = Url::parse("https://example.com/").unwrap();
    let click = RouterEvent::Click(ClickTarget::anchor("/projects", &base).unwrap());
    assert_eq!(router.dispatch(&click), EventOutcome::Ignored);
}

// ============================================================================
// hash mode
// ============================================================================

#[test]
fn test_hash_initialise_without_anchor_sets_default() {
    let mut router = hash_router("https://example.com/", CascadeFallback::Default);
    let nav = router.start();
    assert_shows(&router, "about");
    assert_eq!(nav.hash.as_deref(), Some("about"));
    assert_eq!(router.history().location().hash.as_deref(), Some("about"));
}

#[test]
fn test_hash_known_anchor_does_not_rewrite_hash() {
    let mut router = hash_router("https://example.com/#projects", CascadeFallback::Default);
    let nav = router.start();
    assert_shows(&router, "projects");
    assert_eq!(nav.hash, None);
    assert_eq!(router.history().len(), 1);
    assert_eq!(router.page().title(), "Philip Trauner - Projects");
}

#[test]
fn test_hash_cascade_scrolls_sub_anchor() {
    let mut router = hash_router("https://example.com/", CascadeFallback::Default);
    router.start();

    let nav = router.process_anchor("blog/blog-intro");
    assert_shows(&router, "blog");
    assert_eq!(nav.scrolled_to.as_deref(), Some("blog-intro"));
    let intro = router.page().element_by_id("blog-intro").unwrap();
    assert_eq!(router.page().scrolled(), [intro]);
}

#[test]
fn test_hash_cascade_foreign_sub_anchor() {
    // `about-intro` exists but lives in another fragment
    let mut router = hash_router("https://example.com/#blog", CascadeFallback::Default);
    router.start();
    let nav = router.process_anchor("blog/about-intro");
    assert!(nav.fell_back);
    assert_shows(&router, "about");
    assert!(router.page().scrolled().is_empty());

    let mut router = hash_router("https://example.com/#blog", CascadeFallback::Root);
    router.start();
    let nav = router.process_anchor("blog/about-intro");
    assert!(!nav.fell_back);
    assert_shows(&router, "blog");
    assert_eq!(nav.scrolled_to, None);
}

#[test]
fn test_hash_malformed_anchors() {
    for cascade in [CascadeFallback::Default, CascadeFallback::Root] {
        let mut router = hash_router("https://example.com/#projects", cascade);
        router.start();
        for anchor in ["", "projects#x", "nope", "nope/blog-intro"] {
            let nav = router.process_anchor(anchor);
            assert!(nav.fell_back, "{anchor}");
            assert_shows(&router, "about");
        }
    }

    let mut router = hash_router("https://example.com/", CascadeFallback::Default);
    router.start();
    router.process_anchor("blog/a/b");
    assert_shows(&router, "about");

    let mut router = hash_router("https://example.com/", CascadeFallback::Root);
    router.start();
    let nav = router.process_anchor("blog/a/b");
    assert!(!nav.fell_back);
    assert_shows(&router, "blog");
}

#[test]
fn test_hash_change_routes_current_anchor() {
    let mut router = hash_router("https://example.com/#about", CascadeFallback::Default);
    router.start();
    router.history_mut().set_hash("projects");
    let outcome = router.handle_hash_change();
    assert_eq!(outcome.navigation().unwrap().key, "projects");
    assert_shows(&router, "projects");
}

// ============================================================================
// declared routes
// ============================================================================

#[test]
fn test_declared_routes_limit_the_table() {
    let mut page = sample_site("/", "fragment", ROUTES);
    page.push(ElementData::new("div").with_id("drafts").with_class("fragment"), None);
    let config = RouterConfig {
        routes: vec![
            RouteConfig::new("about", Some("Hello")),
            RouteConfig::new("blog", None),
        ],
        ..Default::default()
    };
    let history = MemoryHistory::new(Url::parse("https://example.com/projects").unwrap());
    let mut router = Router::new(&config, page, history).unwrap();

    // projects is on the page but not declared
    let nav = router.start();
    assert!(nav.fell_back);
    assert_eq!(router.page().title(), "Philip Trauner - Hello");
    assert_eq!(router.table().len(), 2);
}

// ============================================================================
// session replay
// ============================================================================

fn outcomes(events: &[Dispatched]) -> Vec<(EventKind, Option<String>)> {
    events
        .iter()
        .map(|d| (d.event, d.outcome.navigation().map(|nav| nav.key.clone())))
        .collect()
}

#[test]
fn test_session_click_with_hash_then_back() {
    let page = sample_site("/", "fragment", ROUTES);
    let mut session = Session::new(&RouterConfig::default(), page, "https://example.com/about").unwrap();
    session.load();

    let events = session.run(&Step::Click("/projects#rust".into())).unwrap();
    assert_eq!(events[0].event, EventKind::Click);
    assert!(events[0].outcome.is_routed());
    // our own hash write: popstate swallowed, hashchange not for path mode
    assert_eq!(events[1].outcome, EventOutcome::Suppressed);
    assert_eq!(events[2].outcome, EventOutcome::Ignored);
    assert_eq!(events.len(), 3);
    assert_eq!(session.history().current_url().as_str(), "https://example.com/projects#rust");

    let events = session.run(&Step::Back).unwrap();
    assert_eq!(
        outcomes(&events),
        [
            (EventKind::PopState, Some("projects".to_string())),
            (EventKind::HashChange, None)
        ]
    );

    let events = session.run(&Step::Back).unwrap();
    assert_eq!(outcomes(&events), [(EventKind::PopState, Some("about".to_string()))]);
    assert_shows(session.router(), "about");
    assert_eq!(session.page().title(), "Philip Trauner - About");

    let events = session.run(&Step::Forward).unwrap();
    assert_eq!(outcomes(&events), [(EventKind::PopState, Some("projects".to_string()))]);
}

#[test]
fn test_session_hash_mode_cascade() {
    let page = sample_site("#", "content", ROUTES);
    let mut config = RouterConfig::default();
    config.router.mode = RoutingMode::Hash;
    config.classes.fragment = "content".into();
    let mut session = Session::new(&config, page, "https://example.com/").unwrap();

    let events = session.load();
    assert_eq!(events[0].outcome.navigation().unwrap().hash.as_deref(), Some("about"));
    assert_eq!(session.history().location().hash.as_deref(), Some("about"));

    // the cascade scrolls, then the hash settles on the root anchor
    let events = session.run(&Step::Hash("blog/blog-intro".into())).unwrap();
    let routed: Vec<_> = events.iter().filter_map(|d| d.outcome.navigation()).collect();
    assert_eq!(routed[0].scrolled_to.as_deref(), Some("blog-intro"));
    assert_eq!(routed.last().unwrap().key, "blog");
    assert_eq!(session.history().location().hash.as_deref(), Some("blog"));
    assert_shows(session.router(), "blog");
}

#[test]
fn test_session_rejects_bad_url() {
    let page = sample_site("/", "fragment", ROUTES);
    let err = Session::new(&RouterConfig::default(), page, "not a url").err().unwrap();
    assert!(matches!(err, SessionError::Url(..)));
}
