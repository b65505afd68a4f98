//! Page check command.
//!
//! Loads a rendered page and reports everything that would stop the router
//! from starting, plus navigation links that point at nothing routable.

mod report;

use std::path::Path;

use anyhow::{Result, bail};
use rustc_hash::FxHashSet;

use fragroute::RouterConfig;
use fragroute::config::RoutingMode;
use fragroute::core::{is_routable_link, route_key};
use fragroute::dom::{MemoryPage, Page, Selector};
use fragroute::log;
use fragroute::utils::plural_count;

use super::common::read_page;
use report::{CheckReport, CheckedRoute};

/// Check the page at `path` against `config`
pub fn check_page(path: &Path, config: &RouterConfig, strict: bool) -> Result<()> {
    let page = read_page(path)?;
    log!(
        "check";
        "checking {} ({} mode, {})",
        path.display(),
        mode_name(config.router.mode),
        if config.routes.is_empty() {
            "discovered routes".to_string()
        } else {
            plural_count(config.routes.len(), "declared route")
        }
    );

    let report = inspect(&page, config);
    report.print();
    log!("check"; "{}", report);

    if report.has_errors() {
        bail!("check failed: the router cannot start on this page");
    }
    if strict && !report.warnings.is_empty() {
        bail!("check failed: warnings treated as errors");
    }
    Ok(())
}

fn mode_name(mode: RoutingMode) -> &'static str {
    match mode {
        RoutingMode::Path => "path",
        RoutingMode::Hash => "hash",
    }
}

/// Collect every problem instead of stopping at the first one.
fn inspect(page: &MemoryPage, config: &RouterConfig) -> CheckReport {
    let mut report = CheckReport::default();
    let mode = config.router.mode;
    let container = config.nav.container();
    let fragment_class = &config.classes.fragment;

    let ids: Vec<String> = if config.routes.is_empty() {
        page.query_all(&Selector::fragments(fragment_class))
            .iter()
            .map(|fragment| page.id(fragment))
            .filter(|id| !id.is_empty())
            .collect()
    } else {
        config.routes.iter().map(|route| route.id.clone()).collect()
    };

    if ids.is_empty() {
        report.error(
            format!("`{}`", Selector::fragments(fragment_class).to_css()),
            "matches no element",
        );
    }

    let mut seen = FxHashSet::default();
    for id in &ids {
        if !seen.insert(id.as_str()) {
            report.error(format!("route `{id}`"), "appears more than once");
            continue;
        }

        let fragment = Selector::fragment(fragment_class, id);
        if page.query(&fragment).is_none() {
            report.error(format!("`{}`", fragment.to_css()), "not found");
            continue;
        }

        let link_selector = Selector::nav_link(container, &mode.link_href(id));
        let Some(link) = page.query(&link_selector) else {
            report.error(format!("`{}`", link_selector.to_css()), "not found");
            continue;
        };

        let declared = config
            .routes
            .iter()
            .find(|route| &route.id == id)
            .and_then(|route| route.label.clone());
        let label = declared.unwrap_or_else(|| page.inner_html(&link).trim().to_string());
        if label.is_empty() {
            report.warn(format!("route `{id}`"), "has an empty title label");
        }
        report.routes.push(CheckedRoute {
            key: id.clone(),
            label,
        });
    }

    let default = config.router.default.as_str();
    if !ids.is_empty() && !report.routes.iter().any(|route| route.key == default) {
        report.error(format!("default `{default}`"), "is not a route on this page");
    }

    for link in page.query_all(&Selector::nav_links(container)) {
        let Some(href) = page.element(link).href.as_deref() else {
            continue;
        };
        let key = match mode {
            RoutingMode::Path => is_routable_link(href).then(|| route_key(href)),
            RoutingMode::Hash => href
                .strip_prefix('#')
                .filter(|key| !key.is_empty() && !key.contains('/')),
        };
        if let Some(key) = key
            && !seen.contains(key)
        {
            report.warn(format!("link `{href}`"), "has no fragment to show");
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use fragroute::config::RouteConfig;

    const SITE: &str = r#"<html><body>
  <ul>
    <li><a href="/about">About</a></li>
    <li><a href="/projects">Projects</a></li>
    <li><a href="/talks">Talks</a></li>
    <li><a href="https://github.com/">GitHub</a></li>
  </ul>
  <div class="fragment" id="about"></div>
  <div class="hidden fragment" id="projects"></div>
  <div class="fragment" id="drafts"></div>
</body></html>"#;

    fn page() -> MemoryPage {
        MemoryPage::from_html(SITE).unwrap()
    }

    #[test]
    fn test_discovered_routes() {
        let report = inspect(&page(), &RouterConfig::default());

        let keys: Vec<_> = report.routes.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["about", "projects"]);
        assert_eq!(report.routes[1].label, "Projects");

        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].target.contains("/drafts"));

        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].target, "link `/talks`");
    }

    #[test]
    fn test_declared_routes_and_default() {
        let mut config = RouterConfig {
            routes: vec![
                RouteConfig::new("projects", Some("Work")),
                RouteConfig::new("missing", None),
            ],
            ..Default::default()
        };
        config.router.default = "projects".into();

        let report = inspect(&page(), &config);
        assert_eq!(
            report.routes,
            [CheckedRoute {
                key: "projects".into(),
                label: "Work".into()
            }]
        );
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].target.contains("missing"));
        // /about and /talks are linked but not declared
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn test_unknown_default() {
        let mut config = RouterConfig::default();
        config.router.default = "home".into();
        let report = inspect(&page(), &config);
        assert!(report.errors.iter().any(|e| e.target == "default `home`"));
    }

    #[test]
    fn test_no_fragments() {
        let page = MemoryPage::from_html("<p>nothing here</p>").unwrap();
        let report = inspect(&page, &RouterConfig::default());
        assert!(report.has_errors());
        assert!(report.routes.is_empty());
    }
}
