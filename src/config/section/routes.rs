//! `[[routes]]` declarations.
//!
//! # Example
//!
//! ```toml
//! [[routes]]
//! id = "about"
//! label = "About"
//!
//! [[routes]]
//! id = "projects"      # label taken from the navigation link
//! ```
//!
//! When no routes are declared, every `.fragment[id]` element on the page
//! becomes a route.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::is_route_key;

/// A declared route: fragment id plus optional title label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Id of the fragment element, also the route key.
    pub id: String,

    /// Title label; defaults to the navigation link's content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl RouteConfig {
    pub fn new(id: impl Into<String>, label: Option<&str>) -> Self {
        Self {
            id: id.into(),
            label: label.map(str::to_string),
        }
    }
}

pub const ROUTES_FIELD: FieldPath = FieldPath::new("routes");

/// Validate declared routes against each other and the default key.
pub fn validate_routes(routes: &[RouteConfig], default: &str, diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashSet::default();
    for route in routes {
        if !is_route_key(&route.id) {
            diag.error(
                ROUTES_FIELD,
                format!("route id `{}` is not a single path segment", route.id),
            );
        }
        if !seen.insert(route.id.as_str()) {
            diag.error(ROUTES_FIELD, format!("route `{}` declared twice", route.id));
        }
        if route.label.as_deref().is_some_and(|l| l.trim().is_empty()) {
            diag.warn(
                ROUTES_FIELD,
                format!("route `{}` has an empty label, omit it to use the link text", route.id),
            );
        }
    }

    if !routes.is_empty() && !seen.contains(default) {
        diag.error_with_hint(
            ROUTES_FIELD,
            format!("default route `{default}` is not declared"),
            format!("add [[routes]] id = \"{default}\" or change `router.default`"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_routes_ok() {
        let routes = vec![
            RouteConfig::new("about", Some("About")),
            RouteConfig::new("projects", None),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_routes(&routes, "about", &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_validate_routes_duplicates_and_default() {
        let routes = vec![
            RouteConfig::new("projects", None),
            RouteConfig::new("projects", None),
            RouteConfig::new("blog/posts", None),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_routes(&routes, "about", &mut diag);
        // duplicate + nested id + undeclared default
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_no_routes_means_discovery() {
        let mut diag = ConfigDiagnostics::new();
        validate_routes(&[], "about", &mut diag);
        assert!(diag.is_empty());
    }
}
