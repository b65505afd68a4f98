//! Check report types and formatting.

use std::fmt;

use owo_colors::OwoColorize;

use fragroute::utils::{plural_count, plural_s};

/// A single problem found on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIssue {
    /// The selector/link/key the problem is about.
    pub target: String,
    /// What is wrong with it.
    pub reason: String,
}

/// A route the router would accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedRoute {
    pub key: String,
    pub label: String,
}

/// Everything `fragroute check` found
#[derive(Debug, Default)]
pub struct CheckReport {
    pub routes: Vec<CheckedRoute>,
    pub errors: Vec<CheckIssue>,
    pub warnings: Vec<CheckIssue>,
}

impl CheckReport {
    pub fn error(&mut self, target: impl Into<String>, reason: impl Into<String>) {
        self.errors.push(CheckIssue {
            target: target.into(),
            reason: reason.into(),
        });
    }

    pub fn warn(&mut self, target: impl Into<String>, reason: impl Into<String>) {
        self.warnings.push(CheckIssue {
            target: target.into(),
            reason: reason.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Print the full report to stderr (routes -> errors -> warnings).
    pub fn print(&self) {
        if !self.routes.is_empty() {
            eprintln!(
                "{} {}",
                "routes".green().bold(),
                format!("({})", self.routes.len()).dimmed()
            );
            for route in &self.routes {
                eprintln!("{} /{} {}", "•".green(), route.key.cyan(), route.label.dimmed());
            }
        }
        Self::print_section("errors", &self.errors, true);
        Self::print_section("warnings", &self.warnings, false);
    }

    fn print_section(name: &str, issues: &[CheckIssue], is_error: bool) {
        if issues.is_empty() {
            return;
        }
        eprintln!();
        if is_error {
            eprintln!("{} {}", name.red().bold(), format!("({})", issues.len()).dimmed());
        } else {
            eprintln!("{} {}", name.yellow().bold(), format!("({})", issues.len()).dimmed());
        }
        for issue in issues {
            let arrow = if is_error {
                "→".red().to_string()
            } else {
                "→".yellow().to_string()
            };
            eprintln!("{} {} {}", arrow, issue.target, issue.reason);
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.errors.len();
        let warnings = self.warnings.len();

        if errors == 0 && warnings == 0 {
            write!(
                f,
                "{} {}",
                plural_count(self.routes.len(), "route"),
                "ok".green()
            )
        } else {
            write!(
                f,
                "{} {} {}, {} {}",
                "found".dimmed(),
                errors.to_string().red().bold(),
                format!("error{}", plural_s(errors)).dimmed(),
                warnings.to_string().yellow().bold(),
                format!("warning{}", plural_s(warnings)).dimmed()
            )
        }
    }
}
