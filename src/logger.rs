//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted output with colored module prefixes
//! - `debug!` macro, only shown when verbose mode is enabled
//!
//! Native builds write to stderr, leaving stdout to command output. In the
//! browser (wasm32) the same macros write to the developer console, without
//! ANSI colors.
//!
//! # Example
//!
//! ```ignore
//! log!("check"; "validating {} routes", count);
//! debug!("router"; "unknown path `{}`, falling back to `{}`", path, default);
//! ```

use owo_colors::OwoColorize;
use std::sync::atomic::{AtomicBool, Ordering};

/// Global verbose flag (set by --verbose or `[log] verbose`)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when verbose mode is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    emit(module, message);
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(module: &str, message: &str) {
    use std::io::{Write, stderr};

    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

#[cfg(target_arch = "wasm32")]
fn emit(module: &str, message: &str) {
    let line = wasm_bindgen::JsValue::from_str(&format!("[{module}] {message}"));
    match module.to_ascii_lowercase().as_str() {
        "error" => web_sys::console::error_1(&line),
        "warning" => web_sys::console::warn_1(&line),
        _ => web_sys::console::log_1(&line),
    }
}

/// Apply color to a module prefix based on module type
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "router" => prefix.bright_blue().bold().to_string(),
        "check" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_keeps_module_name() {
        assert!(colorize_prefix("Router", "router").contains("[Router]"));
        assert!(colorize_prefix("hint", "hint").contains("[hint]"));
    }
}
