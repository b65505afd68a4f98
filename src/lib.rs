//! fragroute - client-side fragment routing for single-page personal sites.
//!
//! A page carries every section pre-rendered as a hidden fragment. The router
//! shows one fragment at a time, keeps the document title and navigation
//! highlight in step, and turns link clicks, back/forward and hash changes
//! into routing decisions without page reloads.
//!
//! ```text
//! fragroute.toml ──▶ RouterConfig ──▶ Router<Page, History> ◀── RouterEvent
//!                                        │
//!                                        ├─ path mode: /about (History API)
//!                                        └─ hash mode: #about, #about/team
//! ```
//!
//! The router only talks to the [`dom::Page`] and [`dom::History`] traits.
//! The wasm32 build drives it from real browser events; native builds drive
//! it over in-memory backends (tests, the `fragroute` CLI).

pub mod config;
pub mod core;
pub mod dom;
pub mod logger;
pub mod router;
pub mod utils;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use config::{CONFIG_FILE, RouterConfig};
pub use router::{EventOutcome, Navigation, Router, RouterError, RouterEvent};
