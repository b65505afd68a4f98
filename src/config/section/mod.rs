//! Configuration section definitions.
//!
//! Each module corresponds to a section in `fragroute.toml`:
//!
//! | Module    | TOML Section   | Purpose                                 |
//! |-----------|----------------|-----------------------------------------|
//! | `router`  | `[router]`     | Routing mode and default route          |
//! | `title`   | `[title]`      | Document title composition              |
//! | `classes` | `[classes]`    | Visible/hidden/selected class names     |
//! | `nav`     | `[nav]`        | Navigation link lookup                  |
//! | `hash`    | `[hash]`       | Anchor cascade fallback (hash mode)     |
//! | `log`     | `[log]`        | Verbose routing output                  |
//! | `routes`  | `[[routes]]`   | Declared `(id, label)` routes           |

mod classes;
mod hash;
mod log;
mod nav;
mod router;
mod routes;
mod title;

pub use classes::ClassConfig;
pub use hash::{CascadeFallback, HashConfig};
pub use log::LogConfig;
pub use nav::NavConfig;
pub use router::{RouterSectionConfig, RoutingMode};
pub use routes::{RouteConfig, validate_routes};
pub use title::TitleConfig;
