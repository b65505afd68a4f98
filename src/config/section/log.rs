//! `[log]` section configuration.
//!
//! ```toml
//! [log]
//! verbose = true   # print routing decisions (`debug!` output)
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub verbose: bool,
}
