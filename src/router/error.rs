//! Router construction errors.

use thiserror::Error;

/// Raised while building the path table; routing itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("route `{id}` has no fragment element `{selector}`")]
    MissingFragment { id: String, selector: String },

    #[error("fragment `{id}` has no navigation link `{selector}`")]
    MissingLink { id: String, selector: String },

    #[error("route `{0}` appears more than once")]
    DuplicateRoute(String),

    #[error("no routable fragments found (looked for `{0}`)")]
    EmptyTable(String),

    #[error("default route `{default}` is not on the page (routes: {known})")]
    UnknownDefault { default: String, known: String },
}
