//! Route lookup errors

use thiserror::Error;

/// Errors raised when looking up a route outside the mounted router
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No route in the table matches the path
    #[error("no route matches path {path:?}: {reason}")]
    Unmatched { path: String, reason: String },

    /// No route in the table carries the name
    #[error("no route named {0:?}")]
    UnknownName(String),
}
