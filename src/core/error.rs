//! Error types for routing.
//!
//! - [`RouteError`] - navigation and href-building failures
//! - [`RouteTableError`] - an invalid static route table (startup only)

use thiserror::Error;

/// Errors produced while resolving or building routes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No route pattern matches the requested path.
    ///
    /// This is a renderable terminal state, not a failure of the app.
    #[error("no route matches '{path}'")]
    NotFound { path: String },
    /// `href_for` was asked for a route name that is not in the table.
    #[error("unknown route name '{0}'")]
    UnknownRouteName(String),
    /// A parameter required by the named route's pattern was not supplied.
    #[error("route '{route}' requires parameter '{param}'")]
    MissingParam { route: String, param: String },
}

impl RouteError {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// True for the `NotFound` terminal state.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Errors detected when compiling the static route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("route pattern '{0}' must start with '/'")]
    InvalidPattern(String),
    #[error("route pattern '{0}' has a parameter with an empty name")]
    EmptyParamName(String),
    #[error("route pattern '{pattern}' binds '{param}' more than once")]
    DuplicateParam { pattern: String, param: String },
    #[error("route name '{0}' is used by more than one route")]
    DuplicateName(String),
}
