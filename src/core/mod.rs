//! Core routing logic.
//!
//! This module provides:
//! - [`Router`] path resolution and named-route href building
//! - [`error`] routing error types

pub mod error;
mod router;

pub use error::RouteError;
pub use router::Router;
