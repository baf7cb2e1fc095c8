//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`RouteDef`], [`RouteTable`], [`ViewId`] - Static route declarations and the compiled table
//! - [`NavigationState`], [`Address`] - Hash-based navigation results

mod navigation;
mod route;

pub use navigation::{Address, NavigationState, Params, same_address, to_hash};
pub use route::{CompiledRoute, RouteDef, RouteTable, ViewId};
