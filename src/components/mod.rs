//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`nav`] - Top navigation bar
//! - [`views`] - Routed views and the NotFound state
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod nav;
pub mod router;
pub mod views;

pub use router::AppRouter;
