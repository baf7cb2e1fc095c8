//! Browser utilities.
//!
//! - [`dom`] - window, body class, title, and URL hash access

pub mod dom;
