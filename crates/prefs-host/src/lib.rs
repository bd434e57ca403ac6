//! prefs-host library entry point.
//!
//! The backend half of the preference boundary: an in-memory preference
//! service, the window placement rules, and the command bridge that answers
//! the web frontend with envelopes.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.

pub mod application;
pub mod infrastructure;
