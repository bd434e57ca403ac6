//! Application layer use cases for the host.
//!
//! - **`preferences_service`** – Get, set, patch and restore preferences;
//!   track the app version; record window geometry.
//!
//! - **`window_geometry`** – Pure rules for which window sizes and
//!   positions are stored and where the window opens.  Defines the
//!   [`window_geometry::ScreenSource`] trait the infrastructure implements.
//!
//! Nothing in this layer touches files, sockets or the OS.

pub mod preferences_service;
pub mod window_geometry;
