//! Infrastructure layer: adapters between the application and the outside.
//!
//! - **`screen`**    – Screen information for window placement.
//! - **`settings`**  – TOML settings file for the host process.
//! - **`ui_bridge`** – Command-name dispatch used by the frontend binding.

pub mod screen;
pub mod settings;
pub mod ui_bridge;
