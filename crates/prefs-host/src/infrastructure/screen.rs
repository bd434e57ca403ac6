//! Screen information adapters.
//!
//! The real window system is an external collaborator.  The headless host
//! reports a fixed screen taken from the settings file, or none at all, in
//! which case window placement falls back to 1024×768.

use async_trait::async_trait;

use crate::application::window_geometry::{ScreenSize, ScreenSource};

/// A [`ScreenSource`] that always reports the same screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedScreenSource {
    screen: Option<ScreenSize>,
}

impl FixedScreenSource {
    pub fn new(screen: Option<ScreenSize>) -> Self {
        Self { screen }
    }
}

#[async_trait]
impl ScreenSource for FixedScreenSource {
    async fn current_screen(&self) -> Option<ScreenSize> {
        self.screen
    }
}
