//! Window size and position rules.
//!
//! The host window system reports geometry changes; the service decides
//! which of them are worth remembering and where to place the window on
//! the next launch.
//!
//! # Rules
//!
//! - A maximised window only records the maximised flag, so restoring from
//!   maximised returns to the last normal size.
//! - A normal window smaller than 960×640 is not recorded.
//! - A stored size that is missing or non-positive reads as 1024×768.
//! - A stored position that is non-positive or pushes the window off the
//!   current screen is replaced by the centred position.

use async_trait::async_trait;
use prefs_core::domain::defaults::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use prefs_core::PreferencesBehavior;

/// Size of a display in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: i64,
    pub height: i64,
}

impl ScreenSize {
    pub const FALLBACK: ScreenSize = ScreenSize {
        width: DEFAULT_WINDOW_WIDTH,
        height: DEFAULT_WINDOW_HEIGHT,
    };

    fn is_usable(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// The host window system, as far as window placement is concerned.
///
/// Infrastructure implementations ask the OS; tests use a fixed value.
#[async_trait]
pub trait ScreenSource: Send + Sync {
    /// Size of the screen the window is currently on, if known.
    async fn current_screen(&self) -> Option<ScreenSize>;
}

/// What a window-size report should change in the stored preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSizeChange {
    /// Only set `windowMaximised = true`.
    Maximised,
    /// Store the new size and clear `windowMaximised`.
    Resized { width: i64, height: i64 },
    /// Below the minimum size; leave everything as it is.
    Ignored,
}

pub fn classify_window_size(width: i64, height: i64, maximised: bool) -> WindowSizeChange {
    if maximised {
        WindowSizeChange::Maximised
    } else if width >= MIN_WINDOW_WIDTH && height >= MIN_WINDOW_HEIGHT {
        WindowSizeChange::Resized { width, height }
    } else {
        WindowSizeChange::Ignored
    }
}

/// Stored window size with fallbacks applied: `(width, height, maximised)`.
pub fn effective_window_size(behavior: &PreferencesBehavior) -> (i64, i64, bool) {
    let width = behavior
        .window_width
        .filter(|w| *w > 0)
        .unwrap_or(DEFAULT_WINDOW_WIDTH);
    let height = behavior
        .window_height
        .filter(|h| *h > 0)
        .unwrap_or(DEFAULT_WINDOW_HEIGHT);
    (width, height, behavior.window_maximised.unwrap_or(false))
}

/// Where to place the window: the stored position if it fits on `screen`,
/// otherwise centred.
pub fn window_position(behavior: &PreferencesBehavior, screen: Option<ScreenSize>) -> (i64, i64) {
    let screen = screen
        .filter(ScreenSize::is_usable)
        .unwrap_or(ScreenSize::FALLBACK);
    let (width, height, _) = effective_window_size(behavior);
    let x = behavior.window_pos_x.unwrap_or(0);
    let y = behavior.window_pos_y.unwrap_or(0);

    // Overflowing the i64 range counts as off-screen.
    let overflows = |pos: i64, extent: i64, limit: i64| {
        pos.checked_add(extent).map_or(true, |end| end > limit)
    };
    let off_screen =
        x <= 0 || y <= 0 || overflows(x, width, screen.width) || overflows(y, height, screen.height);
    if off_screen {
        ((screen.width - width) / 2, (screen.height - height) / 2)
    } else {
        (x, y)
    }
}

/// Positions at the origin are what the window system reports before the
/// window is placed; they are not worth storing.
pub fn should_save_position(x: i64, y: i64) -> bool {
    x > 0 || y > 0
}

// ── Tests ─────────────────────────────────────────────────────────────────────
