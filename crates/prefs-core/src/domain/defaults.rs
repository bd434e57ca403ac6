//! Application defaults for a fresh preference set.
//!
//! These are only used by the producing side (the backend) when it creates
//! or restores preferences.  Hydration never fills them in.

use super::preferences::{Preferences, PreferencesBehavior, PreferencesEditor, PreferencesGeneral};

pub const DEFAULT_FONT_SIZE: i64 = 14;
pub const DEFAULT_ASIDE_WIDTH: i64 = 300;
pub const DEFAULT_WINDOW_WIDTH: i64 = 1024;
pub const DEFAULT_WINDOW_HEIGHT: i64 = 768;
/// Smaller saved window sizes are ignored.
pub const MIN_WINDOW_WIDTH: i64 = 960;
pub const MIN_WINDOW_HEIGHT: i64 = 640;

/// Theme and language value meaning "follow the operating system".
pub const AUTO: &str = "auto";

impl Preferences {
    /// The preference set written on first run and by "restore defaults".
    ///
    /// Every field is populated, mirroring the fully-serialised snapshot the
    /// backend emits.
    pub fn defaults() -> Self {
        Self {
            behavior: PreferencesBehavior {
                welcomed: Some(false),
                aside_width: Some(DEFAULT_ASIDE_WIDTH),
                window_width: Some(DEFAULT_WINDOW_WIDTH),
                window_height: Some(DEFAULT_WINDOW_HEIGHT),
                window_maximised: Some(false),
                window_pos_x: Some(0),
                window_pos_y: Some(0),
            },
            general: PreferencesGeneral {
                theme: Some(AUTO.to_string()),
                language: Some(AUTO.to_string()),
                font: Some(String::new()),
                font_family: Some(Vec::new()),
                font_size: Some(DEFAULT_FONT_SIZE),
                use_sys_proxy: Some(false),
                use_sys_proxy_http: Some(false),
                check_update: Some(true),
                skip_version: Some(String::new()),
                allow_track: Some(true),
            },
            editor: PreferencesEditor {
                font: Some(String::new()),
                font_family: Some(Vec::new()),
                font_size: Some(DEFAULT_FONT_SIZE),
                show_line_num: Some(true),
                show_folding: Some(true),
                drop_text: Some(true),
                links: Some(true),
            },
        }
    }
}
