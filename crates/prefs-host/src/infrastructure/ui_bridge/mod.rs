//! Command bridge: exposes the preference service to the web frontend.
//!
//! The frontend calls backend commands by name and receives an
//! [`Envelope`] back:
//!
//! ```ts
//! const rsp = await invoke("UpdatePreferences", {"general.theme": "dark"});
//! if (rsp.code !== 0) showError(rsp.msg);
//! ```
//!
//! [`invoke`] is that dispatch table.  It is transport-agnostic: whatever
//! carries the call (a webview binding, a socket, the CLI) hands in the
//! command name and the raw JSON arguments and sends the returned envelope
//! back as JSON.
//!
//! Arguments are never trusted.  A preference set sent by the frontend goes
//! through [`hydrate_configuration`] like any other snapshot, and may
//! arrive either as an object or as JSON text.
//!
//! | Command              | Arguments                                   | Payload                        |
//! |----------------------|---------------------------------------------|--------------------------------|
//! | `GetPreferences`     | –                                           | preferences                    |
//! | `SetPreferences`     | preferences (object or JSON text)           | –                              |
//! | `UpdatePreferences`  | `{"group.field": value, ...}`               | –                              |
//! | `RestorePreferences` | –                                           | `{"pref": defaults}`           |
//! | `GetAppVersion`      | –                                           | `{"version": "v…"}`            |
//! | `GetWindowSize`      | –                                           | `{width, height, maximised}`   |
//! | `SaveWindowSize`     | `{width, height, maximised}`                | –                              |
//! | `GetWindowPosition`  | –                                           | `{x, y}`                       |
//! | `SaveWindowPosition` | `{x, y}`                                    | –                              |

use std::sync::Arc;

use prefs_core::{hydrate_configuration, Envelope, RawJson};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::application::preferences_service::PreferencesService;
use crate::application::window_geometry::ScreenSource;
use crate::infrastructure::screen::FixedScreenSource;
use crate::infrastructure::settings::HostSettings;

/// Names accepted by [`invoke`].
pub const COMMANDS: &[&str] = &[
    "GetPreferences",
    "SetPreferences",
    "UpdatePreferences",
    "RestorePreferences",
    "GetAppVersion",
    "GetWindowSize",
    "SaveWindowSize",
    "GetWindowPosition",
    "SaveWindowPosition",
];

/// State shared by every command invocation.
pub struct AppState {
    pub preferences: PreferencesService,
    pub screens: Arc<dyn ScreenSource>,
}

impl AppState {
    /// Builds state from host settings, seeded with default preferences.
    pub async fn from_settings(settings: &HostSettings) -> Arc<Self> {
        let preferences = PreferencesService::with_defaults();
        preferences.set_app_version(&settings.app.version).await;
        Arc::new(Self {
            preferences,
            screens: Arc::new(FixedScreenSource::new(settings.screen.screen_size())),
        })
    }
}

#[derive(Debug, Deserialize)]
struct WindowSizeArgs {
    width: i64,
    height: i64,
    #[serde(default)]
    maximised: bool,
}

#[derive(Debug, Deserialize)]
struct WindowPositionArgs {
    x: i64,
    y: i64,
}

/// Runs `command` with raw JSON `args` and returns its envelope.
///
/// Unknown commands and unusable arguments produce a failed envelope;
/// nothing here panics or returns an error to the transport.
pub async fn invoke(state: &AppState, command: &str, args: Value) -> Envelope {
    debug!(command, "invoking command");
    let prefs = &state.preferences;
    match command {
        "GetPreferences" => prefs.get_preferences().await,
        "SetPreferences" => {
            let raw = match &args {
                Value::String(text) => RawJson::Text(text.as_str()),
                other => RawJson::Value(other.clone()),
            };
            match hydrate_configuration(raw) {
                Ok(snapshot) => prefs.set_preferences(snapshot).await,
                Err(e) => Envelope::failed(e.to_string()),
            }
        }
        "UpdatePreferences" => match args {
            Value::Object(updates) => prefs.update_preferences(&updates).await,
            _ => Envelope::failed("UpdatePreferences expects an object of dotted keys"),
        },
        "RestorePreferences" => prefs.restore_preferences().await,
        "GetAppVersion" => prefs.get_app_version().await,
        "GetWindowSize" => {
            let (width, height, maximised) = prefs.window_size().await;
            Envelope::ok(json!({ "width": width, "height": height, "maximised": maximised }))
        }
        "SaveWindowSize" => match decode_args::<WindowSizeArgs>(command, args) {
            Ok(a) => {
                prefs.save_window_size(a.width, a.height, a.maximised).await;
                Envelope::ok_empty()
            }
            Err(env) => env,
        },
        "GetWindowPosition" => {
            let (x, y) = prefs.window_position(state.screens.as_ref()).await;
            Envelope::ok(json!({ "x": x, "y": y }))
        }
        "SaveWindowPosition" => match decode_args::<WindowPositionArgs>(command, args) {
            Ok(a) => {
                prefs.save_window_position(a.x, a.y).await;
                Envelope::ok_empty()
            }
            Err(env) => env,
        },
        unknown => {
            warn!(command = unknown, "unknown command");
            Envelope::failed(format!("unknown command: {unknown}"))
        }
    }
}

fn decode_args<T: DeserializeOwned>(command: &str, args: Value) -> Result<T, Envelope> {
    serde_json::from_value(args)
        .map_err(|e| Envelope::failed(format!("invalid arguments for {command}: {e}")))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::window_geometry::ScreenSize;
    use prefs_core::{Code, Preferences};

    fn make_state() -> Arc<AppState> {
        Arc::new(AppState {
            preferences: PreferencesService::with_defaults(),
            screens: Arc::new(FixedScreenSource::new(Some(ScreenSize {
                width: 1920,
                height: 1080,
            }))),
        })
    }

    #[tokio::test]
    async fn test_get_preferences_returns_defaults_initially() {
        // Arrange
        let state = make_state();

        // Act
        let env = invoke(&state, "GetPreferences", Value::Null).await;

        // Assert
        assert_eq!(env.code, Some(Code::OK));
        let prefs = hydrate_configuration(env.payload.unwrap()).unwrap();
        assert_eq!(prefs, Preferences::defaults());
    }

    #[tokio::test]
    async fn test_set_preferences_accepts_json_text() {
        let state = make_state();

        let env = invoke(
            &state,
            "SetPreferences",
            Value::String(r#"{"general":{"theme":"dark"}}"#.to_string()),
        )
        .await;

        assert!(env.is_ok());
        let prefs = state.preferences.snapshot().await;
        assert_eq!(prefs.general.theme.as_deref(), Some("dark"));
        assert_eq!(prefs.general.language, None);
    }

    #[tokio::test]
    async fn test_set_preferences_rejects_malformed_text() {
        let state = make_state();

        let env = invoke(&state, "SetPreferences", Value::String("{not json".into())).await;

        assert_eq!(env.code, Some(Code::FAILED));
        assert!(env.message().starts_with("malformed JSON input"));
        assert_eq!(state.preferences.snapshot().await, Preferences::defaults());
    }

    #[tokio::test]
    async fn test_update_preferences_requires_an_object() {
        let state = make_state();
        let env = invoke(&state, "UpdatePreferences", json!(["general.theme"])).await;
        assert!(!env.is_ok());
    }

    #[tokio::test]
    async fn test_update_preferences_applies_changes() {
        let state = make_state();

        let env = invoke(&state, "UpdatePreferences", json!({"editor.links": false})).await;

        assert!(env.is_ok());
        assert_eq!(state.preferences.snapshot().await.editor.links, Some(false));
    }

    #[tokio::test]
    async fn test_window_commands_round_trip() {
        // Arrange
        let state = make_state();

        // Act
        let saved = invoke(
            &state,
            "SaveWindowSize",
            json!({"width": 1280, "height": 720, "maximised": false}),
        )
        .await;
        invoke(&state, "SaveWindowPosition", json!({"x": 200, "y": 150})).await;
        let size = invoke(&state, "GetWindowSize", Value::Null).await;
        let position = invoke(&state, "GetWindowPosition", Value::Null).await;

        // Assert
        assert!(saved.is_ok());
        assert_eq!(
            size.payload,
            Some(json!({"width": 1280, "height": 720, "maximised": false}))
        );
        assert_eq!(position.payload, Some(json!({"x": 200, "y": 150})));
    }

    #[tokio::test]
    async fn test_save_window_size_with_bad_arguments_fails() {
        let state = make_state();
        let env = invoke(&state, "SaveWindowSize", json!({"width": "wide"})).await;
        assert!(!env.is_ok());
        assert!(env.message().starts_with("invalid arguments for SaveWindowSize"));
    }

    #[tokio::test]
    async fn test_unknown_command_fails() {
        let state = make_state();
        let env = invoke(&state, "CheckForUpdate", Value::Null).await;
        assert_eq!(env, Envelope::failed("unknown command: CheckForUpdate"));
    }

    #[tokio::test]
    async fn test_from_settings_applies_version() {
        let mut settings = HostSettings::default();
        settings.app.version = "3.1.0".to_string();

        let state = AppState::from_settings(&settings).await;
        let env = invoke(&state, "GetAppVersion", Value::Null).await;

        assert_eq!(env.payload, Some(json!({"version": "v3.1.0"})));
    }

    #[test]
    fn test_command_table_lists_every_command() {
        assert_eq!(COMMANDS.len(), 9);
        assert!(COMMANDS.contains(&"RestorePreferences"));
    }
}
