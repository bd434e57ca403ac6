//! PreferencesService: the backend commands behind the preferences screen.
//!
//! Holds the current [`Preferences`] in memory and answers every command
//! with an [`Envelope`], the same shape the frontend unwraps for all calls.
//!
//! # Partial updates
//!
//! The frontend changes single settings with dotted keys:
//!
//! ```json
//! {"general.theme": "dark", "editor.fontSize": 16}
//! ```
//!
//! [`PreferencesService::update_preferences`] checks every key against the
//! preference schemas first, then patches the JSON snapshot and hydrates it
//! back.  Either all keys apply or none do.  Values are not validated; a
//! value of the wrong type reads back as `None`, exactly as it would on the
//! frontend.

use prefs_core::domain::preferences::PREFERENCES_SCHEMA;
use prefs_core::schema::Shape;
use prefs_core::{hydrate_configuration, Envelope, HydrateError, Preferences};
use serde::Serialize;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::window_geometry::{
    classify_window_size, effective_window_size, should_save_position, window_position,
    ScreenSource, WindowSizeChange,
};

/// Error type for preference updates.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// The key is not `<group>.<field>` with a declared group and field.
    #[error("unknown preference key: {0}")]
    UnknownKey(String),

    /// The current preferences could not be turned into JSON.
    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The patched snapshot could not be hydrated.
    #[error("failed to hydrate preferences: {0}")]
    Hydrate(#[from] HydrateError),
}

/// In-memory preference store plus the running application version.
pub struct PreferencesService {
    preferences: Mutex<Preferences>,
    app_version: Mutex<String>,
}

impl PreferencesService {
    pub fn new(initial: Preferences) -> Self {
        Self {
            preferences: Mutex::new(initial),
            app_version: Mutex::new(String::new()),
        }
    }

    /// A service seeded with [`Preferences::defaults`].
    pub fn with_defaults() -> Self {
        Self::new(Preferences::defaults())
    }

    /// A copy of the current preferences.
    pub async fn snapshot(&self) -> Preferences {
        self.preferences.lock().await.clone()
    }

    pub async fn get_preferences(&self) -> Envelope {
        let prefs = self.preferences.lock().await;
        payload_envelope(&*prefs)
    }

    /// Replaces the whole preference set.
    pub async fn set_preferences(&self, prefs: Preferences) -> Envelope {
        *self.preferences.lock().await = prefs;
        info!("preferences replaced");
        Envelope::ok_empty()
    }

    /// Applies dotted-key updates atomically.
    pub async fn update_preferences(&self, updates: &Map<String, Value>) -> Envelope {
        let mut prefs = self.preferences.lock().await;
        match apply_updates(&prefs, updates) {
            Ok(updated) => {
                *prefs = updated;
                debug!(keys = ?updates.keys().collect::<Vec<_>>(), "preferences updated");
                Envelope::ok_empty()
            }
            Err(e) => {
                warn!("rejected preference update: {e}");
                Envelope::failed(e.to_string())
            }
        }
    }

    /// Resets to defaults and returns them under `pref`.
    pub async fn restore_preferences(&self) -> Envelope {
        let defaults = Preferences::defaults();
        *self.preferences.lock().await = defaults.clone();
        info!("preferences restored to defaults");
        match serde_json::to_value(&defaults) {
            Ok(pref) => Envelope::ok(json!({ "pref": pref })),
            Err(e) => Envelope::failed(e.to_string()),
        }
    }

    /// Records the running version, normalised to a leading `v`.
    pub async fn set_app_version(&self, version: &str) {
        let normalised = if version.starts_with('v') {
            version.to_string()
        } else {
            format!("v{version}")
        };
        *self.app_version.lock().await = normalised;
    }

    pub async fn get_app_version(&self) -> Envelope {
        let version = self.app_version.lock().await.clone();
        Envelope::ok(json!({ "version": version }))
    }

    /// Handles a window-size report from the window system.
    pub async fn save_window_size(&self, width: i64, height: i64, maximised: bool) {
        let mut updates = Map::new();
        match classify_window_size(width, height, maximised) {
            WindowSizeChange::Maximised => {
                updates.insert("behavior.windowMaximised".into(), Value::Bool(true));
            }
            WindowSizeChange::Resized { width, height } => {
                updates.insert("behavior.windowWidth".into(), width.into());
                updates.insert("behavior.windowHeight".into(), height.into());
                updates.insert("behavior.windowMaximised".into(), Value::Bool(false));
            }
            WindowSizeChange::Ignored => {
                debug!(width, height, "window smaller than minimum, size not saved");
                return;
            }
        }
        self.apply_internal(&updates).await;
    }

    /// `(width, height, maximised)` to open the window with.
    pub async fn window_size(&self) -> (i64, i64, bool) {
        effective_window_size(&self.preferences.lock().await.behavior)
    }

    /// Where to open the window on the screen reported by `screens`.
    pub async fn window_position(&self, screens: &dyn ScreenSource) -> (i64, i64) {
        let behavior = self.preferences.lock().await.behavior.clone();
        let screen = screens.current_screen().await;
        window_position(&behavior, screen)
    }

    /// Handles a window-move report from the window system.
    pub async fn save_window_position(&self, x: i64, y: i64) {
        if !should_save_position(x, y) {
            return;
        }
        let mut updates = Map::new();
        updates.insert("behavior.windowPosX".into(), x.into());
        updates.insert("behavior.windowPosY".into(), y.into());
        self.apply_internal(&updates).await;
    }

    async fn apply_internal(&self, updates: &Map<String, Value>) {
        let env = self.update_preferences(updates).await;
        if !env.is_ok() {
            warn!("internal preference update failed: {}", env.message());
        }
    }
}

impl Default for PreferencesService {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn payload_envelope<T: Serialize>(value: &T) -> Envelope {
    match serde_json::to_value(value) {
        Ok(payload) => Envelope::ok(payload),
        Err(e) => Envelope::failed(e.to_string()),
    }
}

/// Resolves `<group>.<field>` against the preference schemas.
fn resolve_key(key: &str) -> Result<(&str, &str), UpdateError> {
    let unknown = || UpdateError::UnknownKey(key.to_string());
    let (group, field) = key.split_once('.').ok_or_else(unknown)?;
    match PREFERENCES_SCHEMA.field(group).map(|f| f.shape) {
        Some(Shape::Nested(schema)) if schema.declares(field) => Ok((group, field)),
        _ => Err(unknown()),
    }
}

/// Produces the preferences that result from applying `updates` to
/// `current`, or an error without touching anything.
pub fn apply_updates(
    current: &Preferences,
    updates: &Map<String, Value>,
) -> Result<Preferences, UpdateError> {
    let resolved = updates
        .iter()
        .map(|(key, value)| resolve_key(key).map(|(group, field)| (group, field, value)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut root = match serde_json::to_value(current)? {
        Value::Object(root) => root,
        _ => Map::new(),
    };

    for (group, field, value) in resolved {
        let slot = root
            .entry(group)
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        if let Value::Object(fields) = slot {
            fields.insert(field.to_string(), value.clone());
        }
    }

    Ok(hydrate_configuration(Value::Object(root))?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
