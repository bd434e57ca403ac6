//! Typed user preferences and their wire schemas.
//!
//! The backend stores preferences as one JSON object with three independent
//! groups:
//!
//! ```json
//! {
//!   "behavior": {"welcomed": true, "asideWidth": 300, ...},
//!   "general":  {"theme": "auto", "fontFamily": ["Fira Code"], ...},
//!   "editor":   {"showLineNum": true, ...}
//! }
//! ```
//!
//! Every field is an `Option` because hydration never invents values: a
//! key the snapshot lacks is `None`, not a default.  Serialising a
//! [`Preferences`] skips `None` fields, so the output hydrates back into an
//! equal value.

use serde::Serialize;

use crate::raw::{HydrateError, RawJson};
use crate::schema::{hydrate_as, Field, Instance, Schema, Schematic};

// ── Schemas ───────────────────────────────────────────────────────────────────

pub static BEHAVIOR_SCHEMA: Schema = Schema {
    name: "PreferencesBehavior",
    fields: &[
        Field::scalar("welcomed"),
        Field::scalar("asideWidth"),
        Field::scalar("windowWidth"),
        Field::scalar("windowHeight"),
        Field::scalar("windowMaximised"),
        Field::scalar("windowPosX"),
        Field::scalar("windowPosY"),
    ],
};

pub static GENERAL_SCHEMA: Schema = Schema {
    name: "PreferencesGeneral",
    fields: &[
        Field::scalar("theme"),
        Field::scalar("language"),
        Field::scalar("font"),
        Field::scalar("fontFamily"),
        Field::scalar("fontSize"),
        Field::scalar("useSysProxy"),
        Field::scalar("useSysProxyHttp"),
        Field::scalar("checkUpdate"),
        Field::scalar("skipVersion"),
        Field::scalar("allowTrack"),
    ],
};

pub static EDITOR_SCHEMA: Schema = Schema {
    name: "PreferencesEditor",
    fields: &[
        Field::scalar("font"),
        Field::scalar("fontFamily"),
        Field::scalar("fontSize"),
        Field::scalar("showLineNum"),
        Field::scalar("showFolding"),
        Field::scalar("dropText"),
        Field::scalar("links"),
    ],
};

pub static PREFERENCES_SCHEMA: Schema = Schema {
    name: "Preferences",
    fields: &[
        Field::nested("behavior", &BEHAVIOR_SCHEMA),
        Field::nested("general", &GENERAL_SCHEMA),
        Field::nested("editor", &EDITOR_SCHEMA),
    ],
};

// ── Typed groups ──────────────────────────────────────────────────────────────

/// Window and session state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesBehavior {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcomed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aside_width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_maximised: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_pos_x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_pos_y: Option<i64>,
}

/// Appearance and runtime preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesGeneral {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    /// Ordered font-family fallbacks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_sys_proxy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_sys_proxy_http: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_update: Option<bool>,
    /// Release the user chose not to be reminded about again.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_version: Option<String>,
    /// Telemetry consent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_track: Option<bool>,
}

/// Text-editor preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesEditor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_line_num: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_folding: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_text: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<bool>,
}

/// The root configuration object.
///
/// All three groups are always present.  A group missing from the input is
/// a group whose fields are all `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub behavior: PreferencesBehavior,
    pub general: PreferencesGeneral,
    pub editor: PreferencesEditor,
}

impl Schematic for PreferencesBehavior {
    fn schema() -> &'static Schema {
        &BEHAVIOR_SCHEMA
    }

    fn from_instance(i: &Instance) -> Self {
        Self {
            welcomed: i.boolean("welcomed"),
            aside_width: i.integer("asideWidth"),
            window_width: i.integer("windowWidth"),
            window_height: i.integer("windowHeight"),
            window_maximised: i.boolean("windowMaximised"),
            window_pos_x: i.integer("windowPosX"),
            window_pos_y: i.integer("windowPosY"),
        }
    }
}

impl Schematic for PreferencesGeneral {
    fn schema() -> &'static Schema {
        &GENERAL_SCHEMA
    }

    fn from_instance(i: &Instance) -> Self {
        Self {
            theme: i.string("theme"),
            language: i.string("language"),
            font: i.string("font"),
            font_family: i.string_list("fontFamily"),
            font_size: i.integer("fontSize"),
            use_sys_proxy: i.boolean("useSysProxy"),
            use_sys_proxy_http: i.boolean("useSysProxyHttp"),
            check_update: i.boolean("checkUpdate"),
            skip_version: i.string("skipVersion"),
            allow_track: i.boolean("allowTrack"),
        }
    }
}

impl Schematic for PreferencesEditor {
    fn schema() -> &'static Schema {
        &EDITOR_SCHEMA
    }

    fn from_instance(i: &Instance) -> Self {
        Self {
            font: i.string("font"),
            font_family: i.string_list("fontFamily"),
            font_size: i.integer("fontSize"),
            show_line_num: i.boolean("showLineNum"),
            show_folding: i.boolean("showFolding"),
            drop_text: i.boolean("dropText"),
            links: i.boolean("links"),
        }
    }
}

impl Schematic for Preferences {
    fn schema() -> &'static Schema {
        &PREFERENCES_SCHEMA
    }

    fn from_instance(i: &Instance) -> Self {
        Self {
            behavior: i.nested("behavior").unwrap_or_default(),
            general: i.nested("general").unwrap_or_default(),
            editor: i.nested("editor").unwrap_or_default(),
        }
    }
}

/// Hydrates a configuration snapshot into typed preferences.
///
/// Accepts JSON text or an already-decoded value.  Unknown keys are
/// dropped and missing keys stay `None`.
///
/// # Errors
///
/// Returns [`HydrateError::MalformedJson`] if textual input is not JSON.
///
/// # Examples
///
/// ```rust
/// use prefs_core::hydrate_configuration;
///
/// let prefs = hydrate_configuration(r#"{"general":{"theme":"dark"}}"#).unwrap();
/// assert_eq!(prefs.general.theme.as_deref(), Some("dark"));
/// assert_eq!(prefs.general.language, None);
/// ```
pub fn hydrate_configuration<'a>(raw: impl Into<RawJson<'a>>) -> Result<Preferences, HydrateError> {
    hydrate_as(raw)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
