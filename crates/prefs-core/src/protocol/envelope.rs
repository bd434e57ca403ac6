//! Uniform response envelope for backend calls.
//!
//! Every command the backend exposes to the web frontend answers with the
//! same three-field object:
//!
//! ```json
//! {"code": 0, "msg": "", "data": {"version": "v1.2.0"}}
//! ```
//!
//! - `code`: status code.  `0` is success; the failure taxonomy belongs to
//!   the backend and is interpreted by the caller, never validated here.
//! - `msg`: human-readable message, usually empty on success.
//! - `data`: optional payload, omitted when there is nothing to return.
//!
//! The envelope is declared as a [`Schema`] and built by the same hydrator
//! as the preference tree, so it follows the same tolerance rules: a
//! missing `data` is not an error and a `code` of the wrong type simply
//! reads as `None`.

use serde::Serialize;
use serde_json::Value;

use crate::raw::{HydrateError, RawJson};
use crate::schema::{hydrate_as, Field, Instance, Schema, Schematic};

/// Wire schema of the envelope.
pub static ENVELOPE_SCHEMA: Schema = Schema {
    name: "Envelope",
    fields: &[Field::scalar("code"), Field::scalar("msg"), Field::scalar("data")],
};

/// Status code carried by an [`Envelope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Code(pub i64);

impl Code {
    /// The call succeeded.
    pub const OK: Code = Code(0);
    /// Generic failure; details are in the message.
    pub const FAILED: Code = Code(1);
}

/// A decoded backend response.
///
/// Immutable once built.  Share it by reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Code>,
    #[serde(rename = "msg", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "data", skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl Envelope {
    /// A success response carrying `payload`.
    pub fn ok(payload: Value) -> Self {
        Self {
            code: Some(Code::OK),
            message: Some(String::new()),
            payload: Some(payload),
        }
    }

    /// A success response with no payload.
    pub fn ok_empty() -> Self {
        Self {
            code: Some(Code::OK),
            message: Some(String::new()),
            payload: None,
        }
    }

    /// A failure response.  Failures never carry a payload.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            code: Some(Code::FAILED),
            message: Some(message.into()),
            payload: None,
        }
    }

    /// Returns `true` when the code is [`Code::OK`].
    pub fn is_ok(&self) -> bool {
        self.code == Some(Code::OK)
    }

    /// The message, or `""` when the response had none.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}

impl Schematic for Envelope {
    fn schema() -> &'static Schema {
        &ENVELOPE_SCHEMA
    }

    fn from_instance(instance: &Instance) -> Self {
        Self {
            code: instance.integer("code").map(Code),
            message: instance.string("msg"),
            payload: instance.value("data").cloned(),
        }
    }
}

/// Decodes a backend response.
///
/// Accepts either JSON text or an already-decoded value.
///
/// # Errors
///
/// Returns [`HydrateError::MalformedJson`] if textual input is not JSON.
///
/// # Examples
///
/// ```rust
/// use prefs_core::{parse_envelope, Code};
///
/// let env = parse_envelope(r#"{"code":1,"msg":"network error"}"#).unwrap();
/// assert_eq!(env.code, Some(Code::FAILED));
/// assert_eq!(env.message(), "network error");
/// assert!(env.payload.is_none());
/// ```
pub fn parse_envelope<'a>(raw: impl Into<RawJson<'a>>) -> Result<Envelope, HydrateError> {
    hydrate_as(raw)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
