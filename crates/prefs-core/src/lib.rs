//! # prefs-core
//!
//! The typed boundary between the desktop backend and its embedded web
//! frontend.
//!
//! The backend answers every call with a JSON [`Envelope`] and stores user
//! preferences as one plain JSON object.  This crate turns that JSON back
//! into typed values without trusting its exact shape.
//!
//! - **`schema`** – Declarative [`Schema`] descriptors and the generic
//!   [`hydrate`] function that walks a JSON value and a schema together.
//!   This is the only part with structural logic.
//!
//! - **`protocol`** – The three-field response [`Envelope`] and
//!   [`parse_envelope`].
//!
//! - **`domain`** – The [`Preferences`] tree (behavior, general, editor),
//!   its schemas, defaults, and [`hydrate_configuration`].
//!
//! Everything here is synchronous and allocation-only: no I/O, no shared
//! state, safe to call from any thread.
//!
//! # Tolerance
//!
//! Only malformed JSON text is an error.  Unknown keys are dropped,
//! missing keys read as `None`, and wrongly typed primitives read as
//! `None`.  Front and back ends ship independently and must keep working
//! across schema changes.

pub mod domain;
pub mod protocol;
pub mod raw;
pub mod schema;

pub use domain::{
    hydrate_configuration, Preferences, PreferencesBehavior, PreferencesEditor,
    PreferencesGeneral,
};
pub use protocol::{parse_envelope, Code, Envelope};
pub use raw::{HydrateError, RawJson};
pub use schema::{hydrate, HydrateMode, Hydrated, Instance, Schema, Schematic};
