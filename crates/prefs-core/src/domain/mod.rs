//! Domain types: the user preference tree and its defaults.
//!
//! Nothing here performs I/O.  The preference groups are plain data; the
//! only logic is the mapping between wire names and typed fields.

pub mod defaults;
pub mod preferences;

pub use preferences::{
    hydrate_configuration, Preferences, PreferencesBehavior, PreferencesEditor,
    PreferencesGeneral,
};
