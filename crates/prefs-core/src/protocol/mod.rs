//! The response envelope shared by every backend call.

pub mod envelope;

pub use envelope::{parse_envelope, Code, Envelope};
