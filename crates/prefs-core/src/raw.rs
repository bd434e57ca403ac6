//! Raw input accepted by every hydration entry point.
//!
//! The frontend sometimes receives an already-decoded JSON value and
//! sometimes the JSON text itself (for example when a value was stashed in
//! `localStorage`).  [`RawJson`] covers both so callers never have to parse
//! before handing data to the hydrator.

use serde_json::Value;
use thiserror::Error;

/// Error type for hydration entry points.
///
/// Shape mismatches (missing keys, extra keys, wrong primitive types) are
/// never errors.  Only text that is not JSON at all fails.
#[derive(Debug, Error)]
pub enum HydrateError {
    /// The top-level text could not be parsed as JSON.
    #[error("malformed JSON input: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

/// A JSON value that may still be in textual form.
#[derive(Debug, Clone, PartialEq)]
pub enum RawJson<'a> {
    /// JSON text that must be parsed first.
    Text(&'a str),
    /// A value that has already been decoded.
    Value(Value),
}

impl<'a> RawJson<'a> {
    /// Resolves the input into a decoded [`Value`].
    ///
    /// # Errors
    ///
    /// Returns [`HydrateError::MalformedJson`] when the text form is not
    /// valid JSON.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prefs_core::RawJson;
    ///
    /// let value = RawJson::from(r#"{"code":0}"#).into_value().unwrap();
    /// assert_eq!(value["code"], 0);
    /// assert!(RawJson::from("{not json").into_value().is_err());
    /// ```
    pub fn into_value(self) -> Result<Value, HydrateError> {
        match self {
            RawJson::Text(text) => Ok(serde_json::from_str(text)?),
            RawJson::Value(value) => Ok(value),
        }
    }
}

impl<'a> From<&'a str> for RawJson<'a> {
    fn from(text: &'a str) -> Self {
        RawJson::Text(text)
    }
}

impl<'a> From<&'a String> for RawJson<'a> {
    fn from(text: &'a String) -> Self {
        RawJson::Text(text.as_str())
    }
}

impl From<Value> for RawJson<'_> {
    fn from(value: Value) -> Self {
        RawJson::Value(value)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_input_is_parsed() {
        let value = RawJson::from("[1, 2, 3]").into_value().unwrap();
        assert_eq!(value, json!([1, 2, 3]));
    }

    #[test]
    fn test_value_input_is_returned_unchanged() {
        let original = json!({"theme": "dark"});
        let value = RawJson::from(original.clone()).into_value().unwrap();
        assert_eq!(value, original);
    }

    #[test]
    fn test_malformed_text_returns_error() {
        // Arrange
        let raw = RawJson::from("{not json");

        // Act
        let result = raw.into_value();

        // Assert
        assert!(matches!(result, Err(HydrateError::MalformedJson(_))));
    }

    #[test]
    fn test_json_string_literal_text_decodes_to_string_value() {
        // A quoted JSON string is valid JSON text; it decodes to a string value.
        let value = RawJson::from(r#""dark""#).into_value().unwrap();
        assert_eq!(value, json!("dark"));
    }
}
