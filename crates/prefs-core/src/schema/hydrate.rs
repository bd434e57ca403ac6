//! Schema-driven hydration of untyped JSON into typed instance trees.
//!
//! The backend serialises plain JSON.  The frontend needs typed, nested
//! objects.  [`hydrate`] walks a JSON [`Value`] and a [`Schema`] together and
//! produces a [`Hydrated`] tree:
//!
//! | Input value        | Result                                              |
//! |--------------------|-----------------------------------------------------|
//! | `null`             | [`Hydrated::Absent`] (nothing is fabricated)        |
//! | array              | [`Hydrated::Sequence`], element-wise, same order    |
//! | object, instance   | [`Hydrated::Instance`] seeded from declared fields  |
//! | object, map mode   | [`Hydrated::Map`], every entry hydrated, keys kept  |
//! | string/number/bool | [`Hydrated::Primitive`], unchanged                  |
//!
//! # Tolerance policy
//!
//! Keys that the schema does not declare are dropped.  Declared keys that
//! the input lacks become [`Hydrated::Absent`].  Primitives of the wrong
//! type are kept as-is and simply read back as `None` through the typed
//! accessors on [`Instance`].  The only failure is text that is not JSON at
//! all, reported by the [`RawJson`]-accepting entry points.
//!
//! Independently versioned backend and frontend builds can therefore add
//! or remove preference fields without breaking each other.
//!
//! # Ownership
//!
//! [`hydrate`] takes the input by value.  Instance mode moves matching
//! values out of the source object; map mode replaces every entry of the
//! source map with its hydrated form.  The caller's original value is never
//! observed half-converted.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::descriptor::{Field, Schema, Shape};
use crate::raw::{HydrateError, RawJson};

/// How a keyed structure is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HydrateMode {
    /// One instance of the schema, seeded from the matching keys.
    #[default]
    Instance,
    /// A mapping of arbitrary names to instances of the schema.
    Map,
}

/// The result of hydrating a value against a schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Hydrated {
    /// JSON `null`, or a declared field missing from the input.
    Absent,
    /// A value passed through unchanged.
    Primitive(Value),
    /// A structured instance of a schema.
    Instance(Instance),
    /// Element-wise hydration of an array.
    Sequence(Vec<Hydrated>),
    /// Map-mode hydration of an object.
    Map(BTreeMap<String, Hydrated>),
}

impl Hydrated {
    pub fn is_absent(&self) -> bool {
        matches!(self, Hydrated::Absent)
    }

    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Hydrated::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    pub fn as_primitive(&self) -> Option<&Value> {
        match self {
            Hydrated::Primitive(value) => Some(value),
            _ => None,
        }
    }

    /// Converts the tree back into plain JSON.
    ///
    /// Absent instance fields are left out, so re-hydrating the result
    /// yields an equal tree.
    pub fn to_value(&self) -> Value {
        match self {
            Hydrated::Absent => Value::Null,
            Hydrated::Primitive(value) => value.clone(),
            Hydrated::Instance(instance) => instance.to_value(),
            Hydrated::Sequence(items) => Value::Array(items.iter().map(Hydrated::to_value).collect()),
            Hydrated::Map(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, node)| (key.clone(), node.to_value()))
                    .collect(),
            ),
        }
    }
}

/// A typed instance of a [`Schema`].
///
/// Holds one slot per declared field, in declaration order.  Fields the
/// input did not provide are [`Hydrated::Absent`].
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    schema: &'static Schema,
    slots: Vec<Hydrated>,
}

impl Instance {
    /// An instance with every declared field absent.
    pub fn empty(schema: &'static Schema) -> Self {
        Self {
            schema,
            slots: vec![Hydrated::Absent; schema.fields.len()],
        }
    }

    fn from_object(schema: &'static Schema, mut source: Map<String, Value>) -> Self {
        let slots = schema
            .fields
            .iter()
            .map(|field| match source.remove(field.name) {
                Some(value) => hydrate_field(field, value),
                None => Hydrated::Absent,
            })
            .collect();

        if !source.is_empty() {
            trace!(
                schema = schema.name,
                ignored = ?source.keys().collect::<Vec<_>>(),
                "dropping undeclared keys"
            );
        }

        Self { schema, slots }
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Returns the slot for a declared field, or `None` if `name` is not
    /// part of the schema.
    pub fn get(&self, name: &str) -> Option<&Hydrated> {
        self.schema.index_of(name).map(|i| &self.slots[i])
    }

    /// Returns `true` if the field is declared and was present in the input.
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(|slot| !slot.is_absent())
    }

    /// Iterates over declared field names and their slots.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &Hydrated)> {
        self.schema
            .fields
            .iter()
            .map(|f| f.name)
            .zip(self.slots.iter())
    }

    /// The raw primitive stored in a scalar field.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.get(name).and_then(Hydrated::as_primitive)
    }

    pub fn string(&self, name: &str) -> Option<String> {
        self.typed(name, "string", |v| v.as_str().map(str::to_owned))
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.typed(name, "bool", Value::as_bool)
    }

    /// Reads an integer field.  Floats with no fractional part are accepted
    /// because JavaScript producers do not distinguish the two.
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.typed(name, "integer", |v| {
            v.as_i64().or_else(|| {
                v.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            })
        })
    }

    /// Reads a list of strings.  Any non-string element makes the whole
    /// field read as `None`.
    pub fn string_list(&self, name: &str) -> Option<Vec<String>> {
        self.typed(name, "string list", |v| {
            v.as_array()?
                .iter()
                .map(|item| item.as_str().map(str::to_owned))
                .collect()
        })
    }

    /// Reads a nested sub-object as a typed value.
    pub fn nested<T: Schematic>(&self, name: &str) -> Option<T> {
        match self.get(name)? {
            Hydrated::Instance(instance) => Some(T::from_instance(instance)),
            Hydrated::Absent => None,
            other => {
                debug!(
                    schema = self.schema.name,
                    field = name,
                    found = ?other,
                    "expected a nested object"
                );
                None
            }
        }
    }

    /// Reads a list of sub-objects.  Elements that are not objects are
    /// skipped.
    pub fn list<T: Schematic>(&self, name: &str) -> Option<Vec<T>> {
        match self.get(name)? {
            Hydrated::Sequence(items) => Some(instances_of(items.iter())),
            Hydrated::Absent => None,
            other => {
                debug!(schema = self.schema.name, field = name, found = ?other, "expected a list");
                None
            }
        }
    }

    /// Reads a name → sub-object mapping.  Entries that are not objects are
    /// skipped.
    pub fn map<T: Schematic>(&self, name: &str) -> Option<BTreeMap<String, T>> {
        match self.get(name)? {
            Hydrated::Map(entries) => Some(
                entries
                    .iter()
                    .filter_map(|(key, node)| {
                        node.as_instance()
                            .map(|instance| (key.clone(), T::from_instance(instance)))
                    })
                    .collect(),
            ),
            Hydrated::Absent => None,
            other => {
                debug!(schema = self.schema.name, field = name, found = ?other, "expected a map");
                None
            }
        }
    }

    pub fn to_value(&self) -> Value {
        Value::Object(
            self.fields()
                .filter(|(_, slot)| !slot.is_absent())
                .map(|(name, slot)| (name.to_owned(), slot.to_value()))
                .collect(),
        )
    }

    fn typed<T>(&self, name: &str, expected: &str, read: impl FnOnce(&Value) -> Option<T>) -> Option<T> {
        let value = self.value(name)?;
        let result = read(value);
        if result.is_none() {
            debug!(
                schema = self.schema.name,
                field = name,
                expected,
                found = %value,
                "primitive type mismatch, treating as absent"
            );
        }
        result
    }
}

impl Serialize for Hydrated {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Hydrated::Absent => serializer.serialize_unit(),
            Hydrated::Primitive(value) => value.serialize(serializer),
            Hydrated::Instance(instance) => instance.serialize(serializer),
            Hydrated::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Hydrated::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, node) in entries {
                    map.serialize_entry(key, node)?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for Instance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (name, slot) in self.fields().filter(|(_, slot)| !slot.is_absent()) {
            map.serialize_entry(name, slot)?;
        }
        map.end()
    }
}

/// A Rust type whose shape is described by a static [`Schema`].
///
/// Implementors read their fields from a hydrated [`Instance`] with the
/// typed accessors, which never fail.
pub trait Schematic: Sized {
    fn schema() -> &'static Schema;

    fn from_instance(instance: &Instance) -> Self;

    /// Builds a value from an arbitrary hydrated node.  Anything other than
    /// an instance reads as an instance with every field absent.
    fn from_hydrated(node: &Hydrated) -> Self {
        match node {
            Hydrated::Instance(instance) => Self::from_instance(instance),
            other => {
                if !other.is_absent() {
                    debug!(schema = Self::schema().name, found = ?other, "expected an object");
                }
                Self::from_instance(&Instance::empty(Self::schema()))
            }
        }
    }
}

// ── Hydration ─────────────────────────────────────────────────────────────────

/// Recursively converts `value` against `schema`.
///
/// # Examples
///
/// ```rust
/// use prefs_core::schema::{hydrate, Field, Hydrated, HydrateMode, Schema};
/// use serde_json::json;
///
/// static THEME: Schema = Schema { name: "Theme", fields: &[Field::scalar("theme")] };
///
/// let out = hydrate(json!([{"theme": "a"}, {"theme": "b"}]), &THEME, HydrateMode::Instance);
/// let Hydrated::Sequence(items) = out else { panic!("expected a sequence") };
/// assert_eq!(items.len(), 2);
/// assert_eq!(items[1].as_instance().unwrap().string("theme").as_deref(), Some("b"));
/// ```
pub fn hydrate(value: Value, schema: &'static Schema, mode: HydrateMode) -> Hydrated {
    match value {
        Value::Null => Hydrated::Absent,
        Value::Array(items) => Hydrated::Sequence(
            items
                .into_iter()
                .map(|item| hydrate(item, schema, HydrateMode::Instance))
                .collect(),
        ),
        Value::Object(source) => match mode {
            HydrateMode::Instance => Hydrated::Instance(Instance::from_object(schema, source)),
            HydrateMode::Map => Hydrated::Map(
                source
                    .into_iter()
                    .map(|(key, entry)| (key, hydrate(entry, schema, HydrateMode::Instance)))
                    .collect(),
            ),
        },
        primitive => Hydrated::Primitive(primitive),
    }
}

fn hydrate_field(field: &Field, value: Value) -> Hydrated {
    match field.shape {
        Shape::Scalar if value.is_null() => Hydrated::Absent,
        Shape::Scalar => Hydrated::Primitive(value),
        Shape::Nested(schema) | Shape::ListOf(schema) => {
            hydrate(value, schema, HydrateMode::Instance)
        }
        Shape::MapOf(schema) => hydrate(value, schema, HydrateMode::Map),
    }
}

fn instances_of<'a, T: Schematic>(items: impl Iterator<Item = &'a Hydrated>) -> Vec<T> {
    items
        .filter_map(|item| item.as_instance().map(T::from_instance))
        .collect()
}

/// Parses (if needed) and hydrates a raw input.
///
/// # Errors
///
/// Returns [`HydrateError::MalformedJson`] when textual input is not JSON.
pub fn hydrate_raw<'a>(
    raw: impl Into<RawJson<'a>>,
    schema: &'static Schema,
    mode: HydrateMode,
) -> Result<Hydrated, HydrateError> {
    let value = raw.into().into_value()?;
    Ok(hydrate(value, schema, mode))
}

/// Hydrates a raw input straight into a typed value.
///
/// A root that is not an object (for example `null` or a bare number)
/// yields a value with every field absent rather than an error.
///
/// # Errors
///
/// Returns [`HydrateError::MalformedJson`] when textual input is not JSON.
pub fn hydrate_as<'a, T: Schematic>(raw: impl Into<RawJson<'a>>) -> Result<T, HydrateError> {
    let node = hydrate_raw(raw, T::schema(), HydrateMode::Instance)?;
    Ok(T::from_hydrated(&node))
}

/// Hydrates a raw JSON array into a list of typed values, preserving order.
///
/// A root that is not an array yields an empty list.  Array elements that
/// are not objects are skipped.
///
/// # Errors
///
/// Returns [`HydrateError::MalformedJson`] when textual input is not JSON.
pub fn hydrate_list_as<'a, T: Schematic>(
    raw: impl Into<RawJson<'a>>,
) -> Result<Vec<T>, HydrateError> {
    match hydrate_raw(raw, T::schema(), HydrateMode::Instance)? {
        Hydrated::Sequence(items) => Ok(instances_of(items.iter())),
        other => {
            debug!(schema = T::schema().name, found = ?other, "expected a JSON array");
            Ok(Vec::new())
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static PROFILE: Schema = Schema {
        name: "Profile",
        fields: &[Field::scalar("theme"), Field::scalar("fontSize"), Field::scalar("tags")],
    };
    static WORKSPACE: Schema = Schema {
        name: "Workspace",
        fields: &[
            Field::scalar("name"),
            Field::nested("active", &PROFILE),
            Field::list_of("history", &PROFILE),
            Field::map_of("profiles", &PROFILE),
        ],
    };

    #[derive(Debug, PartialEq)]
    struct Profile {
        theme: Option<String>,
        font_size: Option<i64>,
    }

    impl Schematic for Profile {
        fn schema() -> &'static Schema {
            &PROFILE
        }

        fn from_instance(instance: &Instance) -> Self {
            Self {
                theme: instance.string("theme"),
                font_size: instance.integer("fontSize"),
            }
        }
    }

    fn instance(node: Hydrated) -> Instance {
        match node {
            Hydrated::Instance(instance) => instance,
            other => panic!("expected an instance, got {other:?}"),
        }
    }

    // ── Absent and primitive inputs ───────────────────────────────────────────

    #[test]
    fn test_null_hydrates_to_absent() {
        assert_eq!(hydrate(Value::Null, &PROFILE, HydrateMode::Instance), Hydrated::Absent);
        assert_eq!(hydrate(Value::Null, &PROFILE, HydrateMode::Map), Hydrated::Absent);
    }

    #[test]
    fn test_primitive_in_map_mode_passes_through() {
        assert_eq!(hydrate(json!(3), &PROFILE, HydrateMode::Map), Hydrated::Primitive(json!(3)));
    }

    #[test]
    fn test_primitives_pass_through_unchanged() {
        for value in [json!("dark"), json!(0), json!(false), json!(""), json!(1.5)] {
            let out = hydrate(value.clone(), &PROFILE, HydrateMode::Instance);
            assert_eq!(out, Hydrated::Primitive(value));
        }
    }

    // ── Instance mode ─────────────────────────────────────────────────────────

    #[test]
    fn test_instance_mode_seeds_declared_fields() {
        // Arrange
        let value = json!({"theme": "dark", "fontSize": 14});

        // Act
        let inst = instance(hydrate(value, &PROFILE, HydrateMode::Instance));

        // Assert
        assert_eq!(inst.string("theme").as_deref(), Some("dark"));
        assert_eq!(inst.integer("fontSize"), Some(14));
    }

    #[test]
    fn test_instance_mode_drops_undeclared_keys() {
        let inst = instance(hydrate(
            json!({"theme": "dark", "bogus": 1}),
            &PROFILE,
            HydrateMode::Instance,
        ));

        assert!(inst.get("bogus").is_none());
        assert_eq!(inst.to_value(), json!({"theme": "dark"}));
    }

    #[test]
    fn test_instance_mode_leaves_missing_fields_absent() {
        let inst = instance(hydrate(json!({"theme": "dark"}), &PROFILE, HydrateMode::Instance));

        assert!(inst.is_set("theme"));
        assert!(!inst.is_set("fontSize"));
        assert_eq!(inst.get("fontSize"), Some(&Hydrated::Absent));
        assert_eq!(inst.integer("fontSize"), None);
    }

    #[test]
    fn test_empty_object_yields_instance_with_all_fields_absent() {
        let inst = instance(hydrate(json!({}), &PROFILE, HydrateMode::Instance));
        assert_eq!(inst, Instance::empty(&PROFILE));
    }

    #[test]
    fn test_wrong_primitive_type_reads_as_none_without_failing() {
        let inst = instance(hydrate(
            json!({"theme": 42, "fontSize": "big"}),
            &PROFILE,
            HydrateMode::Instance,
        ));

        // The raw value is preserved; only the typed read declines it.
        assert_eq!(inst.value("theme"), Some(&json!(42)));
        assert_eq!(inst.string("theme"), None);
        assert_eq!(inst.integer("fontSize"), None);
    }

    #[test]
    fn test_integer_accepts_integral_floats() {
        let inst = instance(hydrate(
            json!({"fontSize": 14.0}),
            &PROFILE,
            HydrateMode::Instance,
        ));
        assert_eq!(inst.integer("fontSize"), Some(14));

        let inst = instance(hydrate(
            json!({"fontSize": 14.5}),
            &PROFILE,
            HydrateMode::Instance,
        ));
        assert_eq!(inst.integer("fontSize"), None);
    }

    #[test]
    fn test_scalar_list_is_copied_verbatim() {
        let inst = instance(hydrate(
            json!({"tags": ["a", "b"]}),
            &PROFILE,
            HydrateMode::Instance,
        ));

        assert_eq!(inst.value("tags"), Some(&json!(["a", "b"])));
        assert_eq!(
            inst.string_list("tags"),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_string_list_with_mixed_elements_reads_as_none() {
        let inst = instance(hydrate(
            json!({"tags": ["a", 1]}),
            &PROFILE,
            HydrateMode::Instance,
        ));
        assert_eq!(inst.string_list("tags"), None);
    }

    #[test]
    fn test_explicit_null_scalar_is_absent() {
        let inst = instance(hydrate(json!({"theme": null}), &PROFILE, HydrateMode::Instance));
        assert!(!inst.is_set("theme"));
    }

    // ── Sequences ─────────────────────────────────────────────────────────────

    #[test]
    fn test_array_hydrates_element_wise_preserving_order() {
        // Arrange
        let value = json!([{"theme": "a"}, {"theme": "b"}]);

        // Act
        let out = hydrate(value, &PROFILE, HydrateMode::Instance);

        // Assert
        let Hydrated::Sequence(items) = out else {
            panic!("expected a sequence");
        };
        let themes: Vec<_> = items
            .iter()
            .map(|item| item.as_instance().and_then(|i| i.string("theme")))
            .collect();
        assert_eq!(themes, vec![Some("a".to_string()), Some("b".to_string())]);
    }

    #[test]
    fn test_array_keeps_length_with_null_and_primitive_elements() {
        let out = hydrate(json!([null, 3, {"theme": "x"}]), &PROFILE, HydrateMode::Instance);

        let Hydrated::Sequence(items) = out else {
            panic!("expected a sequence");
        };
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], Hydrated::Absent);
        assert_eq!(items[1], Hydrated::Primitive(json!(3)));
        assert!(items[2].as_instance().is_some());
    }

    #[test]
    fn test_array_in_map_mode_hydrates_elements_as_instances() {
        let out = hydrate(json!([{"theme": "a"}]), &PROFILE, HydrateMode::Map);
        let Hydrated::Sequence(items) = out else {
            panic!("expected a sequence");
        };
        assert!(items[0].as_instance().is_some());
    }

    // ── Map mode ──────────────────────────────────────────────────────────────

    #[test]
    fn test_map_mode_hydrates_every_entry_and_keeps_keys() {
        // Arrange
        let value = json!({"Dark Mode": {"theme": "dark"}, "light": {"theme": "light", "x": 1}});

        // Act
        let out = hydrate(value, &PROFILE, HydrateMode::Map);

        // Assert
        let Hydrated::Map(entries) = out else {
            panic!("expected a map");
        };
        assert_eq!(entries.len(), 2);
        let dark = entries["Dark Mode"].as_instance().unwrap();
        assert_eq!(dark.string("theme").as_deref(), Some("dark"));
        assert!(entries["light"].as_instance().unwrap().get("x").is_none());
    }

    #[test]
    fn test_map_of_field_uses_map_mode() {
        let inst = instance(hydrate(
            json!({"profiles": {"work": {"fontSize": 12}, "home": {"fontSize": 16}}}),
            &WORKSPACE,
            HydrateMode::Instance,
        ));

        let profiles = inst.map::<Profile>("profiles").expect("profiles map");
        assert_eq!(profiles["work"].font_size, Some(12));
        assert_eq!(profiles["home"].font_size, Some(16));
    }

    // ── Nested schemas ────────────────────────────────────────────────────────

    #[test]
    fn test_nested_and_list_fields_recurse() {
        // Arrange
        let value = json!({
            "name": "main",
            "active": {"theme": "dark"},
            "history": [{"theme": "a"}, {"theme": "b"}],
        });

        // Act
        let inst = instance(hydrate(value, &WORKSPACE, HydrateMode::Instance));

        // Assert
        assert_eq!(inst.string("name").as_deref(), Some("main"));
        assert_eq!(
            inst.nested::<Profile>("active"),
            Some(Profile {
                theme: Some("dark".to_string()),
                font_size: None
            })
        );
        let history = inst.list::<Profile>("history").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].theme.as_deref(), Some("b"));
    }

    #[test]
    fn test_nested_field_holding_a_primitive_reads_as_none() {
        let inst = instance(hydrate(
            json!({"active": "dark"}),
            &WORKSPACE,
            HydrateMode::Instance,
        ));

        assert_eq!(inst.get("active"), Some(&Hydrated::Primitive(json!("dark"))));
        assert_eq!(inst.nested::<Profile>("active"), None);
    }

    // ── Round trip ────────────────────────────────────────────────────────────

    #[test]
    fn test_rehydrating_serialized_tree_is_idempotent() {
        // Arrange
        let value = json!({
            "name": "main",
            "unknown": true,
            "active": {"theme": "dark", "fontSize": 14},
            "profiles": {"p": {"theme": "x"}},
        });
        let first = hydrate(value, &WORKSPACE, HydrateMode::Instance);

        // Act
        let text = serde_json::to_string(&first).unwrap();
        let second = hydrate_raw(text.as_str(), &WORKSPACE, HydrateMode::Instance).unwrap();

        // Assert
        assert_eq!(first, second);
        assert_eq!(serde_json::to_value(&first).unwrap(), first.to_value());
    }

    // ── Entry points ──────────────────────────────────────────────────────────

    #[test]
    fn test_hydrate_as_accepts_text() {
        let profile: Profile = hydrate_as(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(profile.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn test_hydrate_as_with_non_object_root_yields_empty_value() {
        let profile: Profile = hydrate_as("null").unwrap();
        assert_eq!(
            profile,
            Profile {
                theme: None,
                font_size: None
            }
        );
    }

    #[test]
    fn test_hydrate_as_rejects_malformed_text() {
        let result = hydrate_as::<Profile>("{not json");
        assert!(matches!(result, Err(HydrateError::MalformedJson(_))));
    }

    #[test]
    fn test_hydrate_list_as_preserves_order() {
        let profiles: Vec<Profile> = hydrate_list_as(json!([{"theme": "a"}, {"theme": "b"}])).unwrap();
        let themes: Vec<_> = profiles.iter().map(|p| p.theme.as_deref()).collect();
        assert_eq!(themes, vec![Some("a"), Some("b")]);
    }

    #[test]
    fn test_hydrate_list_as_with_object_root_yields_empty_list() {
        let profiles: Vec<Profile> = hydrate_list_as(json!({"theme": "a"})).unwrap();
        assert!(profiles.is_empty());
    }
}
