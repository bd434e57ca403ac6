//! Declarative schema descriptors.
//!
//! A [`Schema`] is plain data: a type name plus an ordered list of
//! [`Field`]s, each tagged with the [`Shape`] the hydrator should expect at
//! that position.  Schemas are declared as `static` items so nested schemas
//! can point at each other by reference:
//!
//! ```rust
//! use prefs_core::schema::{Field, Schema};
//!
//! static POINT: Schema = Schema { name: "Point", fields: &[Field::scalar("x"), Field::scalar("y")] };
//! static LINE: Schema = Schema {
//!     name: "Line",
//!     fields: &[Field::nested("from", &POINT), Field::nested("to", &POINT)],
//! };
//!
//! assert_eq!(LINE.field("from").unwrap().name, "from");
//! assert!(LINE.field("colour").is_none());
//! ```
//!
//! Declared schemas are finite and non-cyclic.  Recursion during hydration
//! is bounded by the nesting depth of the input value, not by the schema.

/// The expected shape of a single declared field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Copied verbatim.  Covers numbers, strings, booleans and plain lists
    /// such as `fontFamily`.
    Scalar,
    /// A single structured sub-object hydrated against the given schema.
    Nested(&'static Schema),
    /// A list whose elements are hydrated against the given schema.
    ListOf(&'static Schema),
    /// A mapping of arbitrary names to sub-objects of the given schema.
    MapOf(&'static Schema),
}

/// One declared field of a [`Schema`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    /// Wire name of the field (the JSON key).
    pub name: &'static str,
    /// What the hydrator expects to find under that key.
    pub shape: Shape,
}

impl Field {
    pub const fn scalar(name: &'static str) -> Self {
        Self {
            name,
            shape: Shape::Scalar,
        }
    }

    pub const fn nested(name: &'static str, schema: &'static Schema) -> Self {
        Self {
            name,
            shape: Shape::Nested(schema),
        }
    }

    pub const fn list_of(name: &'static str, schema: &'static Schema) -> Self {
        Self {
            name,
            shape: Shape::ListOf(schema),
        }
    }

    pub const fn map_of(name: &'static str, schema: &'static Schema) -> Self {
        Self {
            name,
            shape: Shape::MapOf(schema),
        }
    }
}

/// A structured type's field list.
#[derive(Debug, PartialEq)]
pub struct Schema {
    /// Type name, used in log output only.
    pub name: &'static str,
    /// Declared fields in declaration order.
    pub fields: &'static [Field],
}

impl Schema {
    /// Looks up a declared field by wire name.
    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Position of a declared field, used to index instance slots.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Returns `true` if `name` is a declared field.
    pub fn declares(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
