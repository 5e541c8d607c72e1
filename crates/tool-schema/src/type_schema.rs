// crates/tool-schema/src/type_schema.rs
// ============================================================================
// Module: Type Schemas
// Description: Resolved schema objects and their JSON-Schema rendering.
// Purpose: Represent resolved types as a closed set of schema shapes.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! A [`TypeSchema`] is the resolved form of a [`crate::TypeDescriptor`]. Its
//! [`SchemaShape`] is one of Value, List, Union, or Enumeration; every
//! operation on schemas matches the shape exhaustively. Each schema also
//! records the [`Priority`] of the matcher that produced it, which orders
//! union members during decoding.
//!
//! This module owns rendering (`to_json`) and wire validation (`validate`).
//! Value conversion lives in [`crate::codec`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde_json::Map;
use serde_json::Value;

use crate::resolver::MatcherKind;
use crate::value::EnumDefinition;

// ============================================================================
// SECTION: Priority
// ============================================================================

/// Matcher priority; higher values are consulted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub i32);

impl Priority {
    /// Union matcher priority.
    pub const UNION: Self = Self(4);
    /// Literal enumeration matcher priority.
    pub const LITERAL: Self = Self(3);
    /// Labeled enumeration matcher priority.
    pub const LABELED: Self = Self(2);
    /// List matcher priority.
    pub const LIST: Self = Self(1);
    /// Value fallback priority.
    pub const VALUE: Self = Self(0);
    /// Priority of enumerations assigned manually rather than matched.
    pub const MANUAL: Self = Self(-1);
}

// ============================================================================
// SECTION: Value Kinds
// ============================================================================

/// JSON primitive type tag of a Value schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `integer`
    Integer,
    /// `number`
    Number,
    /// `string`
    String,
    /// `boolean`
    Boolean,
    /// `null`
    Null,
    /// `object`, used for every unrecognized type.
    Object,
}

impl ValueKind {
    /// Maps a declared type name to its primitive kind.
    #[must_use]
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "int" | "integer" | "i8" | "i16" | "i32" | "i64" | "isize" | "u8" | "u16" | "u32"
            | "u64" | "usize" => Self::Integer,
            "float" | "number" | "f32" | "f64" => Self::Number,
            "str" | "string" | "String" | "&str" | "char" => Self::String,
            "bool" | "boolean" => Self::Boolean,
            "None" | "NoneType" | "null" | "()" => Self::Null,
            _ => Self::Object,
        }
    }

    /// Returns the kind of a wire value.
    #[must_use]
    pub fn of_wire(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(number) if number.is_i64() => Self::Integer,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) | Value::Object(_) => Self::Object,
        }
    }

    /// Returns the JSON-Schema type tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Object => "object",
        }
    }

    /// Returns true when a wire value has this primitive kind.
    ///
    /// Integers are accepted where numbers are expected. Integers outside the
    /// `i64` range are not integers here, since they cannot decode losslessly.
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Integer => value.as_number().is_some_and(serde_json::Number::is_i64),
            Self::Number => value.is_number(),
            Self::String => value.is_string(),
            Self::Boolean => value.is_boolean(),
            Self::Null => value.is_null(),
            Self::Object => value.is_object(),
        }
    }
}

// ============================================================================
// SECTION: Enumerations
// ============================================================================

/// Where an enumeration's value set came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumSource {
    /// Inline literal values; wire and native forms coincide.
    Literal,
    /// Labels of a named constant set; decoding yields constants.
    Labeled(Arc<EnumDefinition>),
    /// Values assigned through `add_enum`.
    Manual,
}

/// Closed ordered set of wire values.
///
/// # Invariants
/// - `kind` is inferred from the first value and is `None` only when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    /// Origin of the value set.
    pub source: EnumSource,
    /// Accepted wire values, in declaration order.
    pub values: Vec<Value>,
    /// Inferred primitive type of the members.
    pub kind: Option<ValueKind>,
}

impl Enumeration {
    /// Builds an enumeration, inferring its primitive kind from the first value.
    #[must_use]
    pub fn new(source: EnumSource, values: Vec<Value>) -> Self {
        let kind = values.first().map(ValueKind::of_wire);
        Self {
            source,
            values,
            kind,
        }
    }

    /// Builds the enumeration of a labeled constant set.
    ///
    /// The accepted wire values are the labels, so the kind is inferred from
    /// the first label rather than from the constant's underlying value.
    #[must_use]
    pub fn labeled(definition: &Arc<EnumDefinition>) -> Self {
        let values = definition
            .members()
            .iter()
            .map(|member| Value::String(member.label.clone()))
            .collect();
        Self::new(EnumSource::Labeled(Arc::clone(definition)), values)
    }
}

// ============================================================================
// SECTION: Type Schema
// ============================================================================

/// Closed set of resolved schema shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaShape {
    /// Primitive value.
    Value(ValueKind),
    /// Homogeneous list with an optional element schema.
    List(Option<Box<TypeSchema>>),
    /// Union of member schemas, in declaration order.
    Union(Vec<TypeSchema>),
    /// Closed set of literal values.
    Enumeration(Enumeration),
}

/// Resolved schema for a type descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSchema {
    /// Priority of the producing matcher.
    priority: Priority,
    /// Producing matcher; `None` for manual enumerations.
    matcher: Option<MatcherKind>,
    /// Resolved shape.
    shape: SchemaShape,
}

impl TypeSchema {
    /// Creates a schema produced by a matcher.
    #[must_use]
    pub const fn matched(matcher: MatcherKind, priority: Priority, shape: SchemaShape) -> Self {
        Self {
            priority,
            matcher: Some(matcher),
            shape,
        }
    }

    /// Creates a manual enumeration schema from explicit values.
    #[must_use]
    pub fn manual_enum(values: Vec<Value>) -> Self {
        Self {
            priority: Priority::MANUAL,
            matcher: None,
            shape: SchemaShape::Enumeration(Enumeration::new(EnumSource::Manual, values)),
        }
    }

    /// Returns the priority of the producing matcher.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the producing matcher, if any.
    #[must_use]
    pub const fn matcher(&self) -> Option<MatcherKind> {
        self.matcher
    }

    /// Returns the resolved shape.
    #[must_use]
    pub const fn shape(&self) -> &SchemaShape {
        &self.shape
    }

    /// Returns true for a union containing a null member.
    #[must_use]
    pub fn is_nullable_union(&self) -> bool {
        match &self.shape {
            SchemaShape::Union(members) => members.iter().any(Self::is_null),
            SchemaShape::Value(_) | SchemaShape::List(_) | SchemaShape::Enumeration(_) => false,
        }
    }

    /// Returns true for the null Value schema.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self.shape, SchemaShape::Value(ValueKind::Null))
    }

    /// Renders the JSON-Schema fragment for this type.
    ///
    /// Keys without a value are omitted rather than emitted as null.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut fragment = Map::new();
        match &self.shape {
            SchemaShape::Value(kind) => {
                fragment.insert("type".to_string(), Value::from(kind.as_str()));
            }
            SchemaShape::List(items) => {
                fragment.insert("type".to_string(), Value::from("array"));
                if let Some(items) = items {
                    fragment.insert("items".to_string(), items.to_json());
                }
            }
            SchemaShape::Union(members) => {
                fragment.insert(
                    "anyOf".to_string(),
                    Value::Array(members.iter().map(Self::to_json).collect()),
                );
            }
            SchemaShape::Enumeration(enumeration) => {
                if let Some(kind) = enumeration.kind {
                    fragment.insert("type".to_string(), Value::from(kind.as_str()));
                }
                fragment.insert("enum".to_string(), Value::Array(enumeration.values.clone()));
            }
        }
        Value::Object(fragment)
    }

    /// Returns true when a wire value is acceptable for this type.
    ///
    /// Values accept by primitive kind, lists when every element validates,
    /// enumerations by membership, and unions when any member validates.
    #[must_use]
    pub fn validate(&self, value: &Value) -> bool {
        match &self.shape {
            SchemaShape::Value(kind) => kind.accepts(value),
            SchemaShape::List(items) => match value {
                Value::Array(elements) => items
                    .as_ref()
                    .is_none_or(|items| elements.iter().all(|element| items.validate(element))),
                _ => false,
            },
            SchemaShape::Union(members) => members.iter().any(|member| member.validate(value)),
            SchemaShape::Enumeration(enumeration) => {
                enumeration.values.iter().any(|member| same_member(member, value))
            }
        }
    }
}

/// Returns true when a wire value equals an enumeration member.
///
/// Numbers compare by numeric value, so `1` and `1.0` are the same member.
#[allow(clippy::float_cmp, reason = "Membership requires exact numeric equality.")]
fn same_member(member: &Value, value: &Value) -> bool {
    match (member, value) {
        (Value::Number(left), Value::Number(right)) => {
            left == right || left.as_f64().is_some_and(|left| right.as_f64() == Some(left))
        }
        _ => member == value,
    }
}
