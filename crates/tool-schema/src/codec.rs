// crates/tool-schema/src/codec.rs
// ============================================================================
// Module: Value Codec
// Description: Native/wire value conversion for resolved type schemas.
// Purpose: Convert argument values between handler and wire representations.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Encoding turns a native value into its wire-safe form; decoding turns a
//! wire value into the value a handler expects. Both operate on
//! [`NativeValue`] so a value that is already native passes through decoding
//! unchanged, which keeps direct native invocation working.
//!
//! Per shape:
//! - Value and literal enumerations: identity.
//! - List: element-wise through the element schema, identity without one.
//! - Labeled enumeration: constant to label, known label to constant.
//! - Union: decode takes the first member, by descending priority, whose
//!   result differs from the input; encode delegates to the first member
//!   whose matcher accepts the value's runtime type. Null passes through
//!   nullable unions untouched.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

use crate::descriptor::TypeDescriptor;
use crate::type_schema::EnumSource;
use crate::type_schema::SchemaShape;
use crate::type_schema::TypeSchema;
use crate::value::NativeValue;

// ============================================================================
// SECTION: Codec
// ============================================================================

impl TypeSchema {
    /// Converts a native value to its wire form.
    #[must_use]
    pub fn encode(&self, value: &NativeValue) -> NativeValue {
        match self.shape() {
            SchemaShape::Value(_) => value.clone(),
            SchemaShape::List(items) => map_list(items.as_deref(), value, Self::encode),
            SchemaShape::Enumeration(enumeration) => match (&enumeration.source, value) {
                (EnumSource::Labeled(_), NativeValue::Constant(constant)) => {
                    NativeValue::String(constant.label().to_string())
                }
                _ => value.clone(),
            },
            SchemaShape::Union(members) => {
                if value.is_null() && self.is_nullable_union() {
                    return NativeValue::Null;
                }
                by_priority(members)
                    .into_iter()
                    .find(|member| member.accepts_runtime(value))
                    .map_or_else(|| value.clone(), |member| member.encode(value))
            }
        }
    }

    /// Converts a wire value to the value a handler expects.
    ///
    /// Values that are not recognized are returned unchanged.
    #[must_use]
    pub fn decode(&self, value: &NativeValue) -> NativeValue {
        match self.shape() {
            SchemaShape::Value(_) => value.clone(),
            SchemaShape::List(items) => map_list(items.as_deref(), value, Self::decode),
            SchemaShape::Enumeration(enumeration) => match (&enumeration.source, value) {
                (EnumSource::Labeled(definition), NativeValue::String(label)) => {
                    definition.constant(label).map_or_else(|| value.clone(), NativeValue::Constant)
                }
                _ => value.clone(),
            },
            SchemaShape::Union(members) => {
                if value.is_null() && self.is_nullable_union() {
                    return NativeValue::Null;
                }
                by_priority(members)
                    .into_iter()
                    .map(|member| member.decode(value))
                    .find(|decoded| decoded != value)
                    .unwrap_or_else(|| value.clone())
            }
        }
    }

    /// Encodes a native value and lowers it to JSON.
    #[must_use]
    pub fn encode_wire(&self, value: &NativeValue) -> Value {
        self.encode(value).to_wire()
    }

    /// Lifts a JSON value and decodes it.
    #[must_use]
    pub fn decode_wire(&self, value: &Value) -> NativeValue {
        self.decode(&NativeValue::from(value))
    }

    /// Returns true when this schema's matcher claims the value's runtime type.
    ///
    /// Manual enumerations have no matcher and never claim a value.
    #[must_use]
    pub fn accepts_runtime(&self, value: &NativeValue) -> bool {
        self.matcher().is_some_and(|matcher| matcher.matches(&TypeDescriptor::of_native(value)))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Applies `convert` to every element of a list value.
///
/// Non-list values and lists without an element schema pass through.
fn map_list(
    items: Option<&TypeSchema>,
    value: &NativeValue,
    convert: fn(&TypeSchema, &NativeValue) -> NativeValue,
) -> NativeValue {
    match (items, value) {
        (Some(items), NativeValue::List(elements)) => {
            NativeValue::List(elements.iter().map(|element| convert(items, element)).collect())
        }
        _ => value.clone(),
    }
}

/// Orders union members by descending priority, keeping ties in declaration order.
fn by_priority(members: &[TypeSchema]) -> Vec<&TypeSchema> {
    let mut ordered: Vec<&TypeSchema> = members.iter().collect();
    ordered.sort_by(|left, right| right.priority().cmp(&left.priority()));
    ordered
}

#[cfg(test)]
mod tests;
