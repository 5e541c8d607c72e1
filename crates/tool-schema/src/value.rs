// crates/tool-schema/src/value.rs
// ============================================================================
// Module: Native Values
// Description: In-process argument values and labeled enumeration constants.
// Purpose: Distinguish native values from their JSON wire representation.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! [`NativeValue`] is the value a tool handler observes. It mirrors JSON with
//! one extra case: [`EnumConstant`], a member of a closed, named set of
//! constants. Wire values (`serde_json::Value`) lift into native values
//! without loss; lowering a native value renders constants by label.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde_json::Map;
use serde_json::Number;
use serde_json::Value;

// ============================================================================
// SECTION: Enumerations
// ============================================================================

/// One labeled constant declared by an [`EnumDefinition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    /// Constant label, used as the wire form.
    pub label: String,
    /// Underlying value of the constant.
    pub value: Value,
}

/// A closed, ordered set of labeled constants.
///
/// # Invariants
/// - Member order is declaration order and is preserved in rendered schemas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition {
    /// Enumeration name.
    name: String,
    /// Declared members.
    members: Vec<EnumMember>,
}

impl EnumDefinition {
    /// Creates a shared enumeration definition.
    #[must_use]
    pub fn new<L: Into<String>>(
        name: impl Into<String>,
        members: impl IntoIterator<Item = (L, Value)>,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            members: members
                .into_iter()
                .map(|(label, value)| EnumMember {
                    label: label.into(),
                    value,
                })
                .collect(),
        })
    }

    /// Returns the enumeration name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared members in order.
    #[must_use]
    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }

    /// Returns true when `label` names a member.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.members.iter().any(|member| member.label == label)
    }

    /// Returns the constant with the given label.
    #[must_use]
    pub fn constant(self: &Arc<Self>, label: &str) -> Option<EnumConstant> {
        self.members.iter().find(|member| member.label == label).map(|member| EnumConstant {
            definition: Arc::clone(self),
            label: member.label.clone(),
            value: member.value.clone(),
        })
    }
}

/// A labeled constant bound to its enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstant {
    /// Owning enumeration.
    definition: Arc<EnumDefinition>,
    /// Member label.
    label: String,
    /// Member value.
    value: Value,
}

impl EnumConstant {
    /// Returns the owning enumeration.
    #[must_use]
    pub const fn definition(&self) -> &Arc<EnumDefinition> {
        &self.definition
    }

    /// Returns the constant label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }
}

// ============================================================================
// SECTION: Native Values
// ============================================================================

/// Native argument value.
///
/// # Invariants
/// - Integral JSON numbers that fit `i64` lift to [`NativeValue::Integer`];
///   every other number lifts to [`NativeValue::Number`].
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    /// Null / absent value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integral number.
    Integer(i64),
    /// Floating point number.
    Number(f64),
    /// String value.
    String(String),
    /// Ordered list of values.
    List(Vec<NativeValue>),
    /// Opaque JSON object.
    Object(Map<String, Value>),
    /// Labeled enumeration constant.
    Constant(EnumConstant),
}

impl NativeValue {
    /// Lowers the value to its wire form, rendering constants by label.
    #[must_use]
    pub fn to_wire(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(value) => Value::Bool(*value),
            Self::Integer(value) => Value::Number((*value).into()),
            Self::Number(value) => Number::from_f64(*value).map_or(Value::Null, Value::Number),
            Self::String(value) => Value::String(value.clone()),
            Self::List(items) => Value::Array(items.iter().map(Self::to_wire).collect()),
            Self::Object(map) => Value::Object(map.clone()),
            Self::Constant(constant) => Value::String(constant.label.clone()),
        }
    }

    /// Returns the constant when the value is one.
    #[must_use]
    pub const fn as_constant(&self) -> Option<&EnumConstant> {
        match self {
            Self::Constant(constant) => Some(constant),
            _ => None,
        }
    }

    /// Returns the string slice when the value is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the integer when the value is integral.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the boolean when the value is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the items when the value is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns true for [`NativeValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&Value> for NativeValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(*flag),
            Value::Number(number) => number
                .as_i64()
                .map_or_else(|| number.as_f64().map_or(Self::Null, Self::Number), Self::Integer),
            Value::String(text) => Self::String(text.clone()),
            Value::Array(items) => Self::List(items.iter().map(Self::from).collect()),
            Value::Object(map) => Self::Object(map.clone()),
        }
    }
}

impl From<Value> for NativeValue {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl From<bool> for NativeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for NativeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for NativeValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for NativeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for NativeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for NativeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<EnumConstant> for NativeValue {
    fn from(value: EnumConstant) -> Self {
        Self::Constant(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for NativeValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for NativeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
