// crates/tool-schema/src/descriptor.rs
// ============================================================================
// Module: Type Descriptors
// Description: Declared parameter types prior to schema resolution.
// Purpose: Provide the input vocabulary for the type schema resolver.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! A [`TypeDescriptor`] is the declared type of a parameter as reported by
//! the signature metadata provider. Descriptors are immutable; the resolver
//! turns them into [`crate::TypeSchema`] values.
//!
//! Rust types can supply their own descriptor through [`Describe`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde_json::Value;

use crate::value::EnumDefinition;
use crate::value::NativeValue;

// ============================================================================
// SECTION: Descriptor
// ============================================================================

/// Declared type of a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// No declared type. Parameters with this descriptor are left out of schemas.
    Empty,
    /// A named scalar type such as `int`, `str`, or a type the engine does not know.
    Named(String),
    /// Homogeneous ordered container with an optional element type.
    List(Option<Box<TypeDescriptor>>),
    /// Union of alternatives.
    Union(Vec<TypeDescriptor>),
    /// Fixed inline set of literal values.
    Literal(Vec<Value>),
    /// Reference to a closed, named set of constants.
    Enumeration(Arc<EnumDefinition>),
}

impl TypeDescriptor {
    /// Returns a named descriptor.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Returns the integer descriptor.
    #[must_use]
    pub fn integer() -> Self {
        Self::named("int")
    }

    /// Returns the number descriptor.
    #[must_use]
    pub fn number() -> Self {
        Self::named("float")
    }

    /// Returns the string descriptor.
    #[must_use]
    pub fn string() -> Self {
        Self::named("str")
    }

    /// Returns the boolean descriptor.
    #[must_use]
    pub fn boolean() -> Self {
        Self::named("bool")
    }

    /// Returns the null descriptor.
    #[must_use]
    pub fn null() -> Self {
        Self::named("None")
    }

    /// Returns a list descriptor without an element type.
    #[must_use]
    pub const fn list() -> Self {
        Self::List(None)
    }

    /// Returns a list descriptor with the given element type.
    #[must_use]
    pub fn list_of(item: Self) -> Self {
        Self::List(Some(Box::new(item)))
    }

    /// Returns a literal descriptor.
    #[must_use]
    pub fn literal(values: impl IntoIterator<Item = Value>) -> Self {
        Self::Literal(values.into_iter().collect())
    }

    /// Returns an enumeration descriptor.
    #[must_use]
    pub const fn enumeration(definition: Arc<EnumDefinition>) -> Self {
        Self::Enumeration(definition)
    }

    /// Returns a union descriptor.
    ///
    /// Nested unions are flattened and duplicates removed, keeping first
    /// occurrence order. A single remaining alternative is returned as is and
    /// no alternatives yields [`TypeDescriptor::Empty`].
    #[must_use]
    pub fn union(members: impl IntoIterator<Item = Self>) -> Self {
        let mut flattened: Vec<Self> = Vec::new();
        for member in members {
            let nested = match member {
                Self::Union(inner) => inner,
                other => vec![other],
            };
            for alternative in nested {
                if !flattened.contains(&alternative) {
                    flattened.push(alternative);
                }
            }
        }
        match flattened.len() {
            0 => Self::Empty,
            1 => flattened.pop().unwrap_or(Self::Empty),
            _ => Self::Union(flattened),
        }
    }

    /// Returns the optional descriptor: a union of `inner` and null.
    #[must_use]
    pub fn optional(inner: Self) -> Self {
        Self::union([inner, Self::null()])
    }

    /// Returns true for [`TypeDescriptor::Empty`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the descriptor of a native value's runtime type.
    #[must_use]
    pub fn of_native(value: &NativeValue) -> Self {
        match value {
            NativeValue::Null => Self::null(),
            NativeValue::Bool(_) => Self::boolean(),
            NativeValue::Integer(_) => Self::integer(),
            NativeValue::Number(_) => Self::number(),
            NativeValue::String(_) => Self::string(),
            NativeValue::List(_) => Self::list(),
            NativeValue::Object(_) => Self::named("dict"),
            NativeValue::Constant(constant) => {
                Self::Enumeration(Arc::clone(constant.definition()))
            }
        }
    }
}

// ============================================================================
// SECTION: Describe
// ============================================================================

/// Rust types that know their own descriptor.
pub trait Describe {
    /// Returns the descriptor for `Self`.
    fn describe() -> TypeDescriptor;
}

/// Implements [`Describe`] for scalar types under a fixed type name.
macro_rules! describe_named {
    ($name:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe() -> TypeDescriptor {
                    TypeDescriptor::named($name)
                }
            }
        )+
    };
}

describe_named!("int" => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
describe_named!("float" => f32, f64);
describe_named!("str" => String, &str, char);
describe_named!("bool" => bool);
describe_named!("None" => ());

impl<T: Describe> Describe for Vec<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::list_of(T::describe())
    }
}

impl<T: Describe> Describe for Option<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::optional(T::describe())
    }
}
