// crates/tool-schema/src/signature.rs
// ============================================================================
// Module: Signature Metadata
// Description: Ordered parameter metadata for a callable.
// Purpose: Describe callables to the schema builder without reflection.
// Dependencies: std
// ============================================================================

//! ## Overview
//! A [`Signature`] lists a callable's parameters in declaration order with
//! their declared type and optional default. Return types are not part of
//! the signature. A default of [`NativeValue::Null`] is a real default; no
//! default at all is `None`.

use crate::descriptor::Describe;
use crate::descriptor::TypeDescriptor;
use crate::value::NativeValue;

/// How a parameter binds arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParameterKind {
    /// Ordinary positional-or-named parameter.
    #[default]
    Regular,
    /// Collects surplus positional arguments.
    VariadicPositional,
    /// Collects surplus named arguments; never part of a schema.
    VariadicKeyword,
}

/// One declared parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    /// Parameter name.
    pub name: String,
    /// Declared type.
    pub descriptor: TypeDescriptor,
    /// Default value, when the parameter has one.
    pub default: Option<NativeValue>,
    /// Binding kind.
    pub kind: ParameterKind,
}

impl ParameterSpec {
    /// Creates a regular parameter without a default.
    #[must_use]
    pub fn new(name: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            descriptor,
            default: None,
            kind: ParameterKind::Regular,
        }
    }

    /// Returns the parameter with a default value.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<NativeValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Returns the parameter with a different binding kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: ParameterKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Ordered parameter list of a callable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signature {
    /// Parameters in declaration order.
    parameters: Vec<ParameterSpec>,
}

impl Signature {
    /// Creates an empty signature.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            parameters: Vec::new(),
        }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Appends a required parameter.
    #[must_use]
    pub fn param(self, name: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        self.with(ParameterSpec::new(name, descriptor))
    }

    /// Appends a parameter with a default value.
    #[must_use]
    pub fn param_with_default(
        self,
        name: impl Into<String>,
        descriptor: TypeDescriptor,
        default: impl Into<NativeValue>,
    ) -> Self {
        self.with(ParameterSpec::new(name, descriptor).with_default(default))
    }

    /// Appends a required parameter typed by a Rust type.
    #[must_use]
    pub fn typed<T: Describe>(self, name: impl Into<String>) -> Self {
        self.param(name, T::describe())
    }

    /// Returns the parameters in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    /// Returns the position of a parameter by name.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.parameters.iter().position(|parameter| parameter.name == name)
    }
}
