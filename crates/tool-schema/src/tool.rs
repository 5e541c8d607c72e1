// crates/tool-schema/src/tool.rs
// ============================================================================
// Module: Tools
// Description: Tool-enabled callables with derived schemas.
// Purpose: Pair a handler with its schema and decode arguments before calls.
// Dependencies: serde_json, thiserror, tool-schema-config
// ============================================================================

//! ## Overview
//! A [`Tool`] owns a handler, its [`Signature`], and the [`FunctionSchema`]
//! derived from it. Invocation decodes every argument through the matching
//! parameter's type schema before the handler runs, so a handler sees
//! enumeration constants whether the caller passed labels from the wire or
//! constants directly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Map;
use serde_json::Value;
use thiserror::Error;
use tool_schema_config::ConfigScope;
use tool_schema_config::ConfigSettings;
use tool_schema_config::Dialect;

use crate::SchemaError;
use crate::function::FunctionSchema;
use crate::resolver::TypeResolver;
use crate::signature::ParameterKind;
use crate::signature::Signature;
use crate::value::NativeValue;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Handler invoked with decoded, bound arguments.
pub type ToolHandler = dyn Fn(&ToolArgs) -> Result<NativeValue, ToolError> + Send + Sync;

/// Errors raised while binding arguments or running a handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// A parameter without a default received no argument.
    #[error("missing argument '{0}'")]
    MissingArgument(String),
    /// A named argument matches no parameter.
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    /// A parameter received both a positional and a named argument.
    #[error("argument '{0}' given more than once")]
    DuplicateArgument(String),
    /// More positional arguments than positional parameters.
    #[error("expected at most {expected} positional arguments, got {given}")]
    TooManyPositional {
        /// Positional parameters available.
        expected: usize,
        /// Positional arguments supplied.
        given: usize,
    },
    /// The handler rejected an argument value.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Parameter name.
        name: String,
        /// Rejection reason.
        reason: String,
    },
    /// The handler failed.
    #[error("tool failed: {0}")]
    Failed(String),
}

/// Decoded arguments bound to parameter names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArgs {
    /// Bound values keyed by parameter name.
    values: BTreeMap<String, NativeValue>,
}

impl ToolArgs {
    /// Returns the value bound to a parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NativeValue> {
        self.values.get(name)
    }

    /// Returns the value bound to a parameter or a missing-argument error.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::MissingArgument`] when nothing is bound.
    pub fn require(&self, name: &str) -> Result<&NativeValue, ToolError> {
        self.values.get(name).ok_or_else(|| ToolError::MissingArgument(name.to_string()))
    }

    /// Iterates over bound values in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NativeValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the number of bound values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builder for a [`Tool`]; finished by [`crate::ToolRegistry::register`].
pub struct ToolBuilder {
    /// Tool name.
    name: String,
    /// Parameter metadata.
    signature: Signature,
    /// Raw documentation text.
    doc: Option<String>,
    /// Discovery tags.
    tags: Vec<String>,
    /// Per-tool configuration overrides.
    settings: ConfigSettings,
    /// Resolver used to build the schema.
    resolver: TypeResolver,
    /// Handler implementation.
    handler: Arc<ToolHandler>,
}

impl ToolBuilder {
    /// Sets the documentation text.
    #[must_use]
    pub fn doc(mut self, text: impl Into<String>) -> Self {
        self.doc = Some(text.into());
        self
    }

    /// Adds a discovery tag.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Sets per-tool configuration overrides.
    #[must_use]
    pub fn settings(mut self, settings: ConfigSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the resolver used to derive the schema.
    #[must_use]
    pub fn resolver(mut self, resolver: TypeResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Returns the tool name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builds the tool with a configuration scope inheriting from `parent`.
    #[must_use]
    pub fn build(self, parent: &Arc<ConfigScope>) -> Tool {
        let config = parent.child(self.settings);
        let schema = FunctionSchema::with_resolver(
            &self.resolver,
            self.name.clone(),
            &self.signature,
            config,
            self.doc.as_deref(),
        );
        Tool {
            name: self.name,
            tags: self.tags,
            signature: self.signature,
            schema,
            handler: self.handler,
        }
    }
}

// ============================================================================
// SECTION: Tool
// ============================================================================

/// A tool-enabled callable.
///
/// # Invariants
/// - `schema` was derived from `signature` and only changes through `add_enum`.
pub struct Tool {
    /// Tool name.
    name: String,
    /// Discovery tags.
    tags: Vec<String>,
    /// Parameter metadata.
    signature: Signature,
    /// Derived call schema.
    schema: FunctionSchema,
    /// Handler implementation.
    handler: Arc<ToolHandler>,
}

impl fmt::Debug for Tool {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Tool")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl Tool {
    /// Starts building a tool.
    #[must_use]
    pub fn builder<F>(name: impl Into<String>, signature: Signature, handler: F) -> ToolBuilder
    where
        F: Fn(&ToolArgs) -> Result<NativeValue, ToolError> + Send + Sync + 'static,
    {
        ToolBuilder {
            name: name.into(),
            signature,
            doc: None,
            tags: Vec::new(),
            settings: ConfigSettings::default(),
            resolver: TypeResolver::builtin(),
            handler: Arc::new(handler),
        }
    }

    /// Returns the tool name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the discovery tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns true when the tool carries the tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }

    /// Returns the parameter metadata.
    #[must_use]
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Returns the derived call schema.
    #[must_use]
    pub const fn schema(&self) -> &FunctionSchema {
        &self.schema
    }

    /// Returns the tool's configuration scope.
    #[must_use]
    pub const fn config(&self) -> &Arc<ConfigScope> {
        self.schema.config()
    }

    /// Renders the call schema.
    #[must_use]
    pub fn to_json(&self, dialect: Option<Dialect>) -> Value {
        self.schema.to_json(dialect)
    }

    /// Replaces a parameter's type with an explicit enumeration.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownParameter`] for an unknown parameter.
    pub fn add_enum(
        &mut self,
        parameter: &str,
        values: Vec<Value>,
    ) -> Result<&mut Self, SchemaError> {
        self.schema.add_enum(parameter, values)?;
        Ok(self)
    }

    /// Invokes the handler with positional and named arguments.
    ///
    /// Every argument is decoded through its parameter's type schema,
    /// positional ones by signature position. Unsupplied parameters with a
    /// default receive the default.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError`] when arguments cannot be bound or the handler fails.
    pub fn call(
        &self,
        positional: Vec<NativeValue>,
        named: BTreeMap<String, NativeValue>,
    ) -> Result<NativeValue, ToolError> {
        let args = self.bind(positional, named)?;
        (self.handler)(&args)
    }

    /// Invokes the handler with a validated wire argument mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError`] when arguments cannot be bound or the handler fails.
    pub fn call_wire(&self, arguments: &Map<String, Value>) -> Result<NativeValue, ToolError> {
        let named = arguments
            .iter()
            .map(|(name, value)| (name.clone(), NativeValue::from(value)))
            .collect();
        self.call(Vec::new(), named)
    }

    /// Decodes and binds arguments to parameter names.
    fn bind(
        &self,
        positional: Vec<NativeValue>,
        named: BTreeMap<String, NativeValue>,
    ) -> Result<ToolArgs, ToolError> {
        let mut values = BTreeMap::new();
        self.bind_positional(positional, &mut values)?;

        let collects_keywords = self
            .signature
            .parameters()
            .iter()
            .any(|parameter| parameter.kind == ParameterKind::VariadicKeyword);
        for (name, value) in named {
            if values.contains_key(&name) {
                return Err(ToolError::DuplicateArgument(name));
            }
            if self.signature.position(&name).is_none() && !collects_keywords {
                return Err(ToolError::UnexpectedArgument(name));
            }
            let decoded = self.decode_named(&name, &value);
            values.insert(name, decoded);
        }

        for parameter in self.signature.parameters() {
            if values.contains_key(&parameter.name) || parameter.kind != ParameterKind::Regular {
                continue;
            }
            match &parameter.default {
                Some(default) => {
                    values.insert(parameter.name.clone(), default.clone());
                }
                None => return Err(ToolError::MissingArgument(parameter.name.clone())),
            }
        }
        Ok(ToolArgs {
            values,
        })
    }

    /// Binds positional arguments in signature order.
    ///
    /// A variadic positional parameter collects the remaining arguments as a
    /// list, which is empty when none remain.
    fn bind_positional(
        &self,
        positional: Vec<NativeValue>,
        values: &mut BTreeMap<String, NativeValue>,
    ) -> Result<(), ToolError> {
        let given = positional.len();
        let mut arguments = positional.into_iter().enumerate();
        for parameter in self.signature.parameters() {
            match parameter.kind {
                ParameterKind::Regular => {
                    if let Some((index, value)) = arguments.next() {
                        values
                            .insert(parameter.name.clone(), self.decode_positional(index, &value));
                    }
                }
                ParameterKind::VariadicPositional => {
                    let rest = arguments
                        .by_ref()
                        .map(|(index, value)| self.decode_positional(index, &value))
                        .collect();
                    values.insert(parameter.name.clone(), NativeValue::List(rest));
                }
                ParameterKind::VariadicKeyword => {}
            }
        }
        if arguments.next().is_some() {
            let expected = self
                .signature
                .parameters()
                .iter()
                .filter(|parameter| parameter.kind == ParameterKind::Regular)
                .count();
            return Err(ToolError::TooManyPositional {
                expected,
                given,
            });
        }
        Ok(())
    }

    /// Decodes a positional argument through the parameter at that position.
    fn decode_positional(&self, index: usize, value: &NativeValue) -> NativeValue {
        self.schema
            .parameters()
            .into_iter()
            .find(|parameter| parameter.index() == index)
            .map_or_else(|| value.clone(), |parameter| parameter.type_schema().decode(value))
    }

    /// Decodes a named argument through the parameter with that name.
    fn decode_named(&self, name: &str, value: &NativeValue) -> NativeValue {
        self.schema
            .parameters()
            .into_iter()
            .find(|parameter| parameter.name() == name)
            .map_or_else(|| value.clone(), |parameter| parameter.type_schema().decode(value))
    }
}
