// crates/tool-schema/src/function.rs
// ============================================================================
// Module: Function Schemas
// Description: Full call schema of a callable in one of three dialects.
// Purpose: Aggregate parameter schemas into a wire-ready tool definition.
// Dependencies: serde_json, tool-schema-config
// ============================================================================

//! ## Overview
//! A [`FunctionSchema`] is built once per callable from its [`Signature`],
//! its configuration scope, and its documentation text. Rendering reads the
//! scope on every call, so configuration changes made after construction are
//! reflected in later renders.
//!
//! Dialects:
//! - [`Dialect::Compact`]: `{type: "function", function: {...}}`; the
//!   parameter object is omitted when there are no parameters.
//! - [`Dialect::Flat`]: the function body alone; `parameters` always present.
//! - [`Dialect::Input`]: as Flat, with the parameter object under
//!   `input_schema`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde_json::Map;
use serde_json::Value;
use serde_json::json;
use tool_schema_config::ConfigScope;
use tool_schema_config::Dialect;

use crate::SchemaError;
use crate::docs::DocComment;
use crate::parameter::ParameterSchema;
use crate::resolver::TypeResolver;
use crate::signature::ParameterKind;
use crate::signature::Signature;

// ============================================================================
// SECTION: Function Schema
// ============================================================================

/// Call schema for a callable.
///
/// # Invariants
/// - `parameters` keeps declaration order and holds only typed parameters.
/// - Keyword-collecting parameters are never included.
#[derive(Debug, Clone)]
pub struct FunctionSchema {
    /// Callable name.
    name: String,
    /// Parsed documentation, when the callable has any.
    doc: Option<DocComment>,
    /// Typed parameters, including ones ignored by configuration.
    parameters: Vec<ParameterSchema>,
    /// Configuration scope of the callable.
    config: Arc<ConfigScope>,
}

impl FunctionSchema {
    /// Builds a schema with the built-in resolver.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        signature: &Signature,
        config: Arc<ConfigScope>,
        doc: Option<&str>,
    ) -> Self {
        Self::with_resolver(&TypeResolver::builtin(), name, signature, config, doc)
    }

    /// Builds a schema with an explicit resolver.
    #[must_use]
    pub fn with_resolver(
        resolver: &TypeResolver,
        name: impl Into<String>,
        signature: &Signature,
        config: Arc<ConfigScope>,
        doc: Option<&str>,
    ) -> Self {
        let doc = doc.filter(|text| !text.is_empty()).map(DocComment::parse);
        let parameters = signature
            .parameters()
            .iter()
            .enumerate()
            .filter(|(_, spec)| spec.kind != ParameterKind::VariadicKeyword)
            .filter_map(|(index, spec)| {
                ParameterSchema::create(resolver, spec, index, &config, doc.as_ref())
            })
            .collect();
        Self {
            name: name.into(),
            doc,
            parameters,
            config,
        }
    }

    /// Returns the callable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the configuration scope.
    #[must_use]
    pub const fn config(&self) -> &Arc<ConfigScope> {
        &self.config
    }

    /// Returns every typed parameter, including configured-out ones.
    #[must_use]
    pub fn all_parameters(&self) -> &[ParameterSchema] {
        &self.parameters
    }

    /// Returns the parameters that appear in rendered schemas.
    #[must_use]
    pub fn parameters(&self) -> Vec<&ParameterSchema> {
        if self.config.ignore_all_parameters() {
            return Vec::new();
        }
        let ignored = self.config.ignore_parameters();
        self.parameters
            .iter()
            .filter(|parameter| !ignored.iter().any(|name| name == parameter.name()))
            .collect()
    }

    /// Returns a typed parameter by name, including configured-out ones.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&ParameterSchema> {
        self.parameters.iter().find(|parameter| parameter.name() == name)
    }

    /// Returns the function description unless configuration suppresses it.
    ///
    /// A documented callable with only parameter tags yields an empty string.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        if self.config.ignore_function_description() {
            return None;
        }
        self.doc.as_ref().map(DocComment::description)
    }

    /// Returns the names of rendered parameters without a default, in order.
    #[must_use]
    pub fn required(&self) -> Vec<&str> {
        self.parameters()
            .into_iter()
            .filter(|parameter| parameter.is_required())
            .map(ParameterSchema::name)
            .collect()
    }

    /// Replaces a parameter's type with an explicit enumeration.
    ///
    /// The parameter entry is replaced by a new [`ParameterSchema`]; values
    /// previously borrowed or rendered are unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownParameter`] when no typed parameter has
    /// the given name.
    pub fn add_enum(&mut self, name: &str, values: Vec<Value>) -> Result<&mut Self, SchemaError> {
        let slot = self
            .parameters
            .iter_mut()
            .find(|parameter| parameter.name() == name)
            .ok_or_else(|| SchemaError::UnknownParameter {
                function: self.name.clone(),
                parameter: name.to_string(),
            })?;
        *slot = slot.with_enum(values);
        Ok(self)
    }

    /// Renders the schema in the given dialect, or the configured one.
    #[must_use]
    pub fn to_json(&self, dialect: Option<Dialect>) -> Value {
        let dialect = dialect.unwrap_or_else(|| self.config.dialect());
        match dialect {
            Dialect::Compact => json!({
                "type": "function",
                "function": self.function_body(dialect),
            }),
            Dialect::Flat | Dialect::Input => self.function_body(dialect),
        }
    }

    /// Renders the dialect-specific function body.
    fn function_body(&self, dialect: Dialect) -> Value {
        let mut body = Map::new();
        body.insert("name".to_string(), Value::String(self.name.clone()));
        let parameters = self.parameters();
        if !parameters.is_empty() || dialect != Dialect::Compact {
            let key = if dialect == Dialect::Input { "input_schema" } else { "parameters" };
            body.insert(key.to_string(), parameters_object(&parameters));
        }
        if let Some(description) = self.description() {
            body.insert("description".to_string(), Value::String(description.to_string()));
        }
        Value::Object(body)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Renders the `{type: "object", properties, required?}` parameter object.
fn parameters_object(parameters: &[&ParameterSchema]) -> Value {
    let properties: Map<String, Value> = parameters
        .iter()
        .map(|parameter| (parameter.name().to_string(), parameter.to_json()))
        .collect();
    let required: Vec<Value> = parameters
        .iter()
        .filter(|parameter| parameter.is_required())
        .map(|parameter| Value::String(parameter.name().to_string()))
        .collect();
    let mut object = Map::new();
    object.insert("type".to_string(), Value::from("object"));
    object.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        object.insert("required".to_string(), Value::Array(required));
    }
    Value::Object(object)
}

#[cfg(test)]
mod tests;
