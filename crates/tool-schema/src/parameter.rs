// crates/tool-schema/src/parameter.rs
// ============================================================================
// Module: Parameter Schemas
// Description: Schema of a single callable parameter.
// Purpose: Bind a parameter's name, default, and description to its type schema.
// Dependencies: serde_json, tool-schema-config
// ============================================================================

//! ## Overview
//! A [`ParameterSchema`] renders one entry of a function's `properties`
//! object. The rendered fragment merges, in order, the description, the
//! encoded default, and the type fragment.
//!
//! Replacing the type with an explicit enumeration produces a new schema
//! value; fragments rendered from the previous value are unaffected.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde_json::Map;
use serde_json::Value;
use tool_schema_config::ConfigScope;

use crate::docs::DocComment;
use crate::resolver::TypeResolver;
use crate::signature::ParameterSpec;
use crate::type_schema::TypeSchema;
use crate::value::NativeValue;

// ============================================================================
// SECTION: Parameter Schema
// ============================================================================

/// Schema for one callable parameter.
///
/// # Invariants
/// - `index` is the parameter's position in the full signature.
/// - Description suppression is read from `config` at render time.
#[derive(Debug, Clone)]
pub struct ParameterSchema {
    /// Parameter name.
    name: String,
    /// Position in the signature.
    index: usize,
    /// Resolved type.
    type_schema: TypeSchema,
    /// Native default value, when declared.
    default: Option<NativeValue>,
    /// Documented description, when present.
    description: Option<String>,
    /// Configuration scope of the owning callable.
    config: Arc<ConfigScope>,
}

impl ParameterSchema {
    /// Builds the schema for a declared parameter.
    ///
    /// Returns `None` when the parameter has no declared type.
    #[must_use]
    pub fn create(
        resolver: &TypeResolver,
        spec: &ParameterSpec,
        index: usize,
        config: &Arc<ConfigScope>,
        doc: Option<&DocComment>,
    ) -> Option<Self> {
        let type_schema = resolver.resolve(&spec.descriptor)?;
        Some(Self {
            name: spec.name.clone(),
            index,
            type_schema,
            default: spec.default.clone(),
            description: doc.and_then(|doc| doc.parameter(&spec.name)).map(ToString::to_string),
            config: Arc::clone(config),
        })
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameter position in the signature.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the resolved type.
    #[must_use]
    pub const fn type_schema(&self) -> &TypeSchema {
        &self.type_schema
    }

    /// Returns the native default value, if declared.
    #[must_use]
    pub const fn default_value(&self) -> Option<&NativeValue> {
        self.default.as_ref()
    }

    /// Returns the documented description, ignoring configuration.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns true when the parameter has no default.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.default.is_none()
    }

    /// Returns a copy of this schema whose type is the given enumeration.
    #[must_use]
    pub fn with_enum(&self, values: Vec<Value>) -> Self {
        Self {
            type_schema: TypeSchema::manual_enum(values),
            ..self.clone()
        }
    }

    /// Renders the JSON-Schema fragment for this parameter.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut fragment = Map::new();
        if let Some(description) = &self.description
            && !self.config.ignore_parameter_descriptions()
        {
            fragment.insert("description".to_string(), Value::String(description.clone()));
        }
        if let Some(default) = &self.default {
            fragment.insert("default".to_string(), self.type_schema.encode_wire(default));
        }
        if let Value::Object(type_fragment) = self.type_schema.to_json() {
            fragment.extend(type_fragment);
        }
        Value::Object(fragment)
    }
}
