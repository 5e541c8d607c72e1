// crates/tool-schema/src/loader.rs
// ============================================================================
// Module: Argument Loader
// Description: Parse and validate call requests against registered tools.
// Purpose: Turn a raw call request into a tool and a validated argument map.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! Loading is a fixed sequence over one request, each step either advancing
//! or rejecting with a [`LoadError`]:
//! 1. The request must carry a non-empty string `name`.
//! 2. The request must carry `arguments`, either an object or a string that
//!    parses to an object.
//! 3. The name must match a registered tool.
//! 4. Unless validation is disabled, every rendered parameter consumes its
//!    key: missing required keys and values failing the type check reject;
//!    leftover keys are dropped or, in strict mode, rejected together.
//!
//! The returned argument map is always a fresh copy owned by the caller.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

use crate::registry::ToolRegistry;
use crate::tool::Tool;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Rejections raised while loading a call request.
///
/// # Invariants
/// - Rejections are deterministic functions of the request and registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The request has no non-empty string `name`.
    #[error("request is missing a function name")]
    MissingName,
    /// The request has no `arguments` field, or it is null.
    #[error("request is missing the arguments field")]
    MissingArgumentsField,
    /// The arguments are unparseable or not a name-to-value mapping.
    #[error("malformed arguments: {0}")]
    MalformedArguments(String),
    /// No tool with the requested name is registered.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    /// A parameter without a default received no value.
    #[error("missing required argument '{0}'")]
    MissingRequiredArgument(String),
    /// A supplied value failed its parameter's type check.
    #[error("invalid value for argument '{name}': {value}")]
    InvalidArgumentValue {
        /// Parameter name.
        name: String,
        /// Offending value, rendered as JSON.
        value: String,
    },
    /// Undeclared arguments were supplied in strict mode.
    #[error("unexpected arguments: {}", .0.join(", "))]
    UnexpectedArgument(Vec<String>),
}

impl LoadError {
    /// Returns a stable label for the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingName => "missing_name",
            Self::MissingArgumentsField => "missing_arguments_field",
            Self::MalformedArguments(_) => "malformed_arguments",
            Self::UnknownFunction(_) => "unknown_function",
            Self::MissingRequiredArgument(_) => "missing_required_argument",
            Self::InvalidArgumentValue {
                ..
            } => "invalid_argument_value",
            Self::UnexpectedArgument(_) => "unexpected_argument",
        }
    }
}

// ============================================================================
// SECTION: Options and Results
// ============================================================================

/// Loader behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Validate arguments against the tool schema.
    pub validate: bool,
    /// Reject undeclared arguments instead of dropping them.
    pub strict: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            validate: true,
            strict: false,
        }
    }
}

impl LoadOptions {
    /// Returns default options with strict mode enabled.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            validate: true,
            strict: true,
        }
    }

    /// Returns options that skip validation entirely.
    #[must_use]
    pub const fn unvalidated() -> Self {
        Self {
            validate: false,
            strict: false,
        }
    }
}

/// A resolved tool and its loaded arguments.
#[derive(Debug)]
pub struct LoadedCall<'a> {
    /// Resolved tool.
    pub tool: &'a Tool,
    /// Validated arguments, or the raw parsed mapping without validation.
    pub arguments: Map<String, Value>,
    /// Undeclared argument names dropped in non-strict mode.
    pub dropped: Vec<String>,
}

// ============================================================================
// SECTION: Loader
// ============================================================================

/// Loads a call request against a registry.
///
/// # Errors
///
/// Returns [`LoadError`] describing the first failed step.
pub fn load<'a>(
    registry: &'a ToolRegistry,
    request: &Value,
    options: LoadOptions,
) -> Result<LoadedCall<'a>, LoadError> {
    let name = request_name(request)?;
    let arguments = request_arguments(request)?;
    let tool =
        registry.find_by_name(name).ok_or_else(|| LoadError::UnknownFunction(name.to_string()))?;
    if !options.validate {
        return Ok(LoadedCall {
            tool,
            arguments,
            dropped: Vec::new(),
        });
    }
    let (arguments, dropped) = validate_arguments(tool, arguments, options.strict)?;
    Ok(LoadedCall {
        tool,
        arguments,
        dropped,
    })
}

/// Returns the request name, or the name of a COMPACT-shaped request.
pub(crate) fn schema_request_name(request: &Value) -> Option<&str> {
    request
        .get("function")
        .and_then(|function| function.get("name"))
        .or_else(|| request.get("name"))
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
}

/// Extracts the non-empty request name.
fn request_name(request: &Value) -> Result<&str, LoadError> {
    request
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or(LoadError::MissingName)
}

/// Extracts a fresh copy of the argument mapping.
fn request_arguments(request: &Value) -> Result<Map<String, Value>, LoadError> {
    match request.get("arguments") {
        None | Some(Value::Null) => Err(LoadError::MissingArgumentsField),
        Some(Value::Object(map)) => Ok(map.clone()),
        Some(Value::String(text)) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(LoadError::MalformedArguments(format!(
                "expected an object, got {}",
                json_type_name(&other)
            ))),
            Err(err) => Err(LoadError::MalformedArguments(err.to_string())),
        },
        Some(other) => Err(LoadError::MalformedArguments(format!(
            "unsupported arguments container: {}",
            json_type_name(other)
        ))),
    }
}

/// Checks declared parameters against `arguments` and classifies the rest.
///
/// Leftover names keep their request order.
fn validate_arguments(
    tool: &Tool,
    arguments: Map<String, Value>,
    strict: bool,
) -> Result<(Map<String, Value>, Vec<String>), LoadError> {
    let parameters = tool.schema().parameters();
    let mut validated = Map::new();
    for parameter in &parameters {
        let Some(value) = arguments.get(parameter.name()) else {
            if parameter.is_required() {
                return Err(LoadError::MissingRequiredArgument(parameter.name().to_string()));
            }
            continue;
        };
        if !parameter.type_schema().validate(value) {
            return Err(LoadError::InvalidArgumentValue {
                name: parameter.name().to_string(),
                value: value.to_string(),
            });
        }
        validated.insert(parameter.name().to_string(), value.clone());
    }
    let leftover: Vec<String> = arguments
        .into_iter()
        .map(|(name, _)| name)
        .filter(|name| !parameters.iter().any(|parameter| parameter.name() == name))
        .collect();
    if strict && !leftover.is_empty() {
        return Err(LoadError::UnexpectedArgument(leftover));
    }
    Ok((validated, leftover))
}

/// Returns the JSON type name of a value for error messages.
const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
