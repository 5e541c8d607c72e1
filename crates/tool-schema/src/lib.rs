// crates/tool-schema/src/lib.rs
// ============================================================================
// Module: Tool Schema Library
// Description: Type-directed call schemas for tool-enabled callables.
// Purpose: Derive wire schemas, convert argument values, and validate calls.
// Dependencies: serde, serde_json, thiserror, tool-schema-config
// ============================================================================

//! ## Overview
//! This crate derives a JSON-Schema-shaped call schema for a callable from its
//! signature metadata and documentation, converts argument values between
//! their native and wire forms, and validates incoming call requests against
//! the derived schema.
//!
//! The pipeline, leaves first:
//! - [`TypeResolver`] maps a [`TypeDescriptor`] to a [`TypeSchema`].
//! - [`TypeSchema`] encodes, decodes, validates, and renders values.
//! - [`ParameterSchema`] and [`FunctionSchema`] assemble per-callable schemas.
//! - [`ToolRegistry`] discovers tools and loads call requests through
//!   [`loader::load`].
//!
//! Invariants:
//! - Resolution is total for every non-empty descriptor.
//! - Schema rendering is deterministic for an unmodified schema and config.
//! - Loader failures are deterministic functions of the request and registry.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod codec;
pub mod descriptor;
pub mod docs;
pub mod function;
pub mod loader;
pub mod parameter;
pub mod registry;
pub mod resolver;
pub mod signature;
pub mod tool;
pub mod type_schema;
pub mod value;

// ============================================================================
// SECTION: Errors
// ============================================================================

use thiserror::Error;

/// Errors raised while building, mutating, or persisting schemas.
///
/// # Invariants
/// - Variants carry the offending name or a human-readable cause.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// `add_enum` named a parameter the schema does not contain.
    #[error("function '{function}' has no parameter named '{parameter}'")]
    UnknownParameter {
        /// Function name.
        function: String,
        /// Requested parameter name.
        parameter: String,
    },
    /// A tool with the same name is already registered.
    #[error("tool '{0}' is already registered")]
    DuplicateTool(String),
    /// No tool with the given name is registered.
    #[error("tool '{0}' is not registered")]
    UnknownTool(String),
    /// Serialization failure while writing schemas.
    #[error("serialization error: {0}")]
    Serialization(String),
    /// IO failure while writing schemas.
    #[error("io error: {0}")]
    Io(String),
}

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::FileLoadAuditSink;
pub use audit::LoadAuditEvent;
pub use audit::LoadAuditSink;
pub use audit::LoadOutcome;
pub use audit::NoopLoadAuditSink;
pub use audit::StderrLoadAuditSink;
pub use descriptor::Describe;
pub use descriptor::TypeDescriptor;
pub use docs::DocComment;
pub use function::FunctionSchema;
pub use loader::LoadError;
pub use loader::LoadOptions;
pub use loader::LoadedCall;
pub use parameter::ParameterSchema;
pub use registry::ToolRegistry;
pub use resolver::MatcherEntry;
pub use resolver::MatcherKind;
pub use resolver::TypeResolver;
pub use signature::ParameterKind;
pub use signature::ParameterSpec;
pub use signature::Signature;
pub use tool::Tool;
pub use tool::ToolArgs;
pub use tool::ToolBuilder;
pub use tool::ToolError;
pub use tool::ToolHandler;
pub use tool_schema_config::ConfigScope;
pub use tool_schema_config::ConfigSettings;
pub use tool_schema_config::Dialect;
pub use type_schema::EnumSource;
pub use type_schema::Enumeration;
pub use type_schema::Priority;
pub use type_schema::SchemaShape;
pub use type_schema::TypeSchema;
pub use type_schema::ValueKind;
pub use value::EnumConstant;
pub use value::EnumDefinition;
pub use value::EnumMember;
pub use value::NativeValue;
