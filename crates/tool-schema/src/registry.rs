// crates/tool-schema/src/registry.rs
// ============================================================================
// Module: Tool Registry
// Description: Discovery, schema listing, persistence, and request loading.
// Purpose: Own the tools of a namespace and the configuration they inherit.
// Dependencies: serde_json, tool-schema-config
// ============================================================================

//! ## Overview
//! A [`ToolRegistry`] is the namespace tools are registered into. It owns the
//! global configuration scope every tool scope inherits from, keeps tools in
//! registration order, and records one audit event per [`ToolRegistry::load`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use serde_json::Value;
use tool_schema_config::ConfigScope;
use tool_schema_config::Dialect;

use crate::SchemaError;
use crate::audit::LoadAuditEvent;
use crate::audit::LoadAuditSink;
use crate::audit::NoopLoadAuditSink;
use crate::loader;
use crate::loader::LoadError;
use crate::loader::LoadOptions;
use crate::loader::LoadedCall;
use crate::tool::Tool;
use crate::tool::ToolBuilder;

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Registered tools of one namespace.
///
/// # Invariants
/// - Tool names are unique.
/// - Tools keep registration order.
pub struct ToolRegistry {
    /// Global scope inherited by every tool scope.
    config: Arc<ConfigScope>,
    /// Registered tools.
    tools: Vec<Tool>,
    /// Load audit sink.
    audit: Arc<dyn LoadAuditSink>,
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ToolRegistry")
            .field("config", &self.config)
            .field("tools", &self.tools)
            .finish_non_exhaustive()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    /// Creates an empty registry with a default global scope.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ConfigScope::root())
    }

    /// Creates an empty registry inheriting from the given global scope.
    #[must_use]
    pub fn with_config(config: Arc<ConfigScope>) -> Self {
        Self {
            config,
            tools: Vec::new(),
            audit: Arc::new(NoopLoadAuditSink),
        }
    }

    /// Replaces the load audit sink.
    #[must_use]
    pub fn with_audit_sink(mut self, audit: Arc<dyn LoadAuditSink>) -> Self {
        self.audit = audit;
        self
    }

    /// Returns the global configuration scope.
    #[must_use]
    pub const fn config(&self) -> &Arc<ConfigScope> {
        &self.config
    }

    /// Builds and registers a tool.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateTool`] when the name is taken.
    pub fn register(&mut self, builder: ToolBuilder) -> Result<&mut Tool, SchemaError> {
        let name = builder.name().to_string();
        if self.find_by_name(&name).is_some() {
            return Err(SchemaError::DuplicateTool(name));
        }
        self.tools.push(builder.build(&self.config));
        self.tools.last_mut().ok_or(SchemaError::UnknownTool(name))
    }

    /// Replaces a tool parameter's type with an explicit enumeration.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownTool`] or [`SchemaError::UnknownParameter`].
    pub fn add_enum(
        &mut self,
        tool: &str,
        parameter: &str,
        values: Vec<Value>,
    ) -> Result<(), SchemaError> {
        self.tools
            .iter_mut()
            .find(|candidate| candidate.name() == tool)
            .ok_or_else(|| SchemaError::UnknownTool(tool.to_string()))?
            .add_enum(parameter, values)?;
        Ok(())
    }

    /// Returns all tools in registration order.
    #[must_use]
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Returns the tool with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.name() == name)
    }

    /// Returns the tools carrying a tag, in registration order.
    #[must_use]
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Tool> {
        self.tools.iter().filter(|tool| tool.has_tag(tag)).collect()
    }

    /// Renders every tool schema.
    #[must_use]
    pub fn schemas(&self, dialect: Option<Dialect>) -> Vec<Value> {
        self.tools.iter().map(|tool| tool.to_json(dialect)).collect()
    }

    /// Renders the schemas of tools carrying a tag.
    #[must_use]
    pub fn schemas_by_tag(&self, tag: &str, dialect: Option<Dialect>) -> Vec<Value> {
        self.find_by_tag(tag).into_iter().map(|tool| tool.to_json(dialect)).collect()
    }

    /// Renders the schema of one tool.
    #[must_use]
    pub fn schema_by_name(&self, name: &str, dialect: Option<Dialect>) -> Option<Value> {
        self.find_by_name(name).map(|tool| tool.to_json(dialect))
    }

    /// Writes every tool schema as one pretty-printed JSON list.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Serialization`] or [`SchemaError::Io`].
    pub fn save_schemas<W: Write>(
        &self,
        mut writer: W,
        dialect: Option<Dialect>,
    ) -> Result<(), SchemaError> {
        let schemas = Value::Array(self.schemas(dialect));
        serde_json::to_writer_pretty(&mut writer, &schemas)
            .map_err(|err| SchemaError::Serialization(err.to_string()))?;
        writer.write_all(b"\n").map_err(|err| SchemaError::Io(err.to_string()))?;
        writer.flush().map_err(|err| SchemaError::Io(err.to_string()))
    }

    /// Resolves a schema-only request to its tool.
    ///
    /// Accepts `{function: {name}}` as well as `{name}`; an unknown or absent
    /// name yields `None`.
    #[must_use]
    pub fn resolve_schema_request(&self, request: &Value) -> Option<&Tool> {
        loader::schema_request_name(request).and_then(|name| self.find_by_name(name))
    }

    /// Loads a call request and records the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when the request is rejected.
    pub fn load(&self, request: &Value, options: LoadOptions) -> Result<LoadedCall<'_>, LoadError> {
        let result = loader::load(self, request, options);
        let event = match &result {
            Ok(call) => LoadAuditEvent::accepted(call.tool.name(), call.dropped.clone()),
            Err(err) => LoadAuditEvent::rejected(
                request.get("name").and_then(Value::as_str).map(ToString::to_string),
                err.kind(),
            ),
        };
        self.audit.record(&event);
        result
    }
}
