// crates/tool-schema/src/function/tests.rs
// ============================================================================
// Module: Function Schema Unit Tests
// Description: Dialect rendering, requiredness, and configuration flags.
// Purpose: Pin the rendered shape of function schemas.
// Dependencies: tool-schema, tool-schema-config
// ============================================================================

//! ## Overview
//! Renders small signatures in every dialect and under each render-time
//! configuration flag.

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions are permitted."
)]

use std::sync::Arc;

use serde_json::json;
use tool_schema_config::ConfigScope;
use tool_schema_config::ConfigSettings;
use tool_schema_config::Dialect;

use crate::SchemaError;
use crate::descriptor::TypeDescriptor;
use crate::function::FunctionSchema;
use crate::signature::ParameterKind;
use crate::signature::ParameterSpec;
use crate::signature::Signature;

// ============================================================================
// SECTION: Helpers
// ============================================================================

const DOC: &str = "Adds a labeled number.\n\n:param a: first operand\n:param b: label text";

fn scope() -> Arc<ConfigScope> {
    ConfigScope::root().child(ConfigSettings::default())
}

fn signature() -> Signature {
    Signature::new()
        .param("a", TypeDescriptor::integer())
        .param("b", TypeDescriptor::string())
        .param_with_default("c", TypeDescriptor::boolean(), false)
}

fn schema(config: Arc<ConfigScope>, doc: Option<&str>) -> FunctionSchema {
    FunctionSchema::new("f", &signature(), config, doc)
}

// ============================================================================
// SECTION: Dialects
// ============================================================================

#[test]
fn compact_dialect_wraps_function_body() {
    let rendered = schema(scope(), None).to_json(Some(Dialect::Compact));
    assert_eq!(
        rendered,
        json!({
            "type": "function",
            "function": {
                "name": "f",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "a": {"type": "integer"},
                        "b": {"type": "string"},
                        "c": {"default": false, "type": "boolean"}
                    },
                    "required": ["a", "b"]
                }
            }
        })
    );
}

#[test]
fn flat_dialect_returns_body_directly() {
    let rendered = schema(scope(), None).to_json(Some(Dialect::Flat));
    assert_eq!(rendered["name"], json!("f"));
    assert_eq!(rendered["parameters"]["required"], json!(["a", "b"]));
    assert!(rendered.get("type").is_none());
}

#[test]
fn input_dialect_uses_input_schema_key() {
    let rendered = schema(scope(), None).to_json(Some(Dialect::Input));
    assert!(rendered.get("parameters").is_none());
    assert_eq!(rendered["input_schema"]["type"], json!("object"));
}

#[test]
fn configured_dialect_applies_when_none_requested() {
    let config = scope();
    config.set_dialect(Dialect::Input);
    let rendered = schema(config, None).to_json(None);
    assert!(rendered.get("input_schema").is_some());
}

#[test]
fn parameterless_function_omits_parameters_only_in_compact() {
    let config = scope();
    let empty = FunctionSchema::new("noop", &Signature::new(), config, None);
    assert_eq!(
        empty.to_json(Some(Dialect::Compact)),
        json!({"type": "function", "function": {"name": "noop"}})
    );
    assert_eq!(
        empty.to_json(Some(Dialect::Flat)),
        json!({"name": "noop", "parameters": {"type": "object", "properties": {}}})
    );
}

#[test]
fn list_default_is_rendered_with_item_type() {
    let signature = Signature::new().param_with_default(
        "x",
        TypeDescriptor::list_of(TypeDescriptor::integer()),
        vec![1, 2, 3],
    );
    let schema = FunctionSchema::new("g", &signature, scope(), None);
    let rendered = schema.to_json(Some(Dialect::Flat));
    assert_eq!(
        rendered["parameters"]["properties"]["x"],
        json!({"type": "array", "items": {"type": "integer"}, "default": [1, 2, 3]})
    );
    assert!(rendered["parameters"].get("required").is_none());
}

// ============================================================================
// SECTION: Documentation and Configuration
// ============================================================================

#[test]
fn descriptions_come_from_doc_text() {
    let rendered = schema(scope(), Some(DOC)).to_json(Some(Dialect::Flat));
    assert_eq!(rendered["description"], json!("Adds a labeled number."));
    assert_eq!(rendered["parameters"]["properties"]["a"]["description"], json!("first operand"));
    assert!(rendered["parameters"]["properties"]["c"].get("description").is_none());
}

#[test]
fn description_flags_suppress_descriptions() {
    let config = scope();
    let schema = schema(Arc::clone(&config), Some(DOC));
    config.set_ignore_function_description(true);
    config.set_ignore_parameter_descriptions(true);
    let rendered = schema.to_json(Some(Dialect::Flat));
    assert!(rendered.get("description").is_none());
    assert!(rendered["parameters"]["properties"]["a"].get("description").is_none());
}

#[test]
fn ignore_all_parameters_empties_properties() {
    let config = scope();
    config.set_ignore_all_parameters(true);
    let schema = schema(config, None);
    assert!(schema.to_json(Some(Dialect::Compact))["function"].get("parameters").is_none());
    assert_eq!(
        schema.to_json(Some(Dialect::Flat))["parameters"],
        json!({"type": "object", "properties": {}})
    );
}

#[test]
fn ignored_names_are_dropped_from_properties_and_required() {
    let config = scope();
    config.set_ignore_parameters(vec!["a".to_string()]);
    let schema = schema(config, None);
    assert_eq!(schema.required(), vec!["b"]);
    let rendered = schema.to_json(Some(Dialect::Flat));
    assert!(rendered["parameters"]["properties"].get("a").is_none());
}

#[test]
fn global_scope_change_reaches_existing_schema() {
    let global = ConfigScope::root();
    let schema = schema(global.child(ConfigSettings::default()), None);
    global.set_ignore_parameters(vec!["c".to_string()]);
    assert_eq!(schema.parameters().len(), 2);
}

#[test]
fn keyword_collector_and_untyped_parameters_are_excluded() {
    let signature = Signature::new()
        .param("a", TypeDescriptor::integer())
        .param("untyped", TypeDescriptor::Empty)
        .with(
            ParameterSpec::new("options", TypeDescriptor::named("dict"))
                .with_kind(ParameterKind::VariadicKeyword),
        );
    let schema = FunctionSchema::new("h", &signature, scope(), None);
    let names: Vec<&str> =
        schema.parameters().into_iter().map(|parameter| parameter.name()).collect();
    assert_eq!(names, vec!["a"]);
}

#[test]
fn rendering_is_idempotent() {
    let schema = schema(scope(), Some(DOC));
    assert_eq!(schema.to_json(None), schema.to_json(None));
}

// ============================================================================
// SECTION: Enum Overrides
// ============================================================================

#[test]
fn add_enum_replaces_parameter_type() {
    let mut schema = schema(scope(), None);
    let before = schema.parameter("b").unwrap().clone();
    schema.add_enum("b", vec![json!("x"), json!("y")]).unwrap();
    let rendered = schema.to_json(Some(Dialect::Flat));
    assert_eq!(
        rendered["parameters"]["properties"]["b"],
        json!({"type": "string", "enum": ["x", "y"]})
    );
    assert_eq!(before.to_json(), json!({"type": "string"}));
}

#[test]
fn add_enum_rejects_unknown_parameter() {
    let mut schema = schema(scope(), None);
    let err = schema.add_enum("missing", vec![json!(1)]).unwrap_err();
    assert!(matches!(err, SchemaError::UnknownParameter { .. }));
}
