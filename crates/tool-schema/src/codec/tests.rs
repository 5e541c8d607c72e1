// crates/tool-schema/src/codec/tests.rs
// ============================================================================
// Module: Value Codec Unit Tests
// Description: Encode/decode behavior per schema shape.
// Purpose: Pin label conversion, list mapping, and union member selection.
// Dependencies: tool-schema
// ============================================================================

//! ## Overview
//! Exercises the codec on schemas produced by the built-in resolver.

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

use crate::descriptor::TypeDescriptor;
use crate::resolver::TypeResolver;
use crate::type_schema::TypeSchema;
use crate::value::EnumDefinition;
use crate::value::NativeValue;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn color() -> Arc<EnumDefinition> {
    EnumDefinition::new("Color", [("RED", json!(1)), ("GREEN", json!(2))])
}

fn resolve(descriptor: &TypeDescriptor) -> TypeSchema {
    TypeResolver::builtin().resolve(descriptor).unwrap()
}

fn constant(definition: &Arc<EnumDefinition>, label: &str) -> NativeValue {
    NativeValue::Constant(definition.constant(label).unwrap())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn value_schema_is_identity() {
    let schema = resolve(&TypeDescriptor::integer());
    assert_eq!(schema.encode(&NativeValue::Integer(7)), NativeValue::Integer(7));
    assert_eq!(schema.decode(&NativeValue::from("x")), NativeValue::from("x"));
}

#[test]
fn labeled_enum_converts_between_constant_and_label() {
    let definition = color();
    let schema = resolve(&TypeDescriptor::enumeration(Arc::clone(&definition)));
    let red = constant(&definition, "RED");
    assert_eq!(schema.encode(&red), NativeValue::from("RED"));
    assert_eq!(schema.decode(&NativeValue::from("RED")), red);
    assert_eq!(schema.decode(&red), red);
    assert_eq!(schema.encode_wire(&red), json!("RED"));
}

#[test]
fn labeled_enum_passes_unknown_values_through() {
    let schema = resolve(&TypeDescriptor::enumeration(color()));
    assert_eq!(schema.decode(&NativeValue::from("BLUE")), NativeValue::from("BLUE"));
    assert_eq!(schema.decode(&NativeValue::Integer(1)), NativeValue::Integer(1));
}

#[test]
fn literal_enum_is_identity() {
    let schema = resolve(&TypeDescriptor::literal([json!("a"), json!("b")]));
    assert_eq!(schema.decode(&NativeValue::from("a")), NativeValue::from("a"));
    assert_eq!(schema.encode(&NativeValue::from("b")), NativeValue::from("b"));
}

#[test]
fn list_maps_elements_through_item_schema() {
    let definition = color();
    let schema = resolve(&TypeDescriptor::list_of(TypeDescriptor::enumeration(Arc::clone(
        &definition,
    ))));
    let wire = NativeValue::from(vec!["GREEN", "RED"]);
    let native =
        NativeValue::List(vec![constant(&definition, "GREEN"), constant(&definition, "RED")]);
    assert_eq!(schema.decode(&wire), native);
    assert_eq!(schema.encode(&native), wire);
}

#[test]
fn untyped_list_is_identity() {
    let schema = resolve(&TypeDescriptor::list());
    let value = NativeValue::from(vec![1, 2]);
    assert_eq!(schema.decode(&value), value);
}

#[test]
fn union_decode_prefers_member_that_changes_value() {
    let definition = color();
    let schema = resolve(&TypeDescriptor::union([
        TypeDescriptor::integer(),
        TypeDescriptor::enumeration(Arc::clone(&definition)),
    ]));
    assert_eq!(schema.decode(&NativeValue::from("GREEN")), constant(&definition, "GREEN"));
    assert_eq!(schema.decode(&NativeValue::Integer(3)), NativeValue::Integer(3));
}

#[test]
fn union_encode_selects_member_by_runtime_type() {
    let definition = color();
    let schema = resolve(&TypeDescriptor::union([
        TypeDescriptor::string(),
        TypeDescriptor::enumeration(Arc::clone(&definition)),
    ]));
    assert_eq!(schema.encode(&constant(&definition, "RED")), NativeValue::from("RED"));
    assert_eq!(schema.encode(&NativeValue::from("plain")), NativeValue::from("plain"));
}

#[test]
fn union_of_list_and_enum_decodes_both_forms() {
    let definition = color();
    let schema = resolve(&TypeDescriptor::union([
        TypeDescriptor::list_of(TypeDescriptor::enumeration(Arc::clone(&definition))),
        TypeDescriptor::enumeration(Arc::clone(&definition)),
    ]));
    assert_eq!(schema.decode(&NativeValue::from("RED")), constant(&definition, "RED"));
    assert_eq!(
        schema.decode(&NativeValue::from(vec!["RED"])),
        NativeValue::List(vec![constant(&definition, "RED")])
    );
}

#[test]
fn nullable_union_passes_null_through() {
    let schema = resolve(&TypeDescriptor::optional(TypeDescriptor::enumeration(color())));
    assert_eq!(schema.decode(&NativeValue::Null), NativeValue::Null);
    assert_eq!(schema.encode(&NativeValue::Null), NativeValue::Null);
}

#[test]
fn manual_enum_never_claims_runtime_values() {
    let schema = TypeSchema::manual_enum(vec![json!("x")]);
    assert!(!schema.accepts_runtime(&NativeValue::from("x")));
    assert_eq!(schema.decode(&NativeValue::from("x")), NativeValue::from("x"));
}

#[test]
fn integer_extremes_round_trip_through_json() {
    let schema = resolve(&TypeDescriptor::integer());
    for wire in [json!(i64::MAX), json!(i64::MIN)] {
        assert!(schema.validate(&wire));
        let decoded = schema.decode_wire(&wire);
        assert!(matches!(decoded, NativeValue::Integer(_)));
        assert_eq!(schema.encode_wire(&decoded), wire);
    }
}

#[test]
fn integers_beyond_i64_are_not_integers() {
    let schema = resolve(&TypeDescriptor::integer());
    assert!(!schema.validate(&json!(u64::MAX)));
    assert!(!schema.validate(&json!(1_u64 << 63)));
    let number = resolve(&TypeDescriptor::number());
    assert!(number.validate(&json!(u64::MAX)));
}

#[test]
fn decode_wire_lifts_json() {
    let schema = resolve(&TypeDescriptor::list_of(TypeDescriptor::integer()));
    assert_eq!(schema.decode_wire(&json!([1, 2])), NativeValue::from(vec![1, 2]));
}
