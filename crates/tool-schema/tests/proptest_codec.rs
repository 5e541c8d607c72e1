// crates/tool-schema/tests/proptest_codec.rs
// ============================================================================
// Module: Codec Property-Based Tests
// Description: Round-trip and union determinism properties of the codec.
// Purpose: Check encode/decode invariants across generated values.
// ============================================================================

//! Property-based tests for codec invariants.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::sync::Arc;

use proptest::prelude::*;
use serde_json::json;
use tool_schema::EnumDefinition;
use tool_schema::NativeValue;
use tool_schema::TypeDescriptor;
use tool_schema::TypeResolver;
use tool_schema::TypeSchema;

const LABELS: [&str; 4] = ["RED", "GREEN", "BLUE", "AMBER"];

fn palette() -> Arc<EnumDefinition> {
    EnumDefinition::new("Palette", LABELS.iter().enumerate().map(|(i, label)| (*label, json!(i))))
}

fn resolve(descriptor: &TypeDescriptor) -> TypeSchema {
    TypeResolver::builtin().resolve(descriptor).unwrap()
}

fn constant(definition: &Arc<EnumDefinition>, index: usize) -> NativeValue {
    NativeValue::Constant(definition.constant(LABELS[index]).unwrap())
}

/// Native values accepted by `Union[int, Palette]`.
fn int_or_constant() -> impl Strategy<Value = Result<i64, usize>> {
    prop_oneof![
        any::<i64>().prop_map(Ok::<i64, usize>),
        (0 .. LABELS.len()).prop_map(Err::<i64, usize>),
    ]
}

fn native(definition: &Arc<EnumDefinition>, value: Result<i64, usize>) -> NativeValue {
    match value {
        Ok(number) => NativeValue::Integer(number),
        Err(index) => constant(definition, index),
    }
}

proptest! {
    #[test]
    fn labeled_enum_round_trips(index in 0 .. LABELS.len()) {
        let definition = palette();
        let schema = resolve(&TypeDescriptor::enumeration(Arc::clone(&definition)));
        let value = constant(&definition, index);
        prop_assert_eq!(schema.decode(&schema.encode(&value)), value);
        let wire = NativeValue::from(LABELS[index]);
        prop_assert_eq!(schema.encode(&schema.decode(&wire)), wire);
    }

    #[test]
    fn enum_list_round_trips(indices in prop::collection::vec(0 .. LABELS.len(), 0 .. 8)) {
        let definition = palette();
        let schema = resolve(&TypeDescriptor::list_of(TypeDescriptor::enumeration(Arc::clone(
            &definition,
        ))));
        let value =
            NativeValue::List(indices.iter().map(|index| constant(&definition, *index)).collect());
        let encoded = schema.encode(&value);
        prop_assert!(schema.validate(&encoded.to_wire()));
        prop_assert_eq!(schema.decode(&encoded), value);
    }

    #[test]
    fn union_round_trips(values in prop::collection::vec(int_or_constant(), 0 .. 6)) {
        let definition = palette();
        let schema = resolve(&TypeDescriptor::list_of(TypeDescriptor::union([
            TypeDescriptor::integer(),
            TypeDescriptor::enumeration(Arc::clone(&definition)),
        ])));
        let value =
            NativeValue::List(values.into_iter().map(|value| native(&definition, value)).collect());
        prop_assert_eq!(schema.decode(&schema.encode(&value)), value);
    }

    #[test]
    fn union_decode_ignores_member_order(
        order in Just(vec![0_usize, 1, 2]).prop_shuffle(),
        index in 0 .. LABELS.len(),
        text in "[a-z]{1,8}",
    ) {
        let definition = palette();
        let members = [
            TypeDescriptor::integer(),
            TypeDescriptor::string(),
            TypeDescriptor::enumeration(Arc::clone(&definition)),
        ];
        let schema = resolve(&TypeDescriptor::union(
            order.iter().map(|position| members[*position].clone()),
        ));
        prop_assert_eq!(
            schema.decode(&NativeValue::from(LABELS[index])),
            constant(&definition, index)
        );
        prop_assert_eq!(schema.decode(&NativeValue::from(text.as_str())), NativeValue::from(text));
    }

    #[test]
    fn unknown_labels_pass_through(text in "[a-z]{1,8}") {
        let schema = resolve(&TypeDescriptor::enumeration(palette()));
        let value = NativeValue::from(text);
        prop_assert_eq!(schema.decode(&value), value);
    }

    #[test]
    fn integer_schema_is_identity(number in any::<i64>()) {
        let schema = resolve(&TypeDescriptor::integer());
        let value = NativeValue::Integer(number);
        prop_assert_eq!(schema.decode(&schema.encode(&value)), value.clone());
        prop_assert!(schema.validate(&value.to_wire()));
    }
}
