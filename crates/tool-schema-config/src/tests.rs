// crates/tool-schema-config/src/tests.rs
// ============================================================================
// Module: Config Scope Unit Tests
// Description: Fallback, override, and reset behavior of config scopes.
// Purpose: Pin the live inheritance semantics of layered settings.
// Dependencies: tool-schema-config
// ============================================================================

//! ## Overview
//! Exercises scope resolution order and the late-binding parent fallback.

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

use crate::ConfigScope;
use crate::ConfigSettings;
use crate::Dialect;

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn root_scope_uses_builtin_defaults() {
    let scope = ConfigScope::root();
    assert_eq!(scope.ignore_parameters(), vec!["self", "args", "kwargs"]);
    assert!(!scope.ignore_function_description());
    assert!(!scope.ignore_parameter_descriptions());
    assert!(!scope.ignore_all_parameters());
    assert_eq!(scope.dialect(), Dialect::Compact);
}

#[test]
fn child_inherits_later_parent_writes() {
    let global = ConfigScope::root();
    let tool = global.child(ConfigSettings::default());
    assert!(!tool.ignore_function_description());

    global.set_ignore_function_description(true);
    assert!(tool.ignore_function_description());

    global.set_dialect(Dialect::Input);
    assert_eq!(tool.dialect(), Dialect::Input);
}

#[test]
fn child_override_shadows_parent() {
    let global = ConfigScope::root();
    let tool = global.child(ConfigSettings {
        ignore_all_parameters: Some(false),
        ..ConfigSettings::default()
    });

    global.set_ignore_all_parameters(true);
    assert!(global.ignore_all_parameters());
    assert!(!tool.ignore_all_parameters());
}

#[test]
fn child_write_does_not_leak_to_parent() {
    let global = ConfigScope::root();
    let tool = global.child(ConfigSettings::default());
    tool.set_ignore_parameters(vec!["ctx".to_string()]);

    assert_eq!(tool.ignore_parameters(), vec!["ctx"]);
    assert_eq!(global.ignore_parameters(), vec!["self", "args", "kwargs"]);
}

#[test]
fn reset_default_restores_initial_settings() {
    let global = ConfigScope::root();
    let tool = global.child(ConfigSettings {
        dialect: Some(Dialect::Flat),
        ..ConfigSettings::default()
    });
    tool.set_dialect(Dialect::Input);
    tool.set_ignore_parameter_descriptions(true);

    tool.reset_default();
    assert_eq!(tool.dialect(), Dialect::Flat);
    assert!(!tool.ignore_parameter_descriptions());
    assert_eq!(tool.explicit_settings().ignore_parameter_descriptions, None);
}

#[test]
fn three_level_chain_resolves_nearest_value() {
    let global = ConfigScope::root();
    let group = global.child(ConfigSettings::default());
    let tool = group.child(ConfigSettings::default());

    global.set_dialect(Dialect::Flat);
    assert_eq!(tool.dialect(), Dialect::Flat);

    group.set_dialect(Dialect::Input);
    assert_eq!(tool.dialect(), Dialect::Input);
    assert!(tool.parent().is_some());
}

#[test]
fn dialect_names_round_trip() {
    for dialect in [Dialect::Compact, Dialect::Flat, Dialect::Input] {
        assert_eq!(Dialect::parse(dialect.as_str()), Some(dialect));
    }
    assert_eq!(Dialect::parse("openai"), None);
}
