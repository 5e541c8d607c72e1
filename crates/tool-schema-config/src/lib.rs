// crates/tool-schema-config/src/lib.rs
// ============================================================================
// Module: Tool Schema Config
// Description: Layered configuration for tool schema rendering.
// Purpose: Resolve rendering flags through global and per-tool scopes.
// Dependencies: serde, thiserror, toml
// ============================================================================

//! ## Overview
//! This crate defines the configuration consumed by the tool schema engine.
//! Settings live in [`ConfigScope`] layers: a tool scope falls back to its
//! parent (usually the registry-wide scope) for every setting it does not set
//! itself, and that fallback is resolved at read time.
//! Invariants:
//! - A setter only writes the scope it is called on.
//! - Unset settings resolve through the parent chain, then to built-in defaults.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod dialect;
pub mod scope;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use dialect::Dialect;
pub use scope::ConfigError;
pub use scope::ConfigScope;
pub use scope::ConfigSettings;
pub use scope::DEFAULT_IGNORED_PARAMETERS;

#[cfg(test)]
mod tests;
