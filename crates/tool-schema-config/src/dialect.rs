// crates/tool-schema-config/src/dialect.rs
// ============================================================================
// Module: Schema Dialects
// Description: Structural shapes a function schema can render to.
// Purpose: Shared dialect identifiers across config and the schema engine.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A dialect selects the outer structure of a rendered function schema. The
//! parameter object itself is identical across dialects.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Rendering dialect for function schemas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// `{type: "function", function: {...}}` with parameters omitted when empty.
    #[default]
    Compact,
    /// Unwrapped function body; `parameters` is always present.
    Flat,
    /// Like [`Dialect::Flat`], with the parameter object under `input_schema`.
    Input,
}

impl Dialect {
    /// Returns the canonical string name for the dialect.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Flat => "flat",
            Self::Input => "input",
        }
    }

    /// Parses a dialect from its string representation.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "compact" => Some(Self::Compact),
            "flat" => Some(Self::Flat),
            "input" => Some(Self::Input),
            _ => None,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
