// crates/tool-schema/src/docs.rs
// ============================================================================
// Module: Documentation Extraction
// Description: Function and parameter descriptions from doc text.
// Purpose: Feed human-readable descriptions into rendered schemas.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Doc text is whitespace-collapsed and split on `:param NAME: TEXT` tags.
//! The function description is everything before the first `:param` tag.
//! A parameter description runs until the next `:param`, `:type`, `:return`,
//! or `:rtype` tag, or the end of the text.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Opening marker of a parameter tag.
const PARAM_TAG: &str = ":param ";
/// Markers that terminate a parameter description.
const TERMINATING_TAGS: [&str; 4] = [":param", ":type", ":return", ":rtype"];

// ============================================================================
// SECTION: Doc Comment
// ============================================================================

/// Parsed documentation of a callable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    /// Text before the first parameter tag; may be empty.
    description: String,
    /// Non-empty parameter descriptions keyed by parameter name.
    parameters: BTreeMap<String, String>,
}

impl DocComment {
    /// Parses raw documentation text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let description = collapsed
            .find(":param")
            .map_or(collapsed.as_str(), |end| &collapsed[.. end])
            .trim()
            .to_string();
        Self {
            description,
            parameters: parse_parameters(&collapsed),
        }
    }

    /// Returns the function-level description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the description of a parameter, if documented.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    /// Returns all documented parameter descriptions.
    #[must_use]
    pub const fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Extracts `:param NAME: TEXT` descriptions; the first non-empty one per name wins.
fn parse_parameters(text: &str) -> BTreeMap<String, String> {
    let mut parameters = BTreeMap::new();
    let mut cursor = 0;
    while let Some(offset) = text[cursor ..].find(PARAM_TAG) {
        let name_start = cursor + offset + PARAM_TAG.len();
        let rest = &text[name_start ..];
        let Some(colon) = rest.find(':') else {
            break;
        };
        if !rest[colon + 1 ..].starts_with(' ') {
            cursor = name_start;
            continue;
        }
        let description_start = name_start + colon + 2;
        let description_end = next_tag(text, description_start);
        let description = text[description_start .. description_end].trim();
        if !description.is_empty() {
            parameters
                .entry(rest[.. colon].to_string())
                .or_insert_with(|| description.to_string());
        }
        cursor = description_end;
    }
    parameters
}

/// Returns the byte offset of the next terminating tag at or after `from`.
fn next_tag(text: &str, from: usize) -> usize {
    TERMINATING_TAGS
        .iter()
        .filter_map(|tag| text[from ..].find(tag))
        .min()
        .map_or(text.len(), |offset| from + offset)
}
