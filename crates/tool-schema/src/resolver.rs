// crates/tool-schema/src/resolver.rs
// ============================================================================
// Module: Type Schema Resolver
// Description: Priority-ordered registry of type matchers.
// Purpose: Map type descriptors to resolved type schemas.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! The resolver holds an ordered list of [`MatcherEntry`] values, sorted by
//! descending [`Priority`]. `resolve` consults entries in that order and
//! builds the schema with the first matcher that claims the descriptor.
//! Union members are resolved recursively through the same registry.
//!
//! The Value matcher claims every descriptor, so resolution of a non-empty
//! descriptor always yields a schema. [`TypeDescriptor::Empty`] resolves to
//! `None`; callers treat that as "omit the parameter".

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::descriptor::TypeDescriptor;
use crate::type_schema::Enumeration;
use crate::type_schema::EnumSource;
use crate::type_schema::Priority;
use crate::type_schema::SchemaShape;
use crate::type_schema::TypeSchema;
use crate::type_schema::ValueKind;

// ============================================================================
// SECTION: Matchers
// ============================================================================

/// Built-in type matchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatcherKind {
    /// Union of two or more alternatives.
    Union,
    /// Inline literal value set.
    Literal,
    /// Named constant set.
    Labeled,
    /// Homogeneous list.
    List,
    /// Universal fallback.
    Value,
}

impl MatcherKind {
    /// Returns the built-in priority of the matcher.
    #[must_use]
    pub const fn default_priority(self) -> Priority {
        match self {
            Self::Union => Priority::UNION,
            Self::Literal => Priority::LITERAL,
            Self::Labeled => Priority::LABELED,
            Self::List => Priority::LIST,
            Self::Value => Priority::VALUE,
        }
    }

    /// Returns true when the matcher claims the descriptor.
    #[must_use]
    pub fn matches(self, descriptor: &TypeDescriptor) -> bool {
        match self {
            Self::Union => {
                matches!(descriptor, TypeDescriptor::Union(members) if members.len() >= 2)
            }
            Self::Literal => matches!(descriptor, TypeDescriptor::Literal(_)),
            Self::Labeled => matches!(descriptor, TypeDescriptor::Enumeration(_)),
            Self::List => matches!(descriptor, TypeDescriptor::List(_)),
            Self::Value => true,
        }
    }
}

/// Registry entry pairing a matcher with its priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatcherEntry {
    /// Matcher predicate and constructor.
    pub kind: MatcherKind,
    /// Consultation priority.
    pub priority: Priority,
}

// ============================================================================
// SECTION: Resolver
// ============================================================================

/// Priority-ordered type schema resolver.
///
/// # Invariants
/// - Entries are sorted by descending priority; ties keep registration order.
/// - Every matcher kind appears exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeResolver {
    /// Matchers in consultation order.
    entries: Vec<MatcherEntry>,
}

impl Default for TypeResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TypeResolver {
    /// Returns the resolver with the built-in matchers and priorities.
    #[must_use]
    pub fn builtin() -> Self {
        let mut resolver = Self {
            entries: Vec::new(),
        };
        for kind in [
            MatcherKind::Value,
            MatcherKind::List,
            MatcherKind::Labeled,
            MatcherKind::Literal,
            MatcherKind::Union,
        ] {
            resolver.entries.push(MatcherEntry {
                kind,
                priority: kind.default_priority(),
            });
        }
        resolver.sort();
        resolver
    }

    /// Returns a resolver with the priority of one matcher replaced.
    #[must_use]
    pub fn with_priority(mut self, kind: MatcherKind, priority: Priority) -> Self {
        for entry in &mut self.entries {
            if entry.kind == kind {
                entry.priority = priority;
            }
        }
        self.sort();
        self
    }

    /// Returns the matchers in consultation order.
    #[must_use]
    pub fn entries(&self) -> &[MatcherEntry] {
        &self.entries
    }

    /// Resolves a descriptor to a schema.
    ///
    /// Returns `None` only for [`TypeDescriptor::Empty`] and for unions with
    /// no typed member. Unions are normalized first: empty members are
    /// dropped, nested unions flattened and a single remaining member
    /// resolved on its own.
    #[must_use]
    pub fn resolve(&self, descriptor: &TypeDescriptor) -> Option<TypeSchema> {
        if descriptor.is_empty() {
            return None;
        }
        if let TypeDescriptor::Union(members) = descriptor {
            let normalized =
                TypeDescriptor::union(members.iter().filter(|member| !member.is_empty()).cloned());
            if !matches!(&normalized, TypeDescriptor::Union(inner) if inner == members) {
                return self.resolve(&normalized);
            }
        }
        let entry = self.entries.iter().find(|entry| entry.kind.matches(descriptor))?;
        Some(self.build(*entry, descriptor))
    }

    /// Builds the schema for a descriptor claimed by `entry`.
    fn build(&self, entry: MatcherEntry, descriptor: &TypeDescriptor) -> TypeSchema {
        let shape = match (entry.kind, descriptor) {
            (MatcherKind::Union, TypeDescriptor::Union(members)) => SchemaShape::Union(
                members.iter().filter_map(|member| self.resolve(member)).collect(),
            ),
            (MatcherKind::Literal, TypeDescriptor::Literal(values)) => {
                SchemaShape::Enumeration(Enumeration::new(EnumSource::Literal, values.clone()))
            }
            (MatcherKind::Labeled, TypeDescriptor::Enumeration(definition)) => {
                SchemaShape::Enumeration(Enumeration::labeled(definition))
            }
            (MatcherKind::List, TypeDescriptor::List(item)) => SchemaShape::List(
                item.as_deref().and_then(|item| self.resolve(item)).map(Box::new),
            ),
            (_, TypeDescriptor::Named(name)) => {
                SchemaShape::Value(ValueKind::from_type_name(name))
            }
            _ => SchemaShape::Value(ValueKind::Object),
        };
        TypeSchema::matched(entry.kind, entry.priority, shape)
    }

    /// Restores descending priority order, keeping ties stable.
    fn sort(&mut self) {
        self.entries.sort_by(|left, right| right.priority.cmp(&left.priority));
    }
}
