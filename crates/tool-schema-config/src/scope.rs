// crates/tool-schema-config/src/scope.rs
// ============================================================================
// Module: Configuration Scopes
// Description: Override-with-fallback configuration layers.
// Purpose: Resolve schema rendering settings across global and tool scopes.
// Dependencies: serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Each [`ConfigScope`] holds an optional value per setting and an optional
//! parent. Reads walk from the scope outward and return the first explicit
//! value, falling back to the built-in default. Because the walk happens on
//! every read, a later write to an outer scope is observed by inner scopes
//! that never overrode the setting.
//!
//! Scopes are written during setup. The lock only guards against torn reads
//! if a host mutates a scope concurrently with rendering.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::dialect::Dialect;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Parameter names excluded from schemas unless a scope overrides the list.
pub const DEFAULT_IGNORED_PARAMETERS: [&str; 3] = ["self", "args", "kwargs"];
/// Maximum configuration file size in bytes.
const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;

// ============================================================================
// SECTION: Settings
// ============================================================================

/// Explicit settings held by a single scope.
///
/// # Invariants
/// - `None` means "inherit from the parent scope".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigSettings {
    /// Parameter names to leave out of rendered schemas.
    #[serde(default)]
    pub ignore_parameters: Option<Vec<String>>,
    /// Omit the function description.
    #[serde(default)]
    pub ignore_function_description: Option<bool>,
    /// Omit every parameter description.
    #[serde(default)]
    pub ignore_parameter_descriptions: Option<bool>,
    /// Omit all parameters.
    #[serde(default)]
    pub ignore_all_parameters: Option<bool>,
    /// Default rendering dialect.
    #[serde(default)]
    pub dialect: Option<Dialect>,
}

impl ConfigSettings {
    /// Parses settings from TOML text and validates them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validates the settings for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when an ignored parameter name is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(names) = &self.ignore_parameters
            && names.iter().any(|name| name.trim().is_empty())
        {
            return Err(ConfigError::Invalid(
                "ignore_parameters entries must be non-empty".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Scope
// ============================================================================

/// A configuration layer with optional parent fallback.
///
/// # Invariants
/// - Reads never cache parent values.
/// - `initial` is the snapshot restored by [`ConfigScope::reset_default`].
#[derive(Debug)]
pub struct ConfigScope {
    /// Enclosing scope consulted for unset values.
    parent: Option<Arc<ConfigScope>>,
    /// Current explicit settings.
    settings: RwLock<ConfigSettings>,
    /// Settings the scope was created with.
    initial: ConfigSettings,
}

impl ConfigScope {
    /// Creates a root scope with no explicit settings.
    #[must_use]
    pub fn root() -> Arc<Self> {
        Self::with_settings(ConfigSettings::default())
    }

    /// Creates a root scope seeded with explicit settings.
    #[must_use]
    pub fn with_settings(settings: ConfigSettings) -> Arc<Self> {
        Arc::new(Self {
            parent: None,
            initial: settings.clone(),
            settings: RwLock::new(settings),
        })
    }

    /// Creates a child scope that falls back to `self` for unset values.
    #[must_use]
    pub fn child(self: &Arc<Self>, overrides: ConfigSettings) -> Arc<Self> {
        Arc::new(Self {
            parent: Some(Arc::clone(self)),
            initial: overrides.clone(),
            settings: RwLock::new(overrides),
        })
    }

    /// Loads a root scope from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, is too large, is
    /// not UTF-8, or does not parse.
    pub fn load(path: &Path) -> Result<Arc<Self>, ConfigError> {
        let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Ok(Self::with_settings(ConfigSettings::from_toml_str(content)?))
    }

    /// Returns the parent scope, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&Arc<Self>> {
        self.parent.as_ref()
    }

    /// Returns a copy of this scope's explicit settings.
    #[must_use]
    pub fn explicit_settings(&self) -> ConfigSettings {
        self.read().clone()
    }

    // ------------------------------------------------------------------------
    // Getters
    // ------------------------------------------------------------------------

    /// Parameter names to leave out of rendered schemas.
    #[must_use]
    pub fn ignore_parameters(&self) -> Vec<String> {
        self.lookup(|settings| settings.ignore_parameters.clone()).unwrap_or_else(|| {
            DEFAULT_IGNORED_PARAMETERS.iter().map(ToString::to_string).collect()
        })
    }

    /// Whether the function description is omitted.
    #[must_use]
    pub fn ignore_function_description(&self) -> bool {
        self.lookup(|settings| settings.ignore_function_description).unwrap_or(false)
    }

    /// Whether parameter descriptions are omitted.
    #[must_use]
    pub fn ignore_parameter_descriptions(&self) -> bool {
        self.lookup(|settings| settings.ignore_parameter_descriptions).unwrap_or(false)
    }

    /// Whether all parameters are omitted.
    #[must_use]
    pub fn ignore_all_parameters(&self) -> bool {
        self.lookup(|settings| settings.ignore_all_parameters).unwrap_or(false)
    }

    /// Default rendering dialect.
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.lookup(|settings| settings.dialect).unwrap_or_default()
    }

    // ------------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------------

    /// Sets the ignored parameter names on this scope.
    pub fn set_ignore_parameters(&self, names: Vec<String>) {
        self.write().ignore_parameters = Some(names);
    }

    /// Sets whether the function description is omitted on this scope.
    pub fn set_ignore_function_description(&self, value: bool) {
        self.write().ignore_function_description = Some(value);
    }

    /// Sets whether parameter descriptions are omitted on this scope.
    pub fn set_ignore_parameter_descriptions(&self, value: bool) {
        self.write().ignore_parameter_descriptions = Some(value);
    }

    /// Sets whether all parameters are omitted on this scope.
    pub fn set_ignore_all_parameters(&self, value: bool) {
        self.write().ignore_all_parameters = Some(value);
    }

    /// Sets the default rendering dialect on this scope.
    pub fn set_dialect(&self, dialect: Dialect) {
        self.write().dialect = Some(dialect);
    }

    /// Restores the settings this scope was created with.
    pub fn reset_default(&self) {
        *self.write() = self.initial.clone();
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    /// Walks the scope chain and returns the first explicit value.
    fn lookup<T>(&self, select: impl Fn(&ConfigSettings) -> Option<T>) -> Option<T> {
        let mut scope = Some(self);
        while let Some(current) = scope {
            if let Some(value) = select(&current.read()) {
                return Some(value);
            }
            scope = current.parent.as_deref();
        }
        None
    }

    /// Acquires the settings for reading, tolerating poisoning.
    fn read(&self) -> RwLockReadGuard<'_, ConfigSettings> {
        self.settings.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquires the settings for writing, tolerating poisoning.
    fn write(&self) -> RwLockWriteGuard<'_, ConfigSettings> {
        self.settings.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}
