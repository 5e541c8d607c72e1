// crates/tool-schema/src/audit.rs
// ============================================================================
// Module: Load Audit Logging
// Description: Structured audit events for call-request loading.
// Purpose: Emit one JSON line per load without a logging framework.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Every [`crate::ToolRegistry::load`] call produces a [`LoadAuditEvent`]
//! describing the outcome. Events never carry argument values; only the tool
//! name, the error kind label, and the names of arguments dropped in
//! non-strict mode are recorded.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Load outcome classification.
///
/// # Invariants
/// - Variants are stable for audit labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadOutcome {
    /// The request was accepted.
    Accepted,
    /// The request was rejected.
    Rejected,
}

impl LoadOutcome {
    /// Returns a stable label for the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

/// Load audit event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Requested tool name when the request carried one.
    pub tool: Option<String>,
    /// Load outcome.
    pub outcome: LoadOutcome,
    /// Normalized error kind label for rejected requests.
    pub error_kind: Option<&'static str>,
    /// Undeclared argument names dropped in non-strict mode.
    pub dropped_arguments: Vec<String>,
}

impl LoadAuditEvent {
    /// Creates an event for an accepted request.
    #[must_use]
    pub fn accepted(tool: impl Into<String>, dropped_arguments: Vec<String>) -> Self {
        Self {
            event: "tool_load",
            timestamp_ms: now_ms(),
            tool: Some(tool.into()),
            outcome: LoadOutcome::Accepted,
            error_kind: None,
            dropped_arguments,
        }
    }

    /// Creates an event for a rejected request.
    #[must_use]
    pub fn rejected(tool: Option<String>, error_kind: &'static str) -> Self {
        Self {
            event: "tool_load",
            timestamp_ms: now_ms(),
            tool,
            outcome: LoadOutcome::Rejected,
            error_kind: Some(error_kind),
            dropped_arguments: Vec::new(),
        }
    }
}

/// Returns the current time in milliseconds since the epoch.
fn now_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for load events.
pub trait LoadAuditSink: Send + Sync {
    /// Record a load event.
    fn record(&self, event: &LoadAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrLoadAuditSink;

impl LoadAuditSink for StderrLoadAuditSink {
    fn record(&self, event: &LoadAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileLoadAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileLoadAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl LoadAuditSink for FileLoadAuditSink {
    fn record(&self, event: &LoadAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopLoadAuditSink;

impl LoadAuditSink for NoopLoadAuditSink {
    fn record(&self, _event: &LoadAuditEvent) {}
}
