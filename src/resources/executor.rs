//! Executor resource: one build-execution slot on a computer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::session::Jenkins;

/// Decoded executor document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ExecutorDocument {
    pub number: u32,
    pub idle: bool,
    pub likely_stuck: bool,
    pub progress: i64,
    pub current_executable: Option<Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// One executor slot, bound to the computer it was fetched from.
#[derive(Debug)]
pub struct Executor<'a> {
    session: &'a Jenkins,
    computer: String,
    doc: ExecutorDocument,
}

impl<'a> Executor<'a> {
    pub(crate) fn new(session: &'a Jenkins, computer: String, doc: ExecutorDocument) -> Self {
        Self {
            session,
            computer,
            doc,
        }
    }

    // ===== Pure accessors =====

    /// Name of the computer hosting this executor.
    pub fn computer(&self) -> &str {
        &self.computer
    }

    /// Executor slot number.
    pub fn number(&self) -> u32 {
        self.doc.number
    }

    /// Whether the slot is idle.
    pub fn is_idle(&self) -> bool {
        self.doc.idle
    }

    /// Whether the server suspects the current build is stuck.
    pub fn is_likely_stuck(&self) -> bool {
        self.doc.likely_stuck
    }

    /// Progress of the current build in percent, `-1` when idle.
    pub fn progress(&self) -> i64 {
        self.doc.progress
    }

    /// Number of the build currently occupying the slot.
    pub fn current_build_number(&self) -> Option<u64> {
        self.doc
            .current_executable
            .as_ref()
            .and_then(|e| e.get("number"))
            .and_then(Value::as_u64)
    }

    // ===== Lazy operations =====

    /// Stop the build running on this executor. Returns `true` on
    /// success.
    pub async fn stop(&self) -> Result<bool> {
        self.session
            .stop_executor(&self.computer, self.doc.number)
            .await
    }
}
