//! Computer resource: a build agent hosting zero or more executors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::session::Jenkins;

/// Decoded computer document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ComputerDocument {
    pub display_name: String,
    pub offline: bool,
    pub idle: bool,
    pub num_executors: u32,
    pub offline_cause_reason: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Decoded computer list document (`/computer/api/json`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ComputerListDocument {
    pub computer: Vec<ComputerDocument>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A build agent (node) on the server.
#[derive(Debug)]
pub struct Computer<'a> {
    session: &'a Jenkins,
    doc: ComputerDocument,
}

impl<'a> Computer<'a> {
    pub(crate) fn new(session: &'a Jenkins, doc: ComputerDocument) -> Self {
        Self { session, doc }
    }

    // ===== Pure accessors =====

    /// Display name of the agent.
    pub fn display_name(&self) -> &str {
        &self.doc.display_name
    }

    /// Whether the agent is offline.
    pub fn is_offline(&self) -> bool {
        self.doc.offline
    }

    /// Whether the agent is idle.
    pub fn is_idle(&self) -> bool {
        self.doc.idle
    }

    /// Number of executor slots on the agent.
    pub fn num_executors(&self) -> u32 {
        self.doc.num_executors
    }

    /// Reason the agent is offline, empty when none was recorded.
    pub fn offline_cause_reason(&self) -> &str {
        self.doc.offline_cause_reason.as_deref().unwrap_or("")
    }

    // ===== Lazy operations =====

    /// Fetch this agent's `config.xml`.
    pub async fn configuration(&self) -> Result<Option<String>> {
        self.session.computer_config(&self.doc.display_name).await
    }

    /// Delete this agent. Returns `true` on success.
    pub async fn delete(&self) -> Result<bool> {
        self.session.delete_computer(&self.doc.display_name).await
    }

    /// Toggle this agent's offline state. Returns `true` on success.
    pub async fn toggle_offline(&self) -> Result<bool> {
        self.session.toggle_offline(&self.doc.display_name).await
    }
}
