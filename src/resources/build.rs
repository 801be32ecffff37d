//! Build resource: one execution instance of a job.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::Result;
use crate::resources::first_action_parameters;
use crate::session::Jenkins;

/// Decoded build document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct BuildDocument {
    pub number: u32,
    pub url: String,
    pub result: Option<String>,
    pub building: bool,
    pub duration: u64,
    pub estimated_duration: i64,
    pub timestamp: u64,
    pub built_on: Option<String>,
    pub actions: Vec<Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// One build of a job.
#[derive(Debug)]
pub struct Build<'a> {
    session: &'a Jenkins,
    job_name: String,
    doc: BuildDocument,
}

impl<'a> Build<'a> {
    pub(crate) fn new(session: &'a Jenkins, job_name: String, doc: BuildDocument) -> Self {
        Self {
            session,
            job_name,
            doc,
        }
    }

    // ===== Pure accessors =====

    /// Name of the owning job.
    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    /// Build number.
    pub fn number(&self) -> u32 {
        self.doc.number
    }

    /// Build page URL.
    pub fn url(&self) -> &str {
        &self.doc.url
    }

    /// Build result (`SUCCESS`, `FAILURE`, ...); `None` while the
    /// build is still running.
    pub fn result(&self) -> Option<&str> {
        self.doc.result.as_deref()
    }

    /// Whether the build has not produced a result yet.
    pub fn is_running(&self) -> bool {
        self.doc.result.is_none()
    }

    /// Wall-clock duration in milliseconds.
    pub fn duration(&self) -> u64 {
        self.doc.duration
    }

    /// Server estimate of the duration in milliseconds, `-1` when the
    /// server has no estimate.
    pub fn estimated_duration(&self) -> i64 {
        self.doc.estimated_duration
    }

    /// Start time as epoch milliseconds.
    pub fn timestamp(&self) -> u64 {
        self.doc.timestamp
    }

    /// Node the build ran on, empty for the built-in node.
    pub fn built_on(&self) -> &str {
        self.doc.built_on.as_deref().unwrap_or("")
    }

    /// Parameters the build was launched with, keyed by name.
    pub fn input_parameters(&self) -> HashMap<String, Value> {
        first_action_parameters(&self.doc.actions)
    }

    // ===== Lazy accessors =====

    /// Fetch the console text of this build.
    pub async fn console_text(&self) -> Result<Option<String>> {
        self.session
            .console_text(&self.job_name, self.doc.number)
            .await
    }
}
