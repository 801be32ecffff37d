//! View resource: a named, filtered grouping of jobs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::resources::Job;
use crate::session::{Jenkins, JobSummary};

/// Decoded view document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ViewDocument {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub jobs: Vec<JobSummary>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A view on the server.
#[derive(Debug)]
pub struct View<'a> {
    session: &'a Jenkins,
    doc: ViewDocument,
}

impl<'a> View<'a> {
    pub(crate) fn new(session: &'a Jenkins, doc: ViewDocument) -> Self {
        Self { session, doc }
    }

    // ===== Pure accessors =====

    /// View name.
    pub fn name(&self) -> &str {
        &self.doc.name
    }

    /// View page URL.
    pub fn url(&self) -> &str {
        &self.doc.url
    }

    /// View description, empty when absent.
    pub fn description(&self) -> &str {
        self.doc.description.as_deref().unwrap_or("")
    }

    /// Job summaries listed by the view, straight from the snapshot.
    pub fn job_summaries(&self) -> &[JobSummary] {
        &self.doc.jobs
    }

    // ===== Lazy accessors =====

    /// Fetch every job the view lists as a full resource.
    ///
    /// One request per listed job; jobs that no longer resolve are
    /// skipped.
    pub async fn jobs(&self) -> Result<Vec<Job<'a>>> {
        let mut jobs = Vec::with_capacity(self.doc.jobs.len());
        for summary in &self.doc.jobs {
            if let Some(job) = self.session.job(&summary.name).await? {
                jobs.push(job);
            }
        }
        Ok(jobs)
    }
}
