//! Test report resource: structured test results of one build.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::resources::Build;
use crate::session::Jenkins;

/// Decoded test report document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct TestReportDocument {
    pub duration: f64,
    pub fail_count: u32,
    pub pass_count: u32,
    pub skip_count: u32,
    pub suites: Vec<Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Test results of one build, bound to the job and build number they
/// were fetched for.
#[derive(Debug)]
pub struct TestReport<'a> {
    session: &'a Jenkins,
    job_name: String,
    build_number: u32,
    doc: TestReportDocument,
}

impl<'a> TestReport<'a> {
    pub(crate) fn new(
        session: &'a Jenkins,
        job_name: String,
        build_number: u32,
        doc: TestReportDocument,
    ) -> Self {
        Self {
            session,
            job_name,
            build_number,
            doc,
        }
    }

    // ===== Pure accessors =====

    /// Name of the owning job.
    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    /// Number of the owning build.
    pub fn build_number(&self) -> u32 {
        self.build_number
    }

    /// Total test duration in seconds.
    pub fn duration(&self) -> f64 {
        self.doc.duration
    }

    /// Number of failed tests.
    pub fn fail_count(&self) -> u32 {
        self.doc.fail_count
    }

    /// Number of passed tests.
    pub fn pass_count(&self) -> u32 {
        self.doc.pass_count
    }

    /// Number of skipped tests.
    pub fn skip_count(&self) -> u32 {
        self.doc.skip_count
    }

    /// Total number of tests in the report.
    pub fn total_count(&self) -> u32 {
        self.doc.fail_count + self.doc.pass_count + self.doc.skip_count
    }

    /// Raw test suites.
    pub fn suites(&self) -> &[Value] {
        &self.doc.suites
    }

    // ===== Lazy accessors =====

    /// Fetch the build this report belongs to.
    pub async fn build(&self) -> Result<Option<Build<'a>>> {
        self.session
            .build(&self.job_name, self.build_number, None)
            .await
    }
}
