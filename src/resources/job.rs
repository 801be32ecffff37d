//! Job resource: a named, configurable build definition.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::Result;
use crate::resources::queue::QueuedItem;
use crate::resources::Build;
use crate::session::Jenkins;

/// Reference to a build carried inside a job document. Holds at
/// minimum the build number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct BuildRef {
    pub number: u32,
    #[serde(default)]
    pub url: Option<String>,
}

/// Decoded job document. Known fields are typed, everything else the
/// server returns is preserved in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct JobDocument {
    pub name: String,
    pub url: String,
    pub buildable: bool,
    pub disabled: bool,
    pub color: Option<String>,
    pub full_display_name: Option<String>,
    pub next_build_number: u32,
    pub health_report: Vec<Value>,
    pub actions: Vec<Value>,
    pub builds: Vec<BuildRef>,
    pub last_build: Option<BuildRef>,
    pub last_completed_build: Option<BuildRef>,
    pub last_failed_build: Option<BuildRef>,
    pub last_stable_build: Option<BuildRef>,
    pub last_successful_build: Option<BuildRef>,
    pub last_unstable_build: Option<BuildRef>,
    pub last_unsuccessful_build: Option<BuildRef>,
    pub queue_item: Option<Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// One parameter definition extracted from a job's actions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterDefinition {
    /// Default value, when the definition carries one.
    pub default: Option<Value>,
    /// Human-readable description.
    pub description: Option<String>,
    /// Allowed choices, for choice-style parameters.
    pub choices: Option<Value>,
}

/// A job on the server: an immutable snapshot of its document plus the
/// session it was fetched through.
#[derive(Debug)]
pub struct Job<'a> {
    session: &'a Jenkins,
    doc: JobDocument,
}

impl<'a> Job<'a> {
    pub(crate) fn new(session: &'a Jenkins, doc: JobDocument) -> Self {
        Self { session, doc }
    }

    // ===== Pure accessors =====

    /// Job name.
    pub fn name(&self) -> &str {
        &self.doc.name
    }

    /// Job page URL.
    pub fn url(&self) -> &str {
        &self.doc.url
    }

    /// Whether the job accepts new builds.
    pub fn is_buildable(&self) -> bool {
        self.doc.buildable
    }

    /// Whether the job is disabled.
    pub fn is_disabled(&self) -> bool {
        self.doc.disabled
    }

    /// Number the next build will get.
    pub fn next_build_number(&self) -> u32 {
        self.doc.next_build_number
    }

    /// Ball color summarizing the job state, empty when absent.
    pub fn color(&self) -> &str {
        self.doc.color.as_deref().unwrap_or("")
    }

    /// Full display name, empty when absent.
    pub fn full_display_name(&self) -> &str {
        self.doc.full_display_name.as_deref().unwrap_or("")
    }

    /// Raw health report entries.
    pub fn health_report(&self) -> &[Value] {
        &self.doc.health_report
    }

    /// The job's pending queue item, if it currently has one.
    pub fn queue_item(&self) -> Option<QueuedItem<'a>> {
        self.doc
            .queue_item
            .as_ref()
            .and_then(|item| QueuedItem::from_value(self.session, item))
    }

    /// Replace the queue-item field of the snapshot.
    pub fn set_queue_item(&mut self, item: Option<Value>) {
        self.doc.queue_item = item;
    }

    /// Parameter definitions scanned out of the job's actions, keyed
    /// by parameter name. Default value, description and choices are
    /// each optional and independently absent.
    pub fn parameter_definitions(&self) -> HashMap<String, ParameterDefinition> {
        let mut parameters = HashMap::new();

        for action in &self.doc.actions {
            let Some(definitions) = action
                .get("parameterDefinitions")
                .and_then(Value::as_array)
            else {
                continue;
            };

            for definition in definitions {
                let Some(name) = definition.get("name").and_then(Value::as_str) else {
                    continue;
                };
                let default = definition
                    .get("defaultParameterValue")
                    .and_then(|d| d.get("value"))
                    .filter(|v| !v.is_null())
                    .cloned();
                let description = definition
                    .get("description")
                    .and_then(Value::as_str)
                    .map(String::from);
                let choices = definition
                    .get("choices")
                    .filter(|v| !v.is_null())
                    .cloned();

                parameters.insert(
                    name.to_string(),
                    ParameterDefinition {
                        default,
                        description,
                        choices,
                    },
                );
            }
        }
        parameters
    }

    // ===== Lazy accessors =====

    async fn deref_build(&self, reference: Option<&BuildRef>) -> Result<Option<Build<'a>>> {
        match reference {
            Some(reference) => {
                self.session
                    .build(&self.doc.name, reference.number, None)
                    .await
            }
            None => Ok(None),
        }
    }

    /// Fetch one build of this job by number.
    pub async fn build(&self, number: u32) -> Result<Option<Build<'a>>> {
        self.session.build(&self.doc.name, number, None).await
    }

    /// Fetch every build in the snapshot's build list.
    ///
    /// One request per listed build: cost is proportional to the build
    /// history length.
    pub async fn builds(&self) -> Result<Vec<Build<'a>>> {
        let mut builds = Vec::with_capacity(self.doc.builds.len());
        for reference in &self.doc.builds {
            if let Some(build) = self
                .session
                .build(&self.doc.name, reference.number, None)
                .await?
            {
                builds.push(build);
            }
        }
        Ok(builds)
    }

    /// Fetch the last build; `Ok(None)` without a request when the
    /// snapshot has no last-build reference.
    pub async fn last_build(&self) -> Result<Option<Build<'a>>> {
        self.deref_build(self.doc.last_build.as_ref()).await
    }

    /// Fetch the last completed build.
    pub async fn last_completed_build(&self) -> Result<Option<Build<'a>>> {
        self.deref_build(self.doc.last_completed_build.as_ref()).await
    }

    /// Fetch the last failed build.
    pub async fn last_failed_build(&self) -> Result<Option<Build<'a>>> {
        self.deref_build(self.doc.last_failed_build.as_ref()).await
    }

    /// Fetch the last stable build.
    pub async fn last_stable_build(&self) -> Result<Option<Build<'a>>> {
        self.deref_build(self.doc.last_stable_build.as_ref()).await
    }

    /// Fetch the last successful build.
    pub async fn last_successful_build(&self) -> Result<Option<Build<'a>>> {
        self.deref_build(self.doc.last_successful_build.as_ref()).await
    }

    /// Fetch the last unstable build.
    pub async fn last_unstable_build(&self) -> Result<Option<Build<'a>>> {
        self.deref_build(self.doc.last_unstable_build.as_ref()).await
    }

    /// Fetch the last unsuccessful build.
    pub async fn last_unsuccessful_build(&self) -> Result<Option<Build<'a>>> {
        self.deref_build(self.doc.last_unsuccessful_build.as_ref()).await
    }

    /// Fetch this job's `config.xml`.
    pub async fn config_xml(&self) -> Result<Option<String>> {
        self.session.job_config(&self.doc.name).await
    }
}
