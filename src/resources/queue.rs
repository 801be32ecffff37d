//! Build queue resources: the queue document and its pending items.

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::Result;
use crate::resources::first_action_parameters;
use crate::session::Jenkins;

/// Task reference inside a queue item, pointing at the owning job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct TaskRef {
    pub name: String,
    pub url: String,
}

/// Decoded queue item document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct QueueItemDocument {
    pub id: u64,
    pub url: String,
    pub why: Option<String>,
    pub in_queue_since: Option<i64>,
    pub task: Option<TaskRef>,
    pub actions: Vec<Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Decoded queue document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct QueueDocument {
    pub items: Vec<QueueItemDocument>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// The server's build queue.
#[derive(Debug)]
pub struct Queue<'a> {
    session: &'a Jenkins,
    doc: QueueDocument,
}

impl<'a> Queue<'a> {
    pub(crate) fn new(session: &'a Jenkins, doc: QueueDocument) -> Self {
        Self { session, doc }
    }

    /// Pending items, in server order.
    pub fn items(&self) -> Vec<QueuedItem<'a>> {
        self.doc
            .items
            .iter()
            .map(|doc| QueuedItem::new(self.session, doc.clone()))
            .collect()
    }

    /// Number of pending items.
    pub fn len(&self) -> usize {
        self.doc.items.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.doc.items.is_empty()
    }
}

/// A build request waiting for an available executor.
#[derive(Debug)]
pub struct QueuedItem<'a> {
    session: &'a Jenkins,
    doc: QueueItemDocument,
}

impl<'a> QueuedItem<'a> {
    pub(crate) fn new(session: &'a Jenkins, doc: QueueItemDocument) -> Self {
        Self { session, doc }
    }

    /// Build a queued item from a raw embedded document, e.g. the
    /// queue-item field of a job. `None` when the value does not
    /// decode.
    pub(crate) fn from_value(session: &'a Jenkins, value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone())
            .ok()
            .map(|doc| Self::new(session, doc))
    }

    /// Queue item id.
    pub fn id(&self) -> u64 {
        self.doc.id
    }

    /// Name of the queued job, empty when the task reference is
    /// absent.
    pub fn job_name(&self) -> &str {
        self.doc.task.as_ref().map(|t| t.name.as_str()).unwrap_or("")
    }

    /// Queue item URL.
    pub fn url(&self) -> &str {
        &self.doc.url
    }

    /// Human-readable reason the item is still queued.
    pub fn why(&self) -> Option<&str> {
        self.doc.why.as_deref()
    }

    /// Parameters the build was requested with, keyed by name. An
    /// absent action yields an empty map.
    pub fn input_parameters(&self) -> HashMap<String, Value> {
        first_action_parameters(&self.doc.actions)
    }

    /// Local time the item entered the queue, formatted
    /// `HH:MM:SS - mm.dd.yy`. `None` when the document carries no
    /// epoch value.
    pub fn in_queue_since(&self) -> Option<String> {
        self.doc
            .in_queue_since
            .and_then(|millis| Local.timestamp_millis_opt(millis).single())
            .map(|time| time.format("%H:%M:%S - %m.%d.%y").to_string())
    }

    /// Cancel this queued item through the owning session.
    pub async fn cancel(&self) -> Result<bool> {
        self.session.cancel_queue_item(self.doc.id).await
    }
}
