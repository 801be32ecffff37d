//! Typed async client for the Jenkins remote access API.
//!
//! The crate models the server's REST surface as an object graph rooted
//! at a [`Jenkins`] session: the session bootstraps against the root
//! info endpoint, negotiates anti-CSRF crumbs, and hands out resource
//! objects that fetch related resources on demand by calling back into
//! the session.
//!
//! # Architecture
//!
//! 1. **Config** (`config`) - connection parameters and base-URL assembly
//! 2. **Session** (`session`) - bootstrap, crumb protocol, every endpoint operation
//! 3. **Resources** (`resources`) - `Job`, `Build`, `Queue`, `Computer`,
//!    `Executor`, `View`, `TestReport` snapshots with lazy accessors
//!
//! # Example
//!
//! ```no_run
//! use jenkins_client::{ConnectionConfig, Jenkins, Scheme};
//!
//! # async fn example() -> jenkins_client::Result<()> {
//! let config = ConnectionConfig::new(Scheme::Http, "localhost", 8080, "admin", "token");
//! let jenkins = Jenkins::connect(&config).await?;
//!
//! if let Some(job) = jenkins.job("build-app").await? {
//!     println!("{} buildable: {}", job.name(), job.is_buildable());
//!     if let Some(build) = job.last_build().await? {
//!         println!("last build #{} -> {:?}", build.number(), build.result());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Freshness
//!
//! The client is a mirror of remote state, never a cache: every lazy
//! accessor performs a fresh fetch, and list-style queries re-run the
//! bootstrap before iterating. Two calls to the same accessor may
//! observe different remote state.

pub mod config;
pub mod error;
mod paths;
pub mod resources;
pub mod session;

pub use config::{ConnectionConfig, Scheme};
pub use error::{Error, Result};
pub use resources::{
    Build, Computer, Executor, Job, ParameterDefinition, Queue, QueuedItem, TestReport, View,
};
pub use session::{Crumb, Jenkins, JobSummary, ServerInfo, ViewSummary};
