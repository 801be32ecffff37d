//! Path templates for the Jenkins REST endpoints.
//!
//! Pure functions mapping a resource kind and action to the request
//! path. User-supplied names are percent-encoded; the optional `tree`
//! projection on build lookups is appended verbatim only when provided.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Escape set for one path segment. RFC 3986 unreserved characters
/// pass through untouched.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode one path segment or query value.
pub(crate) fn encode(name: &str) -> String {
    utf8_percent_encode(name, SEGMENT).to_string()
}

pub(crate) const ROOT_INFO: &str = "/api/json?pretty=true";
pub(crate) const CRUMB_ISSUER: &str = "/crumbIssuer/api/json";
pub(crate) const COMPUTER_LIST: &str = "/computer/api/json";
pub(crate) const QUEUE_INFO: &str = "/queue/api/json";

pub(crate) fn job_info(name: &str) -> String {
    format!("/job/{}/api/json", encode(name))
}

pub(crate) fn job_build(name: &str) -> String {
    format!("/job/{}/build", encode(name))
}

pub(crate) fn job_build_with_parameters(name: &str) -> String {
    format!("/job/{}/buildWithParameters", encode(name))
}

pub(crate) fn job_config(name: &str) -> String {
    format!("/job/{}/config.xml", encode(name))
}

pub(crate) fn job_delete(name: &str) -> String {
    format!("/job/{}/doDelete", encode(name))
}

pub(crate) fn create_item(name: &str) -> String {
    format!("/createItem?name={}", encode(name))
}

pub(crate) fn build_info(job: &str, number: u32, tree: Option<&str>) -> String {
    match tree {
        Some(tree) => format!("/job/{}/{}/api/json?tree={}", encode(job), number, tree),
        None => format!("/job/{}/{}/api/json", encode(job), number),
    }
}

pub(crate) fn console_text(job: &str, number: u32) -> String {
    format!("/job/{}/{}/consoleText", encode(job), number)
}

pub(crate) fn test_report(job: &str, number: u32) -> String {
    format!("/job/{}/{}/testReport/api/json", encode(job), number)
}

pub(crate) fn view_info(name: &str) -> String {
    format!("/view/{}/api/json", encode(name))
}

pub(crate) fn computer_info(name: &str) -> String {
    format!("/computer/{}/api/json", encode(name))
}

pub(crate) fn computer_config(name: &str) -> String {
    format!("/computer/{}/config.xml", encode(name))
}

pub(crate) fn computer_delete(name: &str) -> String {
    format!("/computer/{}/doDelete", encode(name))
}

pub(crate) fn computer_toggle_offline(name: &str) -> String {
    format!("/computer/{}/toggleOffline", encode(name))
}

pub(crate) fn executor_info(computer: &str, number: u32) -> String {
    format!("/computer/{}/executors/{}/api/json", encode(computer), number)
}

pub(crate) fn executor_stop(computer: &str, number: u32) -> String {
    format!("/computer/{}/executors/{}/stop", encode(computer), number)
}

pub(crate) fn queue_cancel(id: u64) -> String {
    format!("/queue/item/{}/cancelQueue", id)
}
