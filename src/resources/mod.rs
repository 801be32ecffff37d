//! Resource objects over decoded server documents.
//!
//! Each resource holds one decoded JSON document plus a non-owning
//! back-reference to the [`Jenkins`](crate::session::Jenkins) session
//! it came from; the borrow ties every resource to the lifetime of its
//! session. Construction never performs I/O. Pure accessors read the
//! snapshot and return neutral values for absent fields; lazy
//! accessors re-enter the session and fetch fresh state on every call.

pub(crate) mod build;
pub(crate) mod computer;
pub(crate) mod executor;
pub(crate) mod job;
pub(crate) mod queue;
pub(crate) mod test_report;
pub(crate) mod view;

pub use build::Build;
pub use computer::Computer;
pub use executor::Executor;
pub use job::{Job, ParameterDefinition};
pub use queue::{Queue, QueuedItem};
pub use test_report::TestReport;
pub use view::View;

use serde_json::Value;
use std::collections::HashMap;

/// Extract the `parameters` list of the first action in an actions
/// array, keyed by parameter name. An absent action or parameter list
/// yields an empty map.
pub(crate) fn first_action_parameters(actions: &[Value]) -> HashMap<String, Value> {
    let Some(parameters) = actions
        .first()
        .and_then(|action| action.get("parameters"))
        .and_then(Value::as_array)
    else {
        return HashMap::new();
    };

    parameters
        .iter()
        .filter_map(|parameter| {
            let name = parameter.get("name")?.as_str()?;
            Some((
                name.to_string(),
                parameter.get("value").cloned().unwrap_or(Value::Null),
            ))
        })
        .collect()
}
