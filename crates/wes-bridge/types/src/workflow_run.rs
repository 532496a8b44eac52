//! Workflow run records held by the workflow registry

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A workflow run as recorded by the workflow manager
///
/// `workflow` and `libraries` are forwarded into the update event, so they
/// stay free-form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRunRecord {
    /// Workflow run id (`wfr.*`)
    pub orcabus_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portal_run_id: Option<String>,
    /// Workflow description, typically `{orcabusId, workflowName, workflowVersion, ...}`
    pub workflow: Map<String, Value>,
    pub workflow_run_name: String,
    /// Libraries linked to the run, in registry order
    pub libraries: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
