//! Event details produced by the bridge

use crate::{ExecutionStateChangeEvent, ExecutionStatus, Payload};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Inputs section of an ICAv2 WES request
///
/// The caller merges this with the request name, engine parameters and tags.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequestEventDetail {
    pub inputs: Value,
}

/// Inbound wrapper around a WES state change
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateChangeEventDetail {
    pub icav2_wes_state_change_event: ExecutionStateChangeEvent,
}

/// Canonical workflow run update
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRunUpdateEvent {
    pub status: ExecutionStatus,
    /// UTC, second precision, `Z` suffixed
    pub timestamp: String,
    pub portal_run_id: String,
    /// Workflow with `name`/`version` in place of `workflowName`/`workflowVersion`
    pub workflow: Map<String, Value>,
    pub workflow_run_name: String,
    pub libraries: Vec<Value>,
    pub payload: Payload,
}

/// Outbound wrapper around a workflow run update
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRunUpdateDetail {
    pub workflow_run_update_event: WorkflowRunUpdateEvent,
}

impl From<WorkflowRunUpdateEvent> for WorkflowRunUpdateDetail {
    fn from(event: WorkflowRunUpdateEvent) -> Self {
        Self {
            workflow_run_update_event: event,
        }
    }
}
