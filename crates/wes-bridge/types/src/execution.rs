//! ICAv2 WES analysis state change notifications

use crate::{BridgeError, BridgeResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Status reported by the WES service for an analysis
///
/// Statuses the bridge does not know about are carried through untouched
/// in [`ExecutionStatus::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExecutionStatus {
    Submitted,
    Queued,
    Initializing,
    Preparing,
    Running,
    Succeeded,
    Failed,
    Aborted,
    Other(String),
}

impl ExecutionStatus {
    /// The wire representation, e.g. `SUCCEEDED`
    pub fn as_str(&self) -> &str {
        match self {
            Self::Submitted => "SUBMITTED",
            Self::Queued => "QUEUED",
            Self::Initializing => "INITIALIZING",
            Self::Preparing => "PREPARING",
            Self::Running => "RUNNING",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
            Self::Aborted => "ABORTED",
            Self::Other(status) => status,
        }
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Whether the analysis can no longer change state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Aborted)
    }
}

impl From<String> for ExecutionStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "SUBMITTED" => Self::Submitted,
            "QUEUED" => Self::Queued,
            "INITIALIZING" => Self::Initializing,
            "PREPARING" => Self::Preparing,
            "RUNNING" => Self::Running,
            "SUCCEEDED" => Self::Succeeded,
            "FAILED" => Self::Failed,
            "ABORTED" => Self::Aborted,
            _ => Self::Other(status),
        }
    }
}

impl From<&str> for ExecutionStatus {
    fn from(status: &str) -> Self {
        Self::from(status.to_string())
    }
}

impl From<ExecutionStatus> for String {
    fn from(status: ExecutionStatus) -> Self {
        match status {
            ExecutionStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag key carrying the portal run id
pub const PORTAL_RUN_ID_TAG: &str = "portalRunId";

/// A state change notification emitted by the ICAv2 WES service
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStateChangeEvent {
    /// WES analysis id (`iwa.*`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub inputs: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub engine_parameters: Value,
    #[serde(default)]
    pub tags: Map<String, Value>,
    pub status: ExecutionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps_launch_execution_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icav2_analysis_id: Option<String>,
}

impl ExecutionStateChangeEvent {
    /// The portal run id carried in `tags.portalRunId`
    pub fn portal_run_id(&self) -> BridgeResult<&str> {
        let path = format!("tags.{}", PORTAL_RUN_ID_TAG);
        match self.tags.get(PORTAL_RUN_ID_TAG) {
            Some(Value::String(id)) => Ok(id),
            Some(_) => Err(BridgeError::wrong_type(&path, "a string")),
            None => Err(BridgeError::missing_field(&path)),
        }
    }
}
