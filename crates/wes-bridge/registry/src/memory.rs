//! In-memory workflow registry
//!
//! Suitable for tests and for replaying captured registry state offline.

use crate::error::{RegistryError, Result};
use crate::registry::WorkflowRegistry;
use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use wes_bridge_types::{Payload, WorkflowRunRecord};

/// Captured registry state
///
/// ```json
/// {
///   "workflowRuns": [{"orcabusId": "wfr.1", "portalRunId": "2025...", ...}],
///   "payloads": {"wfr.1": [{"version": "2025.08.05", "data": {...}}]}
/// }
/// ```
///
/// Payloads for a run are listed oldest first.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryFixture {
    #[serde(default)]
    pub workflow_runs: Vec<WorkflowRunRecord>,
    #[serde(default)]
    pub payloads: HashMap<String, Vec<Payload>>,
}

/// In-memory workflow registry
pub struct InMemoryWorkflowRegistry {
    runs: DashMap<String, WorkflowRunRecord>,
    payloads: DashMap<String, Vec<Payload>>,
}

impl InMemoryWorkflowRegistry {
    pub fn new() -> Self {
        Self {
            runs: DashMap::new(),
            payloads: DashMap::new(),
        }
    }

    /// Build a registry from captured state
    ///
    /// Every workflow run must carry its `portalRunId`.
    pub fn from_fixture(fixture: RegistryFixture) -> Result<Self> {
        let registry = Self::new();
        for run in fixture.workflow_runs {
            let portal_run_id = run.portal_run_id.clone().ok_or_else(|| {
                RegistryError::Configuration(format!(
                    "fixture workflow run {} has no portalRunId",
                    run.orcabus_id
                ))
            })?;
            registry.insert_run(portal_run_id, run);
        }
        for (run_id, payloads) in fixture.payloads {
            for payload in payloads {
                registry.insert_payload(run_id.clone(), payload);
            }
        }
        Ok(registry)
    }

    /// Parse a JSON fixture document
    pub fn from_fixture_json(json: &str) -> Result<Self> {
        let fixture: RegistryFixture =
            serde_json::from_str(json).map_err(|e| RegistryError::Decode(e.to_string()))?;
        Self::from_fixture(fixture)
    }

    /// Record a workflow run under its portal run id
    pub fn insert_run(&self, portal_run_id: impl Into<String>, run: WorkflowRunRecord) {
        self.runs.insert(portal_run_id.into(), run);
    }

    /// Record a payload; the last one inserted for a run is its latest
    pub fn insert_payload(&self, run_id: impl Into<String>, payload: Payload) {
        self.payloads.entry(run_id.into()).or_default().push(payload);
    }

    pub fn run_count(&self) -> usize {
        self.runs.len()
    }
}

impl Default for InMemoryWorkflowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorkflowRegistry for InMemoryWorkflowRegistry {
    async fn lookup_run_by_portal_id(&self, portal_run_id: &str) -> Result<WorkflowRunRecord> {
        self.runs
            .get(portal_run_id)
            .map(|run| run.clone())
            .ok_or_else(|| RegistryError::WorkflowRunNotFound(portal_run_id.to_string()))
    }

    async fn lookup_latest_payload(&self, run_id: &str) -> Result<Payload> {
        self.payloads
            .get(run_id)
            .and_then(|payloads| payloads.last().cloned())
            .ok_or_else(|| RegistryError::PayloadNotFound(run_id.to_string()))
    }
}
