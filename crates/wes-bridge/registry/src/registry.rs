//! Workflow registry trait

use crate::error::Result;
use async_trait::async_trait;
use wes_bridge_types::{Payload, WorkflowRunRecord};

/// Read-only view of the workflow manager
///
/// Both queries are idempotent and side-effect free.
#[async_trait]
pub trait WorkflowRegistry: Send + Sync {
    /// Get the workflow run correlated with a portal run id
    async fn lookup_run_by_portal_id(&self, portal_run_id: &str) -> Result<WorkflowRunRecord>;

    /// Get the most recently recorded payload of a workflow run
    async fn lookup_latest_payload(&self, run_id: &str) -> Result<Payload>;
}
