//! ICAv2 WES state change → workflow run update

use crate::clock::{format_event_timestamp, Clock, SystemClock};
use crate::outputs::RnaVariantCallingOutputs;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use wes_bridge_registry::WorkflowRegistry;
use wes_bridge_types::{BridgeResult, ExecutionStateChangeEvent, WorkflowRunUpdateEvent};

/// Workflow keys renamed on their way into the update event
const WORKFLOW_KEY_RENAMES: [(&str, &str); 2] =
    [("workflowName", "name"), ("workflowVersion", "version")];

/// Turns WES analysis state changes into workflow run updates
///
/// Holds no state between calls; the registry is queried afresh for every
/// event, so one translator may serve concurrent invocations.
#[derive(Clone)]
pub struct StateChangeTranslator {
    registry: Arc<dyn WorkflowRegistry>,
    clock: Arc<dyn Clock>,
}

impl StateChangeTranslator {
    pub fn new(registry: Arc<dyn WorkflowRegistry>) -> Self {
        Self {
            registry,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build the update event for one state change
    ///
    /// Looks up the workflow run by the event's portal run id, then the
    /// run's latest payload. On SUCCEEDED the payload gains the derived
    /// output paths; any other status forwards the payload untouched.
    #[instrument(skip(self, event), fields(status = %event.status))]
    pub async fn translate(
        &self,
        event: &ExecutionStateChangeEvent,
    ) -> BridgeResult<WorkflowRunUpdateEvent> {
        let portal_run_id = event.portal_run_id()?;

        let run = self.registry.lookup_run_by_portal_id(portal_run_id).await?;
        let mut payload = self.registry.lookup_latest_payload(&run.orcabus_id).await?;
        debug!(
            portal_run_id = %portal_run_id,
            orcabus_id = %run.orcabus_id,
            payload_version = %payload.version,
            "Resolved workflow run and latest payload"
        );

        if event.status.is_succeeded() {
            let outputs =
                RnaVariantCallingOutputs::derive(payload.data.inputs().unwrap_or(&Value::Null))?;
            if !outputs.is_empty() {
                payload.data.set_outputs(outputs.to_value()?);
            }
        }

        let update = WorkflowRunUpdateEvent {
            status: event.status.clone(),
            timestamp: format_event_timestamp(self.clock.now()),
            portal_run_id: portal_run_id.to_string(),
            workflow: rename_workflow_keys(&run.workflow),
            workflow_run_name: run.workflow_run_name,
            libraries: run.libraries,
            payload,
        };

        info!(
            portal_run_id = %update.portal_run_id,
            status = %update.status,
            "Translated WES state change"
        );
        Ok(update)
    }
}

/// Shallow copy of a workflow record with `workflowName`/`workflowVersion`
/// renamed to `name`/`version`
pub fn rename_workflow_keys(workflow: &Map<String, Value>) -> Map<String, Value> {
    workflow
        .iter()
        .map(|(key, value)| {
            let key = WORKFLOW_KEY_RENAMES
                .iter()
                .find(|(from, _)| *from == key.as_str())
                .map_or_else(|| key.clone(), |(_, to)| to.to_string());
            (key, value.clone())
        })
        .collect()
}
