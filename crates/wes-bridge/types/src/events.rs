//! Event bus constants and the publication envelope

use crate::BridgeResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default bus and source for events this service publishes
pub const EVENT_BUS_NAME: &str = "OrcaBusMain";
pub const EVENT_SOURCE: &str = "orcabus.dragenwgtsrna";

pub const WORKFLOW_RUN_UPDATE_DETAIL_TYPE: &str = "WorkflowRunUpdate";
pub const ICAV2_WES_REQUEST_DETAIL_TYPE: &str = "Icav2WesRequest";

/// An event ready to be put on the bus
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventEnvelope {
    pub event_bus_name: String,
    pub source: String,
    pub detail_type: String,
    pub detail: Value,
}

impl EventEnvelope {
    pub fn new(
        event_bus_name: impl Into<String>,
        source: impl Into<String>,
        detail_type: impl Into<String>,
        detail: &impl Serialize,
    ) -> BridgeResult<Self> {
        Ok(Self {
            event_bus_name: event_bus_name.into(),
            source: source.into(),
            detail_type: detail_type.into(),
            detail: serde_json::to_value(detail)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_uses_pascal_case_keys() {
        let envelope = EventEnvelope::new(
            EVENT_BUS_NAME,
            EVENT_SOURCE,
            WORKFLOW_RUN_UPDATE_DETAIL_TYPE,
            &json!({"workflowRunUpdateEvent": {}}),
        )
        .unwrap();
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "EventBusName": "OrcaBusMain",
                "Source": "orcabus.dragenwgtsrna",
                "DetailType": "WorkflowRunUpdate",
                "Detail": {"workflowRunUpdateEvent": {}}
            })
        );
    }

    #[test]
    fn envelope_keeps_custom_bus() {
        let envelope = EventEnvelope::new(
            "OrcaBusTest",
            EVENT_SOURCE,
            ICAV2_WES_REQUEST_DETAIL_TYPE,
            &json!({"inputs": {}}),
        )
        .unwrap();
        assert_eq!(envelope.event_bus_name, "OrcaBusTest");
        assert_eq!(envelope.detail_type, "Icav2WesRequest");
        assert_eq!(envelope.detail, json!({"inputs": {}}));
    }
}
