//! Raw event entry points
//!
//! Each handler takes the inbound event detail as JSON and returns the
//! outbound detail as JSON, ready to be wrapped for publication.

use crate::request::build_request;
use crate::translator::StateChangeTranslator;
use serde_json::Value;
use tracing::instrument;
use wes_bridge_types::{BridgeError, BridgeResult, StateChangeEventDetail, WorkflowRunUpdateDetail};

const INPUTS: &str = "inputs";

/// `{inputs}` of a READY event → `{inputs}` of an ICAv2 WES request
#[instrument(skip_all)]
pub fn handle_ready_event(mut event: Value) -> BridgeResult<Value> {
    let inputs = match event.get_mut(INPUTS).map(Value::take) {
        Some(inputs @ Value::Object(_)) => inputs,
        None | Some(Value::Null) => return Err(BridgeError::missing_field(INPUTS)),
        Some(_) => return Err(BridgeError::wrong_type(INPUTS, "an object")),
    };

    Ok(serde_json::to_value(build_request(inputs)?)?)
}

/// `{icav2WesStateChangeEvent}` → `{workflowRunUpdateEvent}`
#[instrument(skip_all)]
pub async fn handle_state_change_event(
    event: Value,
    translator: &StateChangeTranslator,
) -> BridgeResult<Value> {
    let detail: StateChangeEventDetail = serde_json::from_value(event)
        .map_err(|e| BridgeError::MalformedInput(format!("state change event: {}", e)))?;

    let update = translator
        .translate(&detail.icav2_wes_state_change_event)
        .await?;
    Ok(serde_json::to_value(WorkflowRunUpdateDetail::from(update))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use std::sync::Arc;
    use wes_bridge_registry::InMemoryWorkflowRegistry;

    fn translator() -> StateChangeTranslator {
        let registry = InMemoryWorkflowRegistry::from_fixture_json(
            &json!({
                "workflowRuns": [{
                    "orcabusId": "wfr.01J8ZXQ",
                    "portalRunId": "20250805abcd1234",
                    "workflow": {"orcabusId": "wfl.01J8ZX0", "workflowName": "dragen-wgts-rna", "workflowVersion": "4.4.4"},
                    "workflowRunName": "umccr--automated--dragen-wgts-rna--4-4-4--20250805abcd1234",
                    "libraries": []
                }],
                "payloads": {
                    "wfr.01J8ZXQ": [{
                        "version": "2025.08.05",
                        "data": {"inputs": {"sampleName": "S1", "reference": {"name": "hg38", "structure": "graph"}}}
                    }]
                }
            })
            .to_string(),
        )
        .unwrap();
        let at = Utc.with_ymd_and_hms(2025, 8, 5, 0, 0, 0).unwrap();
        StateChangeTranslator::new(Arc::new(registry)).with_clock(Arc::new(FixedClock(at)))
    }

    #[test]
    fn ready_event_returns_request_inputs() {
        let event = json!({
            "inputs": {"sampleName": "S1", "reference": {"name": "hg38", "tarball": "s3://b/ref.tar.gz"}},
            "engineParameters": {"outputUri": "s3://b/out/"}
        });
        let detail = handle_ready_event(event).unwrap();
        assert_eq!(
            detail,
            json!({"inputs": {
                "sample_name": "S1",
                "reference": {"name": "hg38", "tarball": {"class": "File", "location": "s3://b/ref.tar.gz"}}
            }})
        );
    }

    #[test]
    fn ready_event_without_inputs_is_malformed() {
        for event in [json!({}), json!({"inputs": null}), json!({"inputs": [1]}), json!("text")] {
            let err = handle_ready_event(event).unwrap_err();
            assert!(matches!(err, BridgeError::MalformedInput(_)));
        }
    }

    #[tokio::test]
    async fn state_change_returns_update_event() {
        let event = json!({
            "icav2WesStateChangeEvent": {
                "id": "iwa.1",
                "status": "SUCCEEDED",
                "tags": {"portalRunId": "20250805abcd1234"}
            }
        });
        let detail = handle_state_change_event(event, &translator()).await.unwrap();
        let update = &detail["workflowRunUpdateEvent"];
        assert_eq!(update["status"], "SUCCEEDED");
        assert_eq!(update["timestamp"], "2025-08-05T00:00:00Z");
        assert_eq!(update["portalRunId"], "20250805abcd1234");
        assert_eq!(update["workflow"]["name"], "dragen-wgts-rna");
        assert_eq!(
            update["payload"]["data"]["outputs"]["multiQcOutputRelPath"],
            "S1_multiqc/"
        );
        assert_eq!(
            update["payload"]["data"]["outputs"]["dragenRnaVariantCallingOutputRelPath"],
            "S1__hg38__graph__dragen_wgts_rna_variant_calling/"
        );
    }

    #[tokio::test]
    async fn state_change_without_event_is_malformed() {
        let err = handle_state_change_event(json!({"other": 1}), &translator())
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::MalformedInput(_)));
        assert!(err.to_string().contains("icav2WesStateChangeEvent"));

        let err = handle_state_change_event(json!({"icav2WesStateChangeEvent": null}), &translator())
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::MalformedInput(_)));

        let err = handle_state_change_event(
            json!({"icav2WesStateChangeEvent": {"tags": {"portalRunId": "x"}}}),
            &translator(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, BridgeError::MalformedInput(_)));
    }
}
