//! Versioned workflow run payloads
//!
//! A payload's `data` is forwarded verbatim into the update event, so it is
//! held as a raw JSON map with typed accessors for the keys the bridge reads
//! or writes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const INPUTS_KEY: &str = "inputs";
const OUTPUTS_KEY: &str = "outputs";

/// The latest payload recorded for a workflow run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    /// Payload schema version, e.g. `2025.08.05`
    pub version: String,
    pub data: PayloadData,
}

/// `{inputs, engineParameters, tags, outputs?}`, plus anything else recorded
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayloadData(Map<String, Value>);

impl PayloadData {
    pub fn inputs(&self) -> Option<&Value> {
        self.0.get(INPUTS_KEY)
    }

    pub fn outputs(&self) -> Option<&Value> {
        self.0.get(OUTPUTS_KEY)
    }

    /// Replace any previously recorded outputs
    pub fn set_outputs(&mut self, outputs: Value) {
        self.0.insert(OUTPUTS_KEY.to_string(), outputs);
    }
}

impl From<Map<String, Value>> for PayloadData {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
