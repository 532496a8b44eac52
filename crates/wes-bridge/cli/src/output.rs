//! Output formatting utilities

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use wes_bridge_types::EventEnvelope;

/// How an emitted detail is written to stdout
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// Wrap the detail in an event bus envelope
    pub envelope: bool,
    pub pretty: bool,
    pub event_bus_name: String,
    pub source: String,
}

impl OutputOptions {
    /// Render a detail of the given detail type
    pub fn render(&self, detail_type: &str, detail: Value) -> Result<String> {
        if self.envelope {
            let envelope =
                EventEnvelope::new(&self.event_bus_name, &self.source, detail_type, &detail)?;
            self.to_json(&envelope)
        } else {
            self.to_json(&detail)
        }
    }

    pub fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        Ok(if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        })
    }
}

/// Read a JSON document from `path`, or stdin when no path is given
pub fn read_json_input(path: Option<&str>) -> Result<Value> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path, e))?,
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            raw
        }
    };
    serde_json::from_str(&raw).map_err(|e| anyhow::anyhow!("input is not valid JSON: {}", e))
}
