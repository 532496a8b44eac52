//! READY event inputs → ICAv2 WES request inputs

use crate::case::snake_case_keys;
use serde_json::{Map, Value};
use tracing::debug;
use wes_bridge_types::{BridgeError, BridgeResult, FileReference, RequestEventDetail};

const SEQUENCE_DATA: &str = "sequenceData";
const FASTQ_LIST_ROWS: &str = "fastqListRows";
const REFERENCE: &str = "reference";
const TARBALL: &str = "tarball";

/// Top-level inputs that hold a URI when present
const OPTIONAL_FILE_INPUTS: [&str; 2] = ["oraReference", "annotationFile"];

/// Read-URI keys of a fastq list row and the WES names they map to
const READ_FILE_RENAMES: [(&str, &str); 2] = [("read1FileUri", "read_1"), ("read2FileUri", "read_2")];

/// Build the WES request inputs from READY event inputs
///
/// File-bearing fields become [`FileReference`]s, fastq list row read URIs
/// are renamed to `read_1`/`read_2`, then every key is converted to
/// snake_case. Fields this function does not know about pass through with
/// only their keys converted.
pub fn build_request(inputs: Value) -> BridgeResult<RequestEventDetail> {
    let mut inputs = match inputs {
        Value::Object(map) => map,
        _ => return Err(BridgeError::wrong_type("inputs", "an object")),
    };

    wrap_fastq_list_rows(&mut inputs)?;
    wrap_reference_tarball(&mut inputs)?;

    for field in OPTIONAL_FILE_INPUTS {
        if let Some(value) = inputs.get_mut(field) {
            *value = FileReference::new(value.take()).into_value();
        }
    }

    Ok(RequestEventDetail {
        inputs: snake_case_keys(Value::Object(inputs)),
    })
}

fn wrap_fastq_list_rows(inputs: &mut Map<String, Value>) -> BridgeResult<()> {
    let sequence_data = match inputs.get_mut(SEQUENCE_DATA) {
        None => return Ok(()),
        Some(Value::Object(sequence_data)) => sequence_data,
        Some(_) => return Err(BridgeError::wrong_type(SEQUENCE_DATA, "an object")),
    };

    let path = format!("{}.{}", SEQUENCE_DATA, FASTQ_LIST_ROWS);
    let rows = match sequence_data.get_mut(FASTQ_LIST_ROWS) {
        None => return Ok(()),
        Some(Value::Array(rows)) => rows,
        Some(_) => return Err(BridgeError::wrong_type(&path, "an array")),
    };

    for (index, row) in rows.iter_mut().enumerate() {
        let row_path = format!("{}[{}]", path, index);
        let fields = match row {
            Value::Object(fields) => std::mem::take(fields),
            _ => return Err(BridgeError::wrong_type(&row_path, "an object")),
        };
        *row = Value::Object(rename_read_files(fields));
    }

    debug!(rows = rows.len(), "Wrapped fastq list row read files");
    Ok(())
}

/// Rename and wrap the read URIs of one row, leaving other keys untouched
fn rename_read_files(fields: Map<String, Value>) -> Map<String, Value> {
    fields
        .into_iter()
        .map(|(key, value)| {
            match READ_FILE_RENAMES.iter().find(|(from, _)| *from == key.as_str()) {
                Some((_, to)) => (to.to_string(), FileReference::new(value).into_value()),
                None => (key, value),
            }
        })
        .collect()
}

fn wrap_reference_tarball(inputs: &mut Map<String, Value>) -> BridgeResult<()> {
    let path = format!("{}.{}", REFERENCE, TARBALL);
    let reference = match inputs.get_mut(REFERENCE) {
        Some(Value::Object(reference)) => reference,
        Some(_) => return Err(BridgeError::wrong_type(REFERENCE, "an object")),
        None => return Err(BridgeError::missing_field(&path)),
    };
    let tarball = reference
        .get_mut(TARBALL)
        .ok_or_else(|| BridgeError::missing_field(&path))?;
    *tarball = FileReference::from_uri_value(tarball, &path)?.into_value();
    Ok(())
}
