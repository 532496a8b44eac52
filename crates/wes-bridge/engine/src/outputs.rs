//! Output locations of a succeeded dragen-wgts-rna analysis
//!
//! Paths are relative to the analysis output URI recorded in the payload's
//! engine parameters.

use serde::Serialize;
use serde_json::Value;
use wes_bridge_types::{BridgeError, BridgeResult};

const RNA_VARIANT_CALLING_SUFFIX: &str = "dragen_wgts_rna_variant_calling";

/// Relative output paths; each field is emitted only when it was derived
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RnaVariantCallingOutputs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dragen_rna_variant_calling_output_rel_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_qc_output_rel_path: Option<String>,
}

impl RnaVariantCallingOutputs {
    /// Derive the output paths from the workflow inputs recorded in a payload
    ///
    /// Fails when `sampleName`, `reference.name` or `reference.structure` is
    /// missing, since the variant calling directory name depends on all three.
    pub fn derive(inputs: &Value) -> BridgeResult<Self> {
        let sample_name = required_str(inputs, &["sampleName"])?;
        let reference_name = required_str(inputs, &["reference", "name"])?;
        let reference_structure = required_str(inputs, &["reference", "structure"])?;

        let variant_calling_dir = [
            sample_name,
            reference_name,
            reference_structure,
            RNA_VARIANT_CALLING_SUFFIX,
        ]
        .join("__");

        Ok(Self {
            dragen_rna_variant_calling_output_rel_path: Some(format!("{}/", variant_calling_dir)),
            multi_qc_output_rel_path: Some(format!("{}_multiqc/", sample_name)),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.dragen_rna_variant_calling_output_rel_path.is_none()
            && self.multi_qc_output_rel_path.is_none()
    }

    pub fn to_value(&self) -> BridgeResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

fn required_str<'a>(inputs: &'a Value, path: &[&str]) -> BridgeResult<&'a str> {
    path.iter()
        .try_fold(inputs, |node, key| node.get(key))
        .and_then(Value::as_str)
        .ok_or_else(|| {
            BridgeError::Derivation(format!(
                "payload inputs have no string `{}`",
                path.join(".")
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn inputs() -> Value {
        json!({
            "sampleName": "L2301197",
            "reference": {"name": "hg38", "structure": "linear", "tarball": "s3://b/t.tar.gz"}
        })
    }

    #[test]
    fn derives_both_paths() {
        let outputs = RnaVariantCallingOutputs::derive(&inputs()).unwrap();
        assert_eq!(
            outputs.dragen_rna_variant_calling_output_rel_path.as_deref(),
            Some("L2301197__hg38__linear__dragen_wgts_rna_variant_calling/")
        );
        assert_eq!(outputs.multi_qc_output_rel_path.as_deref(), Some("L2301197_multiqc/"));
        assert!(!outputs.is_empty());
    }

    #[test]
    fn serializes_present_fields_only() {
        let outputs = RnaVariantCallingOutputs::derive(&inputs()).unwrap();
        assert_eq!(
            outputs.to_value().unwrap(),
            json!({
                "dragenRnaVariantCallingOutputRelPath": "L2301197__hg38__linear__dragen_wgts_rna_variant_calling/",
                "multiQcOutputRelPath": "L2301197_multiqc/"
            })
        );

        let partial = RnaVariantCallingOutputs {
            dragen_rna_variant_calling_output_rel_path: None,
            multi_qc_output_rel_path: Some("L2301197_multiqc/".into()),
        };
        assert_eq!(
            partial.to_value().unwrap(),
            json!({"multiQcOutputRelPath": "L2301197_multiqc/"})
        );
        assert!(RnaVariantCallingOutputs::default().is_empty());
    }

    #[test]
    fn missing_inputs_fail_derivation() {
        for path in [["sampleName", ""], ["reference", "name"], ["reference", "structure"]] {
            let mut broken = inputs();
            match path {
                [key, ""] => {
                    broken.as_object_mut().unwrap().remove(key);
                }
                [parent, key] => {
                    broken[parent].as_object_mut().unwrap().remove(key);
                }
            }
            let err = RnaVariantCallingOutputs::derive(&broken).unwrap_err();
            assert!(matches!(err, BridgeError::Derivation(_)), "{:?}", path);
        }

        let err = RnaVariantCallingOutputs::derive(&json!({"sampleName": 7})).unwrap_err();
        assert!(err.to_string().contains("sampleName"));
    }
}
