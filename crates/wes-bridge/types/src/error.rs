//! Error types for the WES bridge

/// Errors that can occur while translating an event
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// A required field is missing or has the wrong type on the inbound event
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The workflow registry holds no matching workflow run or payload
    #[error("Not found: {0}")]
    NotFound(String),

    /// Output paths could not be derived from the recorded payload inputs
    #[error("Cannot derive outputs: {0}")]
    Derivation(String),

    /// The workflow registry could not be reached or answered garbage
    #[error("Registry error: {0}")]
    Registry(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BridgeError {
    /// A required field at `path` is absent
    pub fn missing_field(path: &str) -> Self {
        Self::MalformedInput(format!("missing required field `{}`", path))
    }

    /// The field at `path` exists but is not of the `expected` JSON type
    pub fn wrong_type(path: &str, expected: &str) -> Self {
        Self::MalformedInput(format!("field `{}` must be {}", path, expected))
    }
}

/// Result type alias for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = BridgeError::missing_field("reference.tarball");
        assert_eq!(
            err.to_string(),
            "Malformed input: missing required field `reference.tarball`"
        );

        let err = BridgeError::wrong_type("sequenceData.fastqListRows", "an array");
        assert_eq!(
            err.to_string(),
            "Malformed input: field `sequenceData.fastqListRows` must be an array"
        );

        let err = BridgeError::NotFound("workflow run for portal run id 20250417abcd1234".into());
        assert_eq!(
            err.to_string(),
            "Not found: workflow run for portal run id 20250417abcd1234"
        );
    }

    #[test]
    fn serde_errors_convert() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: BridgeError = parse.unwrap_err().into();
        assert!(matches!(err, BridgeError::Serialization(_)));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BridgeError>();
    }
}
