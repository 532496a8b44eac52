//! Typed pointers to storage-backed objects
//!
//! The WES request schema does not accept bare URI strings for file inputs.
//! Each one is sent as a CWL-style `{"class": "File", "location": <uri>}`
//! object instead.

use crate::{BridgeError, BridgeResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The only object class the request schema knows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileClass {
    #[default]
    File,
}

/// A `{class: "File", location}` reference
///
/// The location is carried as given; a ready event may hold `null` for an
/// optional file and that is forwarded unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    pub class: FileClass,
    pub location: Value,
}

impl FileReference {
    /// Wrap whatever `location` holds
    pub fn new(location: impl Into<Value>) -> Self {
        Self {
            class: FileClass::File,
            location: location.into(),
        }
    }

    /// Wrap the URI string held in `value`.
    ///
    /// `path` names the field for the error when `value` is not a string.
    pub fn from_uri_value(value: &Value, path: &str) -> BridgeResult<Self> {
        value
            .as_str()
            .map(Self::new)
            .ok_or_else(|| BridgeError::wrong_type(path, "a URI string"))
    }

    pub fn into_value(self) -> Value {
        Value::from(self)
    }
}

impl From<FileReference> for Value {
    fn from(reference: FileReference) -> Self {
        let mut map = serde_json::Map::with_capacity(2);
        map.insert("class".into(), Value::String("File".into()));
        map.insert("location".into(), reference.location);
        Value::Object(map)
    }
}
