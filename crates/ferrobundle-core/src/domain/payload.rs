use serde::de;
use serde_json::Value;

use super::Bundle;

/// Decoded `/bundle/{id}` response body.
#[derive(Debug, Clone, PartialEq)]
pub enum BundlePayload {
    Bundle(Bundle),
    /// Body carried a truthy `error` field; the marker value is kept as sent.
    NotFound { marker: Value },
}

impl BundlePayload {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    /// The error marker wins over any other field, whatever the HTTP status was.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if let Some(marker) = value.get("error").filter(|marker| is_truthy(marker)) {
            return Ok(Self::NotFound {
                marker: marker.clone(),
            });
        }
        if !value.is_object() {
            return Err(de::Error::custom("bundle payload must be a JSON object"));
        }

        serde_json::from_value(value).map(Self::Bundle)
    }

    pub fn into_bundle(self) -> Option<Bundle> {
        match self {
            Self::Bundle(bundle) => Some(bundle),
            Self::NotFound { .. } => None,
        }
    }
}

/// Script-style truthiness: `null`, `false`, `0` and `""` are falsy,
/// everything else (including empty arrays and objects) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
