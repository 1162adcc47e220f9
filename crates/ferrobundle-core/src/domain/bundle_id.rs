use std::borrow::Cow;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque bundle identifier.
///
/// No format is enforced locally; the server decides whether an id exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct BundleId(String);

impl BundleId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form for use as a single URL path segment.
    pub fn path_segment(&self) -> Cow<'_, str> {
        urlencoding::encode(&self.0)
    }
}

impl Display for BundleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for BundleId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for BundleId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<u64> for BundleId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<BundleId> for String {
    fn from(value: BundleId) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for BundleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self(text),
            Raw::Number(number) => Self(number.to_string()),
        })
    }
}
