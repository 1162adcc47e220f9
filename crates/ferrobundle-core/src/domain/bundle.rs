use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Titled collection of stocks, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Required; an absent or `null` array is a decode error.
    pub stocks: Vec<Stock>,
}

impl Bundle {
    pub fn new(title: impl Into<String>, stocks: Vec<Stock>) -> Self {
        Self {
            title: title.into(),
            description: None,
            icon: None,
            stocks,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One named, symbol-tagged, priced record within a bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub symbol: String,
    #[serde(default)]
    pub price: Price,
}

impl Stock {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, price: impl Into<Price>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            price: price.into(),
        }
    }
}

/// Price exactly as the server sent it.
///
/// Numbers keep their JSON form so `120` renders as `120`, not `120.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Price {
    Number(Number),
    Text(String),
    #[default]
    Missing,
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => Display::fmt(number, f),
            Self::Text(text) => f.write_str(text),
            Self::Missing => Ok(()),
        }
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Missing, Self::Number)
    }
}

impl From<&str> for Price {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Price {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => Self::Missing,
            Value::Number(number) => Self::Number(number),
            Value::String(text) => Self::Text(text),
            other => Self::Text(other.to_string()),
        })
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}
