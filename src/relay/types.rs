use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// The host envelope. Only `body` is read, everything else is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InboundEvent {
    pub body: String,
}

impl InboundEvent {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Reads an arbitrary host envelope. A missing or non-string `body`
    /// yields an empty body rather than an error.
    pub fn from_value(envelope: &Value) -> Self {
        let body = envelope
            .get("body")
            .and_then(Value::as_str)
            .unwrap_or_default();
        Self::new(body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FormValue {
    fn push(&mut self, value: String) {
        match self {
            FormValue::Single(first) => {
                let first = std::mem::take(first);
                *self = FormValue::Multiple(vec![first, value]);
            }
            FormValue::Multiple(values) => values.push(value),
        }
    }
}

/// Form fields keyed by name, serialized as a JSON object in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPayload {
    fields: Vec<(String, FormValue)>,
}

impl ParsedPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value; a repeated key turns its entry into an array.
    pub fn insert(&mut self, key: String, value: String) {
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => existing.push(value),
            None => self.fields.push((key, FormValue::Single(value))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FormValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

}

impl Serialize for ParsedPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// The normalized response handed back to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayResponse {
    pub is_base64_encoded: bool,
    pub status_code: u16,
    pub status_description: String,
    pub headers: HashMap<String, String>,
    pub body: Value,
}

impl RelayResponse {
    pub fn new(status_code: u16, status_description: &str, body: Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            is_base64_encoded: false,
            status_code,
            status_description: status_description.to_string(),
            headers,
            body,
        }
    }
}
