use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whatever label shape the host uses: a string, a comment object, anything
/// JSON. Defaults to the empty string for newly drawn regions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostLabel(pub Value);

impl Default for HostLabel {
    fn default() -> Self {
        HostLabel(Value::String(String::new()))
    }
}

impl From<Value> for HostLabel {
    fn from(v: Value) -> Self {
        HostLabel(v)
    }
}

impl From<&str> for HostLabel {
    fn from(s: &str) -> Self {
        HostLabel(Value::String(s.to_string()))
    }
}
