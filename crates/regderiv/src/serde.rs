//! Serde support for capture dictionaries
//!
//! `Captures` serializes as a map from group name to the list of values
//! captured under it, in name order.
use ::serde::ser::{Serialize, SerializeMap, Serializer};

use crate::captures::Captures;

impl Serialize for Captures {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, values) in self.iter() {
            map.serialize_entry(name, values)?;
        }
        map.end()
    }
}

/// Convert captures to a serde_json::Value
pub fn captures_to_json(captures: &Captures) -> Result<serde_json::Value, String> {
    serde_json::to_value(captures).map_err(|e| format!("Failed to serialize captures: {}", e))
}

/// Convert captures to a JSON string
pub fn captures_to_json_string(captures: &Captures, pretty: bool) -> Result<String, String> {
    let result = if pretty {
        serde_json::to_string_pretty(captures)
    } else {
        serde_json::to_string(captures)
    };
    result.map_err(|e| format!("Failed to serialize captures: {}", e))
}
