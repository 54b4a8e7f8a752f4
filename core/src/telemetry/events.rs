use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single named game event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryEvent {
    /// Event name; missing or non-string names read as empty
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(default)]
    pub data: Value,
}

impl TelemetryEvent {
    pub fn new(name: impl Into<String>, data: Value) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Event with no payload
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, Value::Null)
    }
}

/// Events delivered together in one host callback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TelemetryBatch {
    #[serde(default)]
    pub events: Vec<TelemetryEvent>,
}

impl TelemetryBatch {
    pub fn new(events: Vec<TelemetryEvent>) -> Self {
        Self { events }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(|e| e.name.as_str())
    }
}

/// Point-in-time snapshot of subscribed features.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InfoUpdate(pub Map<String, Value>);

impl InfoUpdate {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<Map<String, Value>> for InfoUpdate {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(name) => name,
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_name_reads_as_empty() {
        let event: TelemetryEvent = serde_json::from_value(json!({ "data": "5" })).unwrap();
        assert_eq!(event.name, "");
        assert_eq!(event.data, json!("5"));
    }

    #[test]
    fn non_string_name_reads_as_empty() {
        let batch: TelemetryBatch = serde_json::from_value(json!({
            "events": [{ "name": 42 }, { "name": null }, { "name": "kill" }]
        }))
        .unwrap();

        let names: Vec<_> = batch.names().collect();
        assert_eq!(names, vec!["", "", "kill"]);
    }

    #[test]
    fn info_update_keeps_arbitrary_keys() {
        let info: InfoUpdate =
            serde_json::from_value(json!({ "phase": "laning", "me": { "level": 3 } })).unwrap();
        assert_eq!(info.get("phase"), Some(&json!("laning")));
        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({ "phase": "laning", "me": { "level": 3 } })
        );
    }
}
