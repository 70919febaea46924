//! Cache codec - JSON adapters for the payload encodings
//!
//! Pure text-to-value conversions with no filesystem access. Decoding maps
//! every failure (absent payload, empty payload, malformed JSON, shape
//! mismatch) to the encoding's neutral default; encoding maps failures to a
//! neutral fallback payload. The store layer composes these with the raw
//! text I/O.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::core::model::CacheError;
use crate::core::util::is_empty_payload;

/// Fallback payloads stored when encoding fails
const EMPTY_LIST_JSON: &str = "[]";
const EMPTY_MAP_JSON: &str = "{}";
const NULL_JSON: &str = "null";

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, CacheError> {
    Ok(serde_json::from_str(text)?)
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, CacheError> {
    Ok(serde_json::to_string(value)?)
}

/// Decode a JSON array of string-keyed objects. Absent, empty or
/// undecodable input yields an empty vector.
pub fn records_from_json<T: DeserializeOwned>(text: Option<&str>) -> Vec<HashMap<String, T>> {
    if is_empty_payload(text) {
        return Vec::new();
    }
    match decode(text.unwrap_or_default()) {
        Ok(records) => records,
        Err(err) => {
            debug!("failed to read json: {}", err);
            Vec::new()
        }
    }
}

/// Encode a record list; an encode failure falls back to an empty array.
pub fn records_to_json<T: Serialize>(records: &[HashMap<String, T>]) -> String {
    match encode(records) {
        Ok(json) => json,
        Err(err) => {
            debug!("failed to write json: {}", err);
            EMPTY_LIST_JSON.to_string()
        }
    }
}

/// Decode a single string-keyed object. Absent, empty or undecodable input
/// yields an empty map.
pub fn record_from_json<T: DeserializeOwned>(text: Option<&str>) -> HashMap<String, T> {
    if is_empty_payload(text) {
        return HashMap::new();
    }
    match decode(text.unwrap_or_default()) {
        Ok(record) => record,
        Err(err) => {
            debug!("failed to read json: {}", err);
            HashMap::new()
        }
    }
}

/// Encode a single record; an encode failure falls back to an empty object.
pub fn record_to_json<T: Serialize>(record: &HashMap<String, T>) -> String {
    match encode(record) {
        Ok(json) => json,
        Err(err) => {
            debug!("failed to write json: {}", err);
            EMPTY_MAP_JSON.to_string()
        }
    }
}

/// Decode an arbitrary value into the caller's type. Absent input or any
/// decode failure yields `None`.
pub fn object_from_json<T: DeserializeOwned>(text: Option<&str>) -> Option<T> {
    let text = text?;
    match decode(text) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!("failed to read json: {}", err);
            None
        }
    }
}

/// Encode an arbitrary value; an encode failure falls back to `null`,
/// which decodes back as absent.
pub fn object_to_json<T: Serialize>(value: &T) -> String {
    match encode(value) {
        Ok(json) => json,
        Err(err) => {
            debug!("failed to write json: {}", err);
            NULL_JSON.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_records_from_json_defaults() {
        assert!(records_from_json::<Value>(None).is_empty());
        assert!(records_from_json::<Value>(Some("")).is_empty());
        assert!(records_from_json::<Value>(Some("not json")).is_empty());
        // valid JSON of the wrong shape is also a miss
        assert!(records_from_json::<Value>(Some("{\"a\":1}")).is_empty());
    }

    #[test]
    fn test_records_round_trip() {
        let records: Vec<HashMap<String, Value>> = vec![
            [("id".to_string(), Value::from(1)), ("name".to_string(), Value::from("ada"))]
                .into_iter()
                .collect(),
            [("id".to_string(), Value::from(2)), ("name".to_string(), Value::from("grace"))]
                .into_iter()
                .collect(),
        ];

        let json = records_to_json(&records);
        let back: Vec<HashMap<String, Value>> = records_from_json(Some(&json));
        assert_eq!(back, records);
    }

    #[test]
    fn test_record_from_json_defaults() {
        assert!(record_from_json::<Value>(None).is_empty());
        assert!(record_from_json::<Value>(Some("")).is_empty());
        assert!(record_from_json::<Value>(Some("[1,2]")).is_empty());
    }

    #[test]
    fn test_record_round_trip() {
        let record: HashMap<String, String> =
            [("lang".to_string(), "rust".to_string())].into_iter().collect();
        let json = record_to_json(&record);
        assert_eq!(record_from_json::<String>(Some(&json)), record);
    }

    #[test]
    fn test_object_from_json_defaults() {
        assert_eq!(object_from_json::<u32>(None), None);
        assert_eq!(object_from_json::<u32>(Some("")), None);
        assert_eq!(object_from_json::<u32>(Some("\"ten\"")), None);
        // a stored null reads back as absent
        assert_eq!(object_from_json::<u32>(Some("null")), None);
    }

    #[test]
    fn test_object_round_trip() {
        let json = object_to_json(&vec![1u32, 2, 3]);
        assert_eq!(object_from_json::<Vec<u32>>(Some(&json)), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_encode_failure_falls_back_to_null() {
        struct Opaque;
        impl Serialize for Opaque {
            fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("not serializable"))
            }
        }
        assert_eq!(object_to_json(&Opaque), NULL_JSON);
    }
}
