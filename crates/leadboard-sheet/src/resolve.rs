//! Tolerant field resolution over raw sheet records.

use serde_json::{Map, Value};

/// One raw row exactly as the sheet export produced it: string keys (with
/// whatever whitespace the export left in them) to arbitrary JSON scalars.
pub type RawRecord = Map<String, Value>;

/// Looks up `key` tolerating the export's whitespace quirks: exact match
/// first, then the key with a single trailing space appended, then any
/// record key whose trimmed form equals `key`. Returns `None` only when
/// no spelling variant is present.
#[must_use]
pub fn resolve_key<'a>(record: &'a RawRecord, key: &str) -> Option<&'a Value> {
    if let Some(value) = record.get(key) {
        return Some(value);
    }
    if let Some(value) = record.get(&format!("{key} ")) {
        return Some(value);
    }
    record
        .iter()
        .find_map(|(k, v)| (k.trim() == key).then_some(v))
}

/// Resolves the first alias with a non-empty value, coercing JSON scalars
/// to their string form. Missing keys and `null` resolve to the empty
/// string; this never fails.
#[must_use]
pub fn resolve_field(record: &RawRecord, aliases: &[&str]) -> String {
    aliases
        .iter()
        .find_map(|alias| {
            let text = coerce(resolve_key(record, alias)?);
            (!text.is_empty()).then_some(text)
        })
        .unwrap_or_default()
}

/// String form of a JSON scalar. Numbers keep their JSON rendering (the
/// sheet stores numeric columns as numbers, the dashboard wants strings).
fn coerce(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        // Arrays/objects never appear in the export; keep the data visible
        // rather than dropping it.
        other => other.to_string(),
    }
}
