// SPDX-License-Identifier: MIT OR Apache-2.0

//! Re-keying of JSON record lists.
//!
//! API responses are lists of objects; scripts usually want them keyed by a token,
//! a name, or a combination of fields.

use indexmap::IndexMap;
use serde_json::Value;

/// One component of a composite key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyPart {
    /// A top-level field of the record.
    Field(String),
    /// A field of a nested object: `record[outer][inner]`.
    Nested {
        /// Name of the nested object
        outer: String,
        /// Field inside the nested object
        inner: String,
    },
}

/// Describes how the key of each record is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeySpec {
    /// Key by the value of one top-level field.
    Field(String),
    /// Key by a tuple of parts.
    Composite(Vec<KeyPart>),
}

/// A key produced by [`index_by`].
///
/// String values are used verbatim, other JSON values in their compact JSON form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndexKey {
    /// Key from `KeySpec::Field`.
    Single(String),
    /// Key from `KeySpec::Composite`. `None` marks a nested value that was missing.
    Composite(Vec<Option<String>>),
}

fn key_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn composite_key(record: &serde_json::Map<String, Value>, parts: &[KeyPart]) -> Option<IndexKey> {
    let mut key = Vec::with_capacity(parts.len());
    for part in parts {
        match part {
            KeyPart::Field(name) => {
                let value = record.get(name)?;
                if is_truthy(value) {
                    key.push(Some(key_text(value)));
                }
            }
            KeyPart::Nested { outer, inner } => {
                if let Some(nested) = record.get(outer).filter(|v| is_truthy(v)) {
                    key.push(nested.get(inner).map(key_text));
                }
            }
        }
    }
    Some(IndexKey::Composite(key))
}

/// Re-keys a list of JSON objects.
///
/// Later records replace earlier ones with the same key. Records that are not
/// objects, or that lack a field the key names, are skipped with an error log.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use uacfg::util::{index_by, IndexKey, KeySpec};
///
/// let projects = vec![
///     json!({"token": "t1", "name": "api"}),
///     json!({"token": "t2", "name": "web"}),
/// ];
/// let by_token = index_by(projects, &KeySpec::Field("token".to_string()));
///
/// assert_eq!(by_token[&IndexKey::Single("t2".to_string())]["name"], "web");
/// ```
pub fn index_by<I>(records: I, spec: &KeySpec) -> IndexMap<IndexKey, Value>
where
    I: IntoIterator<Item = Value>,
{
    let mut indexed = IndexMap::new();
    for record in records {
        let key = match (&record, spec) {
            (Value::Object(map), KeySpec::Field(name)) => {
                map.get(name).map(|v| IndexKey::Single(key_text(v)))
            }
            (Value::Object(map), KeySpec::Composite(parts)) => composite_key(map, parts),
            _ => None,
        };
        match key {
            Some(key) => {
                indexed.insert(key, record);
            }
            None => tracing::error!("Key {:?} was not found in record; skipping it", spec),
        }
    }
    indexed
}
