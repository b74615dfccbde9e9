//! MQL query documents.
//!
//! Objects keep keys in insertion order (forward edges first, then incoming
//! edges, each in discovery order), so the serialized text is stable for a
//! given graph.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MqlValue {
    /// Untagged literal or identifier.
    Text(String),
    /// Language-tagged literal: `{"value": ..., "lang": "/lang/<code>"}`.
    LangText { value: String, lang: String },
    /// Node-valued relation; always a list, even for one target.
    Objects(Vec<MqlObject>),
}

impl MqlValue {
    /// Short name of the variant, for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            MqlValue::Text(_) => "text",
            MqlValue::LangText { .. } => "lang_text",
            MqlValue::Objects(_) => "objects",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MqlObject {
    entries: Vec<(String, MqlValue)>,
}

impl MqlObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&MqlValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MqlValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Record `value` under `key`.
    ///
    /// Two node-valued entries under one key are concatenated (a multi-valued
    /// relation). Any other collision, including a node list meeting a
    /// literal in either order, replaces the earlier value in place and
    /// returns it.
    pub fn insert(&mut self, key: String, value: MqlValue) -> Option<MqlValue> {
        let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) else {
            self.entries.push((key, value));
            return None;
        };
        match (&mut slot.1, value) {
            (MqlValue::Objects(existing), MqlValue::Objects(more)) => {
                existing.extend(more);
                None
            }
            (existing, value) => Some(std::mem::replace(existing, value)),
        }
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        // Objects and strings always serialize.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Serialize for MqlObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for MqlValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MqlValue::Text(text) => serializer.serialize_str(text),
            MqlValue::LangText { value, lang } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("value", value)?;
                map.serialize_entry("lang", lang)?;
                map.end()
            }
            MqlValue::Objects(objects) => {
                let mut seq = serializer.serialize_seq(Some(objects.len()))?;
                for object in objects {
                    seq.serialize_element(object)?;
                }
                seq.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(key: &str, value: MqlValue) -> MqlObject {
        let mut o = MqlObject::new();
        o.insert(key.to_string(), value);
        o
    }

    #[test]
    fn serializes_in_insertion_order() {
        let mut o = MqlObject::new();
        o.insert("/z".to_string(), MqlValue::Text("1".to_string()));
        o.insert("/a".to_string(), MqlValue::Text("2".to_string()));
        assert_eq!(serde_json::to_string(&o).unwrap(), r#"{"/z":"1","/a":"2"}"#);
    }

    #[test]
    fn node_valued_entries_concatenate() {
        let mut o = MqlObject::new();
        let a = obj("/x", MqlValue::Text("a".to_string()));
        let b = obj("/x", MqlValue::Text("b".to_string()));
        assert!(o.insert("/r".to_string(), MqlValue::Objects(vec![a])).is_none());
        assert!(o.insert("/r".to_string(), MqlValue::Objects(vec![b])).is_none());
        assert_eq!(o.len(), 1);
        assert_eq!(o.to_json_value(), json!({ "/r": [ { "/x": "a" }, { "/x": "b" } ] }));
    }

    #[test]
    fn literal_entries_overwrite_in_place() {
        let mut o = MqlObject::new();
        o.insert("/a".to_string(), MqlValue::Text("old".to_string()));
        o.insert("/b".to_string(), MqlValue::Text("b".to_string()));
        let replaced = o.insert("/a".to_string(), MqlValue::Text("new".to_string()));
        assert_eq!(replaced, Some(MqlValue::Text("old".to_string())));
        assert_eq!(o.keys().collect::<Vec<_>>(), vec!["/a", "/b"]);
        assert_eq!(o.get("/a"), Some(&MqlValue::Text("new".to_string())));
    }

    #[test]
    fn mixed_kind_collision_replaces_in_place() {
        let mut o = MqlObject::new();
        let nested = obj("/x", MqlValue::Text("a".to_string()));
        o.insert("/r".to_string(), MqlValue::Objects(vec![nested.clone()]));
        let replaced = o.insert("/r".to_string(), MqlValue::Text("lit".to_string()));
        assert_eq!(replaced, Some(MqlValue::Objects(vec![nested])));
        assert_eq!(replaced.map(|v| v.kind()), Some("objects"));

        let replaced = o.insert(
            "/r".to_string(),
            MqlValue::Objects(vec![obj("/y", MqlValue::Text("b".to_string()))]),
        );
        assert_eq!(replaced.map(|v| v.kind()), Some("text"));
        assert_eq!(o.to_json_value(), json!({ "/r": [ { "/y": "b" } ] }));
    }

    #[test]
    fn lang_text_is_value_lang_object() {
        let o = obj(
            "/type/object/name",
            MqlValue::LangText {
                value: "Paris".to_string(),
                lang: "/lang/en".to_string(),
            },
        );
        assert_eq!(
            o.to_json_value(),
            json!({ "/type/object/name": { "value": "Paris", "lang": "/lang/en" } })
        );
    }
}
