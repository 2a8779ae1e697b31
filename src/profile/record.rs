use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use super::ignore::IgnoreSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TagValue {
    Scalar(Value),
    Identified { id: Value, val: Value },
}

impl TagValue {
    pub fn from_raw(raw: Value, include_hex_ids: bool) -> Self {
        match raw {
            Value::Object(fields) if include_hex_ids => Self::from_identified_object(fields),
            other => Self::Scalar(other),
        }
    }

    fn from_identified_object(fields: Map<String, Value>) -> Self {
        if fields.len() == 2 {
            if let (Some(id), Some(val)) = (fields.get("id").cloned(), fields.get("val").cloned())
            {
                return Self::Identified { id, val };
            }
        }

        Self::Scalar(Value::Object(fields))
    }

    pub fn payload(&self) -> &Value {
        match self {
            Self::Scalar(value) => value,
            Self::Identified { val, .. } => val,
        }
    }

    pub fn payload_text(&self) -> Option<&str> {
        self.payload().as_str()
    }

    pub fn set_payload(&mut self, value: Value) {
        match self {
            Self::Scalar(current) => *current = value,
            Self::Identified { val, .. } => *val = value,
        }
    }

    pub fn id(&self) -> Option<&Value> {
        match self {
            Self::Scalar(_) => None,
            Self::Identified { id, .. } => Some(id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProfileRecord {
    tags: BTreeMap<String, TagValue>,
}

impl ProfileRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: Map<String, Value>, include_hex_ids: bool) -> Self {
        let tags = raw
            .into_iter()
            .map(|(name, value)| (name, TagValue::from_raw(value, include_hex_ids)))
            .collect();

        Self { tags }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: TagValue) {
        self.tags.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.tags.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut TagValue> {
        self.tags.get_mut(name)
    }

    pub fn strip_ignored(&mut self, ignore: &IgnoreSet) {
        self.tags.retain(|name, _| !ignore.contains(name));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagValue)> {
        self.tags.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
