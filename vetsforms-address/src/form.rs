//! Caller-owned form-state tree with null-safe path access.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::path::{PathSegment, parse_path};

/// Mutable tree of all current field values for a multi-step form.
///
/// Reads never fail: any missing step along a path resolves to absent.
/// Writes create intermediate containers so a dependent value can be
/// forced before the user has touched the enclosing record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState(Value);

impl FormState {
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse form-state from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self)
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Null-safe lookup of the value at a key path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        let segments = parse_path(path)?;
        let mut current = &self.0;
        for segment in &segments {
            current = match segment {
                PathSegment::Key(key) => current.as_object()?.get(key)?,
                PathSegment::Index(index) => current.as_array()?.get(*index)?,
            };
        }
        Some(current)
    }

    /// String value at a path; absent or non-string reads as `None`.
    #[must_use]
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// Boolean flag at a path; absent or non-boolean reads as `false`.
    #[must_use]
    pub fn get_flag(&self, path: &str) -> bool {
        self.get(path).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Write a value at a key path, creating intermediate containers.
    ///
    /// Object steps replace any non-object already in the way; array
    /// steps pad with nulls up to the target index. A path with an
    /// unresolved placeholder writes nothing.
    pub fn set(&mut self, path: &str, value: Value) {
        let Some(segments) = parse_path(path) else {
            return;
        };
        let Some((last, walk)) = segments.split_last() else {
            self.0 = value;
            return;
        };
        let mut current = &mut self.0;
        for segment in walk {
            current = match segment {
                PathSegment::Key(key) => {
                    if !current.is_object() {
                        *current = Value::Object(Map::new());
                    }
                    match current.as_object_mut() {
                        Some(map) => map.entry(key.clone()).or_insert(Value::Null),
                        None => return,
                    }
                }
                PathSegment::Index(index) => {
                    if !current.is_array() {
                        *current = Value::Array(Vec::new());
                    }
                    match current.as_array_mut() {
                        Some(items) => {
                            while items.len() <= *index {
                                items.push(Value::Null);
                            }
                            &mut items[*index]
                        }
                        None => return,
                    }
                }
            };
        }
        match last {
            PathSegment::Key(key) => {
                if !current.is_object() {
                    *current = Value::Object(Map::new());
                }
                if let Some(map) = current.as_object_mut() {
                    map.insert(key.clone(), value);
                }
            }
            PathSegment::Index(index) => {
                if !current.is_array() {
                    *current = Value::Array(Vec::new());
                }
                if let Some(items) = current.as_array_mut() {
                    while items.len() <= *index {
                        items.push(Value::Null);
                    }
                    items[*index] = value;
                }
            }
        }
    }
}
