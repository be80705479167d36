pub mod mutate;
mod value;

pub use value::{FieldValue, JsonObject, StringNote, parse_leading_int};

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::schema::ClassSchema;

/// One attribute of an instance: the schema key plus its edit state.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub attr_key: String,
    pub value: FieldValue,
}

/// One entity of a class, identified by a user-chosen key. Keys are
/// user-editable and uniqueness is not enforced; on save the last
/// instance with a given key wins.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub key: String,
    pub fields: Vec<Field>,
}

impl Instance {
    /// A blank instance with every attribute at its type's default.
    pub fn with_defaults(schema: &ClassSchema) -> Self {
        Self {
            key: String::new(),
            fields: schema
                .attributes
                .iter()
                .map(|attr| Field {
                    attr_key: attr.key.to_string(),
                    value: FieldValue::default_for(attr.value_type),
                })
                .collect(),
        }
    }

    /// Seeds an instance from one top-level entry of a loaded data file.
    /// Attributes missing from the JSON object fall back to defaults.
    pub fn from_json(schema: &ClassSchema, key: &str, value: &JsonValue) -> Self {
        Self {
            key: key.to_string(),
            fields: schema
                .attributes
                .iter()
                .map(|attr| {
                    let seed = value
                        .get(attr.key)
                        .map(|attr_value| FieldValue::from_json(attr.value_type, attr_value))
                        .unwrap_or_else(|| FieldValue::default_for(attr.value_type));
                    Field {
                        attr_key: attr.key.to_string(),
                        value: seed,
                    }
                })
                .collect(),
        }
    }

    /// Extracts the instance's attributes in schema order.
    pub fn to_json(&self) -> JsonObject {
        self.fields
            .iter()
            .map(|field| (field.attr_key.clone(), field.value.to_json()))
            .collect()
    }

    pub fn field(&self, attr_key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|field| field.attr_key == attr_key)
            .map(|field| &field.value)
    }

    pub fn field_mut(&mut self, attr_key: &str) -> Option<&mut FieldValue> {
        self.fields
            .iter_mut()
            .find(|field| field.attr_key == attr_key)
            .map(|field| &mut field.value)
    }
}

/// Where to place an instance copy relative to its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Above,
    Below,
}

/// The in-memory edit state of one loaded data file: the class it
/// belongs to plus every instance in display order. This is the source
/// of truth during editing; the rendered view is a projection of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub class_name: String,
    pub instances: Vec<Instance>,
}

impl Document {
    pub fn from_entries(
        schema: &ClassSchema,
        entries: &IndexMap<String, JsonValue>,
    ) -> Self {
        Self {
            class_name: schema.name.to_string(),
            instances: entries
                .iter()
                .map(|(key, value)| Instance::from_json(schema, key, value))
                .collect(),
        }
    }

    /// Inserts a blank instance at `index` (clamped to the end).
    pub fn add_new(&mut self, index: usize, schema: &ClassSchema) {
        let index = index.min(self.instances.len());
        self.instances.insert(index, Instance::with_defaults(schema));
    }

    /// Duplicates the instance at `index` verbatim, current edits
    /// included, directly above or below it.
    pub fn copy(&mut self, index: usize, direction: Direction) -> bool {
        let Some(instance) = self.instances.get(index) else {
            return false;
        };
        let clone = instance.clone();
        let at = match direction {
            Direction::Above => index,
            Direction::Below => index + 1,
        };
        self.instances.insert(at, clone);
        true
    }

    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.instances.len() {
            return false;
        }
        self.instances.remove(index);
        true
    }

    /// Extracts every instance into `key -> attribute -> value`, keeping
    /// document order. A duplicated key keeps its first position with the
    /// later instance's values.
    pub fn to_json(&self) -> IndexMap<String, JsonObject> {
        let mut out = IndexMap::with_capacity(self.instances.len());
        for instance in &self.instances {
            out.insert(instance.key.clone(), instance.to_json());
        }
        out
    }
}
