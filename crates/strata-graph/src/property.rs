//! Typed property storage.
//!
//! A [`Property`] declares an option identifier together with its default value. Values are kept
//! as JSON in a [`PropertyBag`], so integers, reals, booleans, enums and ordered lists all share
//! one store and can be loaded from configuration files unchanged.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

pub struct Property<T> {
    id: &'static str,
    default: fn() -> T,
}

impl<T> Property<T> {
    pub const fn new(id: &'static str, default: fn() -> T) -> Self {
        Self { id, default }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn default_value(&self) -> T {
        (self.default)()
    }
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Property<T> {}

impl<T> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Property").field(&self.id).finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PropertyBag {
    values: BTreeMap<String, Value>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `property`, or its default when unset or stored with an incompatible type.
    pub fn get<T: DeserializeOwned>(&self, property: &Property<T>) -> T {
        self.try_get(property)
            .ok()
            .flatten()
            .unwrap_or_else(|| property.default_value())
    }

    /// `Ok(None)` when unset; an error when the stored value does not deserialize into `T`.
    pub fn try_get<T: DeserializeOwned>(
        &self,
        property: &Property<T>,
    ) -> Result<Option<T>, serde_json::Error> {
        self.values
            .get(property.id())
            .map(|v| serde_json::from_value(v.clone()))
            .transpose()
    }

    pub fn set<T: Serialize>(
        &mut self,
        property: &Property<T>,
        value: T,
    ) -> Result<&mut Self, serde_json::Error> {
        let value = serde_json::to_value(value)?;
        self.values.insert(property.id().to_string(), value);
        Ok(self)
    }

    pub fn set_value(&mut self, id: impl Into<String>, value: Value) -> &mut Self {
        self.values.insert(id.into(), value);
        self
    }

    pub fn value(&self, id: &str) -> Option<&Value> {
        self.values.get(id)
    }

    pub fn contains<T>(&self, property: &Property<T>) -> bool {
        self.values.contains_key(property.id())
    }

    pub fn remove<T>(&mut self, property: &Property<T>) -> bool {
        self.values.remove(property.id()).is_some()
    }

    /// Copies every value of `other` into `self`, overwriting shared identifiers.
    pub fn copy_from(&mut self, other: &PropertyBag) {
        for (k, v) in &other.values {
            self.values.insert(k.clone(), v.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
