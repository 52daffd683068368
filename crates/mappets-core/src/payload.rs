//! Ordered, string-only payloads handed to the form relay.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// An ordered mapping of string keys to string values.
///
/// Keys keep their insertion order so the relay receives fields in the order
/// the form declares them. Re-inserting an existing key replaces its value in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    entries: Vec<(String, String)>,
}

impl Payload {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Payload::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_declaration_order() {
        let payload = Payload::new()
            .with("_subject", "hola")
            .with("email", "a@b.co")
            .with("message", "texto");
        assert_eq!(payload.keys(), vec!["_subject", "email", "message"]);
    }

    #[test]
    fn insert_replaces_existing_key_in_place() {
        let mut payload = Payload::new().with("a", "1").with("b", "2");
        payload.insert("a", "3");
        assert_eq!(payload.len(), 2);
        assert_eq!(payload.get("a"), Some("3"));
        assert_eq!(payload.keys(), vec!["a", "b"]);
    }

    #[test]
    fn serializes_as_flat_json_object_of_strings() {
        let payload = Payload::new()
            .with("email", "user@example.com")
            .with("latitude", "-34.6037000");
        let json = serde_json::to_string(&payload).expect("payload should serialize");
        assert_eq!(
            json,
            r#"{"email":"user@example.com","latitude":"-34.6037000"}"#
        );
    }

    #[test]
    fn missing_key_is_none() {
        assert_eq!(Payload::new().get("email"), None);
        assert!(Payload::new().is_empty());
    }
}
