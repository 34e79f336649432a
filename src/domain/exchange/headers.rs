//! Multi-value header collection

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered header map of name to list of values.
///
/// Lookups are case-insensitive; stored names keep the casing they were
/// first inserted with. Serializes as a plain name-to-values JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headers(BTreeMap<String, Vec<String>>);

impl Headers {
    /// Creates an empty header collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value; a name differing only in case joins the existing entry
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let key = match self.find_key(&name) {
            Some(existing) => existing.to_string(),
            None => name,
        };
        self.0.entry(key).or_default().push(value.into());
    }

    /// First value for the name, if any
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(|value| value.as_str())
    }

    /// All values for the name, in insertion order
    pub fn get_all(&self, name: &str) -> &[String] {
        self.find_key(name)
            .and_then(|key| self.0.get(key))
            .map(|values| values.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find_key(name).is_some()
    }

    /// Number of distinct header names
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }

    fn find_key(&self, name: &str) -> Option<&str> {
        self.0
            .keys()
            .find(|key| key.eq_ignore_ascii_case(name))
            .map(|key| key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut headers = Headers::new();
        headers.insert("Accept", "text/plain");

        assert_eq!(headers.get("Accept"), Some("text/plain"));
        assert_eq!(headers.get("Missing"), None);
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let mut headers = Headers::new();
        headers.insert("Content-Type", "application/json");

        assert_eq!(headers.get("content-type"), Some("application/json"));
        assert_eq!(headers.get("CONTENT-TYPE"), Some("application/json"));
    }

    #[test]
    fn test_insert_merges_names_differing_in_case() {
        let mut headers = Headers::new();
        headers.insert("X-Custom", "one");
        headers.insert("x-custom", "two");

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get_all("X-Custom"), &["one", "two"]);
    }

    #[test]
    fn test_multiple_values_keep_insertion_order() {
        let mut headers = Headers::new();
        headers.insert("Set-Cookie", "a=1");
        headers.insert("Set-Cookie", "b=2");

        assert_eq!(headers.get_all("Set-Cookie"), &["a=1", "b=2"]);
        assert_eq!(headers.get("Set-Cookie"), Some("a=1"));
    }

    #[test]
    fn test_serializes_as_name_to_values_object() {
        let mut headers = Headers::new();
        headers.insert("Accept", "text/plain");
        headers.insert("Accept", "text/html");

        let json = serde_json::to_string(&headers).unwrap();
        assert_eq!(json, r#"{"Accept":["text/plain","text/html"]}"#);

        let decoded: Headers = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, headers);
    }
}
