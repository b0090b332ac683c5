//! Canonical query parameter set
//!
//! Parameters are kept sorted by name; repeated values keep insertion order.
//! Encoding uses `application/x-www-form-urlencoded` rules, so commas become
//! `%2C` and brackets `%5B`/`%5D`.

use std::collections::BTreeMap;

use url::form_urlencoded;

/// Ordered multimap of query parameter names to values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    /// Create an empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value, keeping earlier values of the same name
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// First value of a parameter
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values of a parameter, in insertion order
    #[must_use]
    pub fn get_all(&self, name: &str) -> &[String] {
        self.params.get(name).map_or(&[][..], Vec::as_slice)
    }

    /// Check whether a parameter is present
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Number of distinct parameter names
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check whether no parameter is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over `(name, value)` pairs in encoding order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().flat_map(|(name, values)| {
            values
                .iter()
                .map(move |value| (name.as_str(), value.as_str()))
        })
    }

    /// Encode as a query string, names sorted
    #[must_use]
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.iter() {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }

    /// Decode a query string with the same rules used by [`encode`](Self::encode)
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let mut params = Self::new();
        for (name, value) in form_urlencoded::parse(query.as_bytes()) {
            params.append(name, value);
        }
        params
    }
}
