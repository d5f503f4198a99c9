//! Test-vector loading.
//!
//! A vector file is a JSON array of flat objects mapping signal names to
//! `"0"`/`"1"` string values, plus an `expected_<target>` entry. Key order
//! within each object is preserved because the report line echoes inputs in
//! that order.

use serde_json::Value;
use std::collections::BTreeMap;
use strobe_expr::Bindings;

/// One named set of input values plus (usually) an expected output value.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TestVector {
    entries: Vec<(String, String)>,
}

/// Prefix of expectation keys: `expected_<target>`.
pub const EXPECTED_PREFIX: &str = "expected_";

impl TestVector {
    /// Builds a vector from ordered `(name, value)` pairs.
    pub fn from_entries(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// All entries in file order, including `expected_*` keys.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Input entries in file order — every key that is not an expectation.
    pub fn inputs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries()
            .filter(|(k, _)| !k.starts_with(EXPECTED_PREFIX))
    }

    /// The expected value for the given target signal, if present.
    pub fn expected_for(&self, target: &str) -> Option<&str> {
        let key = format!("{EXPECTED_PREFIX}{target}");
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Evaluation bindings: every entry whose value is a logic value.
    ///
    /// Entries with other values are left unbound; an expression that
    /// references one fails for that vector only.
    pub fn bindings(&self) -> Bindings {
        let mut bindings = BTreeMap::new();
        for (name, value) in &self.entries {
            if let Ok(bit) = value.parse() {
                bindings.insert(name.clone(), bit);
            }
        }
        bindings
    }
}

/// Errors produced while parsing a vector file's content.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum VectorParseError {
    /// The content is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(String),

    /// The top-level JSON value is not an array.
    #[error("top level is not an array")]
    NotAnArray,

    /// An array element is not an object.
    #[error("vector {index} is not an object")]
    NotAnObject {
        /// Zero-based index of the element.
        index: usize,
    },

    /// An object value is not a string.
    #[error("vector {index}, key '{key}': value is not a string")]
    NonStringValue {
        /// Zero-based index of the vector.
        index: usize,
        /// The offending key.
        key: String,
    },
}

/// Parses vector-file content into an ordered sequence of vectors.
pub fn parse_vectors(content: &str) -> Result<Vec<TestVector>, VectorParseError> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| VectorParseError::Json(e.to_string()))?;
    let Value::Array(items) = value else {
        return Err(VectorParseError::NotAnArray);
    };

    let mut vectors = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let Value::Object(map) = item else {
            return Err(VectorParseError::NotAnObject { index });
        };
        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map {
            let Value::String(s) = value else {
                return Err(VectorParseError::NonStringValue { index, key });
            };
            entries.push((key, s));
        }
        vectors.push(TestVector::from_entries(entries));
    }
    Ok(vectors)
}
