//! Named configuration options consumed by operator pools
//!
//! Pools are configured through a small heterogeneous map before generation,
//! e.g. `{"n-electrons": 2}`. Values can be set programmatically or read from
//! a JSON document.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single option value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl OptionValue {
    /// Name of the value's type, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "bool",
            OptionValue::Int(_) => "int",
            OptionValue::Float(_) => "float",
            OptionValue::Str(_) => "string",
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Int(i) => write!(f, "{}", i),
            OptionValue::Float(x) => write!(f, "{}", x),
            OptionValue::Str(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Int(value.into())
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

/// Ordered map of named options
///
/// Typed getters return `None` both when a key is absent and when it holds a
/// value of another type, so a single call answers "missing or mistyped".
///
/// # Example
/// ```
/// use adaptq_core::Options;
///
/// let options = Options::new().with("n-electrons", 2);
/// assert_eq!(options.get_int("n-electrons"), Some(2));
/// assert_eq!(options.get_str("n-electrons"), None);
///
/// let parsed = Options::from_json(r#"{"n-electrons": 4, "label": "LiH"}"#).unwrap();
/// assert_eq!(parsed.get_int("n-electrons"), Some(4));
/// assert_eq!(parsed.get_str("label"), Some("LiH"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options {
    values: BTreeMap<String, OptionValue>,
}

impl Options {
    /// Create an empty option map
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object
    ///
    /// # Errors
    /// Returns [`crate::QuantumError::InvalidOptions`] if the document is not
    /// an object of scalar values.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the options as a JSON object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.values.insert(key.into(), value.into())
    }

    /// Raw access to a value
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Integer value of `key`
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.values.get(key)? {
            OptionValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Floating-point value of `key`; integers are widened
    pub fn get_float(&self, key: &str) -> Option<f64> {
        match self.values.get(key)? {
            OptionValue::Float(x) => Some(*x),
            OptionValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.values.get(key)? {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.values.get(key)? {
            OptionValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Iterate over `(key, value)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Options::new();
        for (k, v) in iter {
            options.insert(k, v);
        }
        options
    }
}
