use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ApiError, Result};

const MAX_IDENT_LEN: usize = 63;

/// Checks that `name` can be used as a table or column name.
///
/// Accepted names start with an ASCII letter or `_`, continue with ASCII
/// alphanumerics or `_`, and are at most 63 characters long.
pub fn check_ident(name: &str) -> Result<&str> {
    let mut chars = name.chars();

    let head_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let tail_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if head_ok && tail_ok && name.len() <= MAX_IDENT_LEN {
        Ok(name)
    } else {
        Err(ApiError::InvalidIdentifier(name.to_string()))
    }
}

/// A single row of an arbitrary table: column name to value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Map<String, Value>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(column.into(), value.into())
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub fn remove(&mut self, column: &str) -> Option<Value> {
        self.0.remove(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Enforces the write contract: at least one column, and every column
    /// name a valid identifier.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(ApiError::InvalidRow("row has no columns".to_string()));
        }

        for column in self.columns() {
            check_ident(column).map_err(|_| {
                ApiError::InvalidRow(format!("`{column}` is not a valid column name"))
            })?;
        }

        Ok(())
    }

    /// Renders any serializable record as a row. Fails when the record does
    /// not serialize to a JSON object.
    pub fn from_record(record: &impl Serialize) -> Result<Self> {
        match serde_json::to_value(record)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ApiError::InvalidRow(format!("expected an object, got {other}"))),
        }
    }

    pub fn into_record<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(Value::Object(self.0))?)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Row {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Row> for Value {
    fn from(row: Row) -> Self {
        Value::Object(row.0)
    }
}

impl TryFrom<Value> for Row {
    type Error = ApiError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ApiError::InvalidRow(format!("expected an object, got {other}"))),
        }
    }
}
