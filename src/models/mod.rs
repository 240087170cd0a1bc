pub mod center;
pub mod program;
pub mod row;
pub mod table;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identity of a stored record, as the store reports it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordKey {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Number(n) => write!(f, "{n}"),
            RecordKey::Text(s) => f.write_str(s),
        }
    }
}
