use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub program_id: i64,
}
