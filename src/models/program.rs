use serde::{Deserialize, Serialize};

use super::RecordKey;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: Option<RecordKey>,
    pub program_id: i64,
    pub name: String,
    pub description: Option<String>,
    /// References `Center::center_id`.
    pub center_id: i64,
    pub image_url: Option<String>,
    pub created_at: Option<String>,
    pub num_of_student: Option<i64>,
    pub num_of_educator: Option<i64>,
}
