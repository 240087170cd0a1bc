use serde::{Deserialize, Serialize};

use super::RecordKey;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Center {
    pub id: Option<RecordKey>,
    /// Numeric key programs join on.
    pub center_id: i64,
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Option<String>,
    pub num_of_student: Option<i64>,
    pub num_of_educator: Option<i64>,
    pub num_of_employees: Option<i64>,
}
