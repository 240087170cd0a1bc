use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::Catalog;
use crate::error::Result;
use crate::models::row::Row;
use crate::models::table::TableInfo;

const ROWS_PER_TABLE: i64 = 5;
const GRADES: [&str; 3] = ["A", "B", "C"];
const SUBJECTS: [&str; 5] = ["Math", "Science", "History", "English", "Art"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub grade: String,
    pub enrollment_date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EducatorRecord {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub years_experience: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: i64,
    pub name: String,
    pub duration_weeks: i64,
    pub max_students: i64,
}

/// Synthetic catalog: three tables per program, five rows per table.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockCatalog;

impl MockCatalog {
    pub fn tables(program_id: i64) -> Vec<TableInfo> {
        [
            ("Students", "Student information"),
            ("Educators", "Educator information"),
            ("Courses", "Course details"),
        ]
        .into_iter()
        .zip(1..)
        .map(|((prefix, description), id)| TableInfo {
            id,
            name: format!("{prefix}_{program_id}"),
            description: Some(description.to_string()),
            program_id,
        })
        .collect()
    }

    pub fn students() -> Vec<StudentRecord> {
        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();

        (1..=ROWS_PER_TABLE)
            .map(|i| StudentRecord {
                id: i,
                name: format!("Student {i}"),
                age: 18 + i,
                grade: GRADES[(i % 3) as usize].to_string(),
                enrollment_date: today.clone(),
            })
            .collect()
    }

    pub fn educators() -> Vec<EducatorRecord> {
        (1..=ROWS_PER_TABLE)
            .map(|i| EducatorRecord {
                id: i,
                name: format!("Educator {i}"),
                subject: SUBJECTS[(i - 1) as usize].to_string(),
                years_experience: 3 + i,
            })
            .collect()
    }

    pub fn courses() -> Vec<CourseRecord> {
        (1..=ROWS_PER_TABLE)
            .map(|i| CourseRecord {
                id: i,
                name: format!("Course {i}"),
                duration_weeks: 8 + i,
                max_students: 20 + i,
            })
            .collect()
    }
}

fn to_rows<T: Serialize>(records: Vec<T>) -> Result<Vec<Row>> {
    records.iter().map(Row::from_record).collect()
}

#[async_trait::async_trait]
impl Catalog for MockCatalog {
    async fn tables_by_program(&self, program_id: i64) -> Result<Vec<TableInfo>> {
        Ok(Self::tables(program_id))
    }

    async fn table_data(&self, table: &str) -> Result<Vec<Row>> {
        if table.starts_with("Students") {
            to_rows(Self::students())
        } else if table.starts_with("Educators") {
            to_rows(Self::educators())
        } else if table.starts_with("Courses") {
            to_rows(Self::courses())
        } else {
            Ok(Vec::new())
        }
    }
}
