//! # Facade
//!
//! The surface the frontend calls. Each operation delegates to the
//! [`DataManager`] and absorbs its errors: the error is logged, the user gets
//! one error notification with a fixed message, and the caller gets `None`
//! (reads) or `false` (writes). Successful writes raise a success
//! notification.
//!
//! Callers that need the error itself should use the [`DataManager`]
//! directly.

use std::sync::Arc;

use log::error;

use crate::error::ApiError;
use crate::models::center::Center;
use crate::models::program::Program;
use crate::models::row::Row;
use crate::models::table::TableInfo;
use crate::modules::data::manager::DataManager;
use crate::modules::notify::Notifier;

#[derive(Clone)]
pub struct Facade {
    manager: DataManager,
    notifier: Arc<dyn Notifier>,
}

impl Facade {
    pub fn new(manager: DataManager, notifier: Arc<dyn Notifier>) -> Self {
        Self { manager, notifier }
    }

    fn handle_error(&self, error: ApiError, message: &str) {
        error!("API error: {error}");
        self.notifier.error(message);
    }

    fn read<T>(&self, result: Result<T, ApiError>, message: &str) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.handle_error(error, message);
                None
            }
        }
    }

    fn write<T>(
        &self,
        result: Result<T, ApiError>,
        ok: impl FnOnce(T) -> String,
        message: &str,
    ) -> bool {
        match result {
            Ok(value) => {
                self.notifier.success(&ok(value));
                true
            }
            Err(error) => {
                self.handle_error(error, message);
                false
            }
        }
    }

    /// All centers, ordered by name.
    pub async fn fetch_centers(&self) -> Option<Vec<Center>> {
        let result = self.manager.centers().await;
        self.read(result, "Failed to fetch centers")
    }

    /// Programs of the center whose `center_id` matches, ordered by name.
    pub async fn fetch_programs_by_center(&self, center_id: i64) -> Option<Vec<Program>> {
        let result = self.manager.programs_by_center(center_id).await;
        self.read(result, "Failed to fetch programs")
    }

    pub async fn fetch_tables_by_program(&self, program_id: i64) -> Option<Vec<TableInfo>> {
        let result = self.manager.tables_by_program(program_id).await;
        self.read(result, "Failed to fetch tables")
    }

    pub async fn fetch_table_data(&self, table: &str) -> Option<Vec<Row>> {
        let result = self.manager.table_data(table).await;
        self.read(result, &format!("Failed to fetch data from {table}"))
    }

    pub async fn insert_row(&self, table: &str, row: Row) -> bool {
        let result = self.manager.insert_row(table, row).await;
        self.write(result, |_| "Row added successfully".to_string(), "Failed to add row")
    }

    pub async fn update_row(&self, table: &str, id: i64, row: Row) -> bool {
        let result = self.manager.update_row(table, id, row).await;
        self.write(
            result,
            |_| "Row updated successfully".to_string(),
            "Failed to update row",
        )
    }

    pub async fn delete_row(&self, table: &str, id: i64) -> bool {
        let result = self.manager.delete_row(table, id).await;
        self.write(
            result,
            |_| "Row deleted successfully".to_string(),
            "Failed to delete row",
        )
    }

    /// Reports a new column as added without touching the table's schema.
    pub async fn add_column(&self, _table: &str, column: &str, _column_type: &str) -> bool {
        // stub, the schema is left untouched
        self.notifier
            .success(&format!("Column \"{column}\" added successfully"));
        true
    }

    pub async fn bulk_insert(&self, table: &str, rows: Vec<Row>) -> bool {
        let result = self.manager.bulk_insert(table, rows).await;
        self.write(
            result,
            |count| format!("{count} rows added successfully"),
            "Failed to bulk insert rows",
        )
    }
}
