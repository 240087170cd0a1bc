use std::sync::Arc;

use log::debug;

use crate::config::Config;
use crate::db;
use crate::error::Result;
use crate::models::center::Center;
use crate::models::program::Program;
use crate::models::row::{check_ident, Row};
use crate::models::table::TableInfo;
use crate::modules::catalog::{self, Catalog};
use crate::modules::store::{Filter, Order, Store, SurrealStore};

pub const CENTERS_TABLE: &str = "centers";
pub const PROGRAMS_TABLE: &str = "programs";

/// Typed access to centers, programs and arbitrary tables.
///
/// Every operation issues at most one store request and reports failures as
/// [`ApiError`](crate::error::ApiError).
#[derive(Clone)]
pub struct DataManager {
    store: Arc<dyn Store>,
    catalog: Arc<dyn Catalog>,
}

impl DataManager {
    pub fn new(store: Arc<dyn Store>, catalog: Arc<dyn Catalog>) -> Self {
        Self { store, catalog }
    }

    /// Connects to the store from `config` and picks the configured catalog.
    pub async fn connect(config: &Config) -> Result<Self> {
        let db = db::connect(config).await?;
        let store: Arc<dyn Store> = Arc::new(SurrealStore::new(db));
        let catalog = catalog::from_kind(config.catalog, store.clone());

        Ok(Self::new(store, catalog))
    }

    pub async fn centers(&self) -> Result<Vec<Center>> {
        let rows = self
            .store
            .select(CENTERS_TABLE, None, Some(Order::asc("name")))
            .await?;

        rows.into_iter().map(Row::into_record).collect()
    }

    pub async fn programs_by_center(&self, center_id: i64) -> Result<Vec<Program>> {
        let rows = self
            .store
            .select(
                PROGRAMS_TABLE,
                Some(Filter::eq("center_id", center_id)),
                Some(Order::asc("name")),
            )
            .await?;

        rows.into_iter().map(Row::into_record).collect()
    }

    pub async fn tables_by_program(&self, program_id: i64) -> Result<Vec<TableInfo>> {
        self.catalog.tables_by_program(program_id).await
    }

    pub async fn table_data(&self, table: &str) -> Result<Vec<Row>> {
        self.catalog.table_data(table).await
    }

    pub async fn insert_row(&self, table: &str, row: Row) -> Result<()> {
        let table = check_ident(table)?;
        row.validate()?;

        self.store.insert(table, vec![row]).await
    }

    /// Merges `row` into the row with `id`. Record ids are immutable, so an
    /// `id` column in `row` is dropped, and a row left empty is rejected.
    pub async fn update_row(&self, table: &str, id: i64, mut row: Row) -> Result<()> {
        let table = check_ident(table)?;
        row.remove("id");
        row.validate()?;

        self.store.update(table, Filter::eq("id", id), row).await
    }

    pub async fn delete_row(&self, table: &str, id: i64) -> Result<()> {
        let table = check_ident(table)?;

        self.store.delete(table, Filter::eq("id", id)).await
    }

    /// Inserts `rows` in one request and returns how many were sent.
    pub async fn bulk_insert(&self, table: &str, rows: Vec<Row>) -> Result<usize> {
        let table = check_ident(table)?;
        for row in &rows {
            row.validate()?;
        }

        if rows.is_empty() {
            debug!("bulk insert into `{table}` skipped: no rows");
            return Ok(0);
        }

        let count = rows.len();
        self.store.insert(table, rows).await?;

        Ok(count)
    }
}
