use std::sync::Arc;

use super::Catalog;
use crate::error::Result;
use crate::models::row::Row;
use crate::models::table::TableInfo;
use crate::modules::store::{Filter, Order, Store};

pub const TABLES_TABLE: &str = "tables";

/// Catalog read from the store: listings from the `tables` table, contents
/// from the named table itself.
#[derive(Clone)]
pub struct LiveCatalog {
    store: Arc<dyn Store>,
}

impl LiveCatalog {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl Catalog for LiveCatalog {
    async fn tables_by_program(&self, program_id: i64) -> Result<Vec<TableInfo>> {
        let rows = self
            .store
            .select(
                TABLES_TABLE,
                Some(Filter::eq("program_id", program_id)),
                Some(Order::asc("name")),
            )
            .await?;

        rows.into_iter().map(Row::into_record).collect()
    }

    async fn table_data(&self, table: &str) -> Result<Vec<Row>> {
        self.store.select(table, None, None).await
    }
}
