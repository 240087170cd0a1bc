//! Sources of table listings and table contents.
//!
//! [`MockCatalog`] fabricates a fixed set of tables and rows without touching
//! the store; [`LiveCatalog`] reads them from the store. Which one is used is
//! decided by [`CatalogKind`].

mod live;
mod mock;

pub use live::LiveCatalog;
pub use mock::{CourseRecord, EducatorRecord, MockCatalog, StudentRecord};

use std::sync::Arc;

use crate::config::CatalogKind;
use crate::error::Result;
use crate::models::row::Row;
use crate::models::table::TableInfo;
use crate::modules::store::Store;

#[async_trait::async_trait]
pub trait Catalog: Send + Sync + 'static {
    async fn tables_by_program(&self, program_id: i64) -> Result<Vec<TableInfo>>;
    async fn table_data(&self, table: &str) -> Result<Vec<Row>>;
}

pub fn from_kind(kind: CatalogKind, store: Arc<dyn Store>) -> Arc<dyn Catalog> {
    match kind {
        CatalogKind::Mock => Arc::new(MockCatalog),
        CatalogKind::Live => Arc::new(LiveCatalog::new(store)),
    }
}
