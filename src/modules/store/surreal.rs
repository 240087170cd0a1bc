use log::{debug, trace};
use serde_json::Value;
use surrealdb::engine::any::Any;
use surrealdb::Surreal;

use super::{Filter, Order, Store};
use crate::error::{ApiError, Result};
use crate::models::row::{check_ident, Row};

/// [`Store`] backed by a SurrealDB connection.
///
/// Record keys are surfaced to callers as the row's `id` column, and a filter
/// on `id` matches the record key rather than the full record id.
#[derive(Clone)]
pub struct SurrealStore {
    db: Surreal<Any>,
}

impl SurrealStore {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }
}

fn condition(filter: &Filter) -> Result<String> {
    let column = check_ident(&filter.column)?;

    if column == "id" {
        Ok("meta::id(id) = $b_value".to_string())
    } else {
        Ok(format!("{column} = $b_value"))
    }
}

#[async_trait::async_trait]
impl Store for SurrealStore {
    async fn select(
        &self,
        table: &str,
        filter: Option<Filter>,
        order: Option<Order>,
    ) -> Result<Vec<Row>> {
        let table = check_ident(table)?;

        let mut sql = format!("SELECT *, meta::id(id) AS id FROM {table}");
        if let Some(ref filter) = filter {
            sql.push_str(&format!(" WHERE {}", condition(filter)?));
        }
        if let Some(ref order) = order {
            let column = check_ident(&order.column)?;
            sql.push_str(&format!(" ORDER BY {column} {}", order.direction.as_sql()));
        }
        sql.push(';');

        trace!("select: {sql}");

        let query = self.db.query(sql);
        let query = match filter {
            Some(filter) => query.bind(("b_value", filter.value)),
            None => query,
        };

        let mut res = query.await?;
        let values: Vec<Value> = res.take(0)?;

        let rows = values
            .into_iter()
            .map(Row::try_from)
            .collect::<Result<Vec<_>>>()?;

        debug!("select on `{table}` returned {} rows", rows.len());

        Ok(rows)
    }

    async fn insert(&self, table: &str, rows: Vec<Row>) -> Result<()> {
        let table = check_ident(table)?;
        let sql = format!("INSERT INTO {table} $b_rows RETURN NONE;");

        trace!("insert: {sql} ({} rows)", rows.len());

        self.db
            .query(sql)
            .bind(("b_rows", rows))
            .await?
            .check()?;

        Ok(())
    }

    async fn update(&self, table: &str, filter: Filter, mut patch: Row) -> Result<()> {
        let table = check_ident(table)?;
        // record ids are immutable, and an empty MERGE clears the record
        patch.remove("id");
        if patch.is_empty() {
            return Err(ApiError::InvalidRow("update patch has no columns".to_string()));
        }

        let sql = format!(
            "UPDATE {table} MERGE $b_patch WHERE {} RETURN NONE;",
            condition(&filter)?
        );

        trace!("update: {sql}");

        self.db
            .query(sql)
            .bind(("b_patch", patch))
            .bind(("b_value", filter.value))
            .await?
            .check()?;

        Ok(())
    }

    async fn delete(&self, table: &str, filter: Filter) -> Result<()> {
        let table = check_ident(table)?;
        let sql = format!("DELETE {table} WHERE {} RETURN NONE;", condition(&filter)?);

        trace!("delete: {sql}");

        self.db
            .query(sql)
            .bind(("b_value", filter.value))
            .await?
            .check()?;

        Ok(())
    }
}
