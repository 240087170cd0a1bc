//! The remote tabular store, reduced to the four verbs the data layer needs.

mod surreal;
pub use surreal::SurrealStore;

use serde_json::Value;

use crate::error::Result;
use crate::models::row::Row;

/// Equality filter: `column = value`.
#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    pub column: String,
    pub value: Value,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    pub column: String,
    pub direction: Direction,
}

impl Order {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Desc,
        }
    }
}

#[async_trait::async_trait]
pub trait Store: Send + Sync + 'static {
    async fn select(
        &self,
        table: &str,
        filter: Option<Filter>,
        order: Option<Order>,
    ) -> Result<Vec<Row>>;

    /// Inserts all `rows` in a single request.
    async fn insert(&self, table: &str, rows: Vec<Row>) -> Result<()>;

    /// Merges `patch` into every row matching `filter`.
    async fn update(&self, table: &str, filter: Filter, patch: Row) -> Result<()>;

    async fn delete(&self, table: &str, filter: Filter) -> Result<()>;
}
