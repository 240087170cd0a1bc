#![allow(dead_code)]

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use q_data_api::error::{ApiError, Result};
use q_data_api::models::row::Row;
use q_data_api::modules::catalog::{Catalog, MockCatalog};
use q_data_api::modules::notify::{Notification, Notifier, Severity};
use q_data_api::modules::store::{Direction, Filter, Order, Store};
use q_data_api::{DataManager, Facade};

/// Store kept in memory, with a switch that makes every request fail.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<String, Vec<Row>>>,
    failing: AtomicBool,
    requests: AtomicUsize,
}

impl MemoryStore {
    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, AtomicOrdering::SeqCst);
    }

    pub fn requests(&self) -> usize {
        self.requests.load(AtomicOrdering::SeqCst)
    }

    pub fn rows(&self, table: &str) -> Vec<Row> {
        self.tables
            .lock()
            .unwrap()
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    pub fn seed(&self, table: &str, rows: Vec<Value>) {
        let rows = rows
            .into_iter()
            .map(|value| Row::try_from(value).unwrap())
            .collect();

        self.tables.lock().unwrap().insert(table.to_string(), rows);
    }

    fn begin(&self) -> Result<()> {
        self.requests.fetch_add(1, AtomicOrdering::SeqCst);

        if self.failing.load(AtomicOrdering::SeqCst) {
            Err(ApiError::Rejected("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

fn matches(row: &Row, filter: &Filter) -> bool {
    row.get(&filter.column) == Some(&filter.value)
}

fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

#[async_trait::async_trait]
impl Store for MemoryStore {
    async fn select(
        &self,
        table: &str,
        filter: Option<Filter>,
        order: Option<Order>,
    ) -> Result<Vec<Row>> {
        self.begin()?;

        let mut rows: Vec<Row> = self
            .rows(table)
            .into_iter()
            .filter(|row| filter.as_ref().map_or(true, |f| matches(row, f)))
            .collect();

        if let Some(order) = order {
            rows.sort_by(|a, b| {
                let ord = compare(a.get(&order.column), b.get(&order.column));
                match order.direction {
                    Direction::Asc => ord,
                    Direction::Desc => ord.reverse(),
                }
            });
        }

        Ok(rows)
    }

    async fn insert(&self, table: &str, rows: Vec<Row>) -> Result<()> {
        self.begin()?;

        self.tables
            .lock()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .extend(rows);

        Ok(())
    }

    async fn update(&self, table: &str, filter: Filter, patch: Row) -> Result<()> {
        self.begin()?;

        let mut tables = self.tables.lock().unwrap();
        for row in tables.entry(table.to_string()).or_default() {
            if matches(row, &filter) {
                for (column, value) in patch.clone().into_inner() {
                    row.insert(column, value);
                }
            }
        }

        Ok(())
    }

    async fn delete(&self, table: &str, filter: Filter) -> Result<()> {
        self.begin()?;

        self.tables
            .lock()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .retain(|row| !matches(row, &filter));

        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn all(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.with(Severity::Error)
    }

    pub fn successes(&self) -> Vec<String> {
        self.with(Severity::Success)
    }

    fn with(&self, severity: Severity) -> Vec<String> {
        self.all()
            .into_iter()
            .filter(|n| n.severity == severity)
            .map(|n| n.message)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}

pub struct Fixture {
    pub store: Arc<MemoryStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub manager: DataManager,
    pub facade: Facade,
}

pub fn fixture() -> Fixture {
    let store = Arc::new(MemoryStore::default());
    let notifier = Arc::new(RecordingNotifier::default());

    let catalog: Arc<dyn Catalog> = Arc::new(MockCatalog);
    let manager = DataManager::new(store.clone(), catalog);
    let facade = Facade::new(manager.clone(), notifier.clone());

    Fixture {
        store,
        notifier,
        manager,
        facade,
    }
}

pub fn seed_centers(store: &MemoryStore) {
    store.seed(
        "centers",
        vec![
            json!({ "id": "c-2", "center_id": 2, "name": "Westside", "location": "Porto" }),
            json!({ "id": "c-1", "center_id": 1, "name": "Eastgate", "location": "Lisbon",
                    "num_of_student": 120 }),
            json!({ "id": "c-3", "center_id": 3, "name": "Northwood", "location": "Braga",
                    "description": "Rural campus" }),
        ],
    );
}

pub fn seed_programs(store: &MemoryStore) {
    store.seed(
        "programs",
        vec![
            json!({ "id": "p-1", "program_id": 10, "name": "Robotics", "center_id": 1 }),
            json!({ "id": "p-2", "program_id": 11, "name": "Art", "center_id": 1 }),
            json!({ "id": "p-3", "program_id": 12, "name": "Music", "center_id": 2 }),
            json!({ "id": "p-4", "program_id": 13, "name": "Biology", "center_id": 1 }),
        ],
    );
}
