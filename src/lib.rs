pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod modules;

pub use config::{CatalogKind, Config};
pub use error::{ApiError, ErrorKind};
pub use modules::data::manager::DataManager;
pub use modules::facade::Facade;
