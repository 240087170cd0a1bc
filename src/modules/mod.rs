pub mod catalog;
pub mod data;
pub mod facade;
pub mod notify;
pub mod store;
