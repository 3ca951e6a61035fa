// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_service;
pub mod producer_service;
pub mod watch_list_service;

#[cfg(test)]
mod watch_list_service_tests;

// Re-export all services and their types
pub use catalog_service::{CatalogReloadSummary, CatalogService};
pub use producer_service::ProducerService;
pub use watch_list_service::WatchListService;
