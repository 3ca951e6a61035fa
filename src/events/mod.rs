// events/mod.rs
//
// Event-driven architecture module.
//
// The bus decouples the services that change state (catalog reloads,
// watch-list curation, cast aggregation) from whatever wants to react
// to those changes. Emission is synchronous and observable.

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventLogEntry};
pub use types::{
    CatalogReloaded, DomainEvent, MovieActorsPopulated, MovieAddedToWatchList,
};

/// Create a fully wired event bus for the application
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
