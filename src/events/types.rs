// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// CATALOG EVENTS
// ============================================================================

/// Emitted after a catalog reload fully succeeded and the new snapshot
/// (movies + genre index) replaced the previous one. The rendering layer
/// reacts by rebuilding the movie grid and the genre filter buttons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogReloaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movies_loaded: usize,
    pub genres_indexed: usize,
    /// Rows dropped by the per-row mapping policy during this load
    pub rows_skipped: usize,
}

impl CatalogReloaded {
    pub fn new(movies_loaded: usize, genres_indexed: usize, rows_skipped: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movies_loaded,
            genres_indexed,
            rows_skipped,
        }
    }
}

impl DomainEvent for CatalogReloaded {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "CatalogReloaded"
    }
}

// ============================================================================
// WATCH-LIST EVENTS
// ============================================================================

/// Emitted when a movie actually enters the want-to-watch list.
/// A duplicate add is a no-op and emits nothing: events are facts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieAddedToWatchList {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: i64,
    pub title: String,
}

impl MovieAddedToWatchList {
    pub fn new(movie_id: i64, title: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            title,
        }
    }
}

impl DomainEvent for MovieAddedToWatchList {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "MovieAddedToWatchList"
    }
}

// ============================================================================
// CAST AGGREGATION EVENTS
// ============================================================================

/// Emitted after the batch cast aggregation ran. The trigger is opaque to
/// this core (no consumed result), so the event only records that it fired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieActorsPopulated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl MovieActorsPopulated {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for MovieActorsPopulated {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEvent for MovieActorsPopulated {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "MovieActorsPopulated"
    }
}
