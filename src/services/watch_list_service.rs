// src/services/watch_list_service.rs
//
// Watch-List Service - process-lifetime curation
//
// The want-to-watch list is never persisted; it starts empty with the
// process and dies with it.

use std::sync::{Arc, RwLock};

use crate::domain::movie::Movie;
use crate::domain::watch_list::WantToWatchList;
use crate::events::{EventBus, MovieAddedToWatchList};

pub struct WatchListService {
    list: RwLock<WantToWatchList>,
    event_bus: Arc<EventBus>,
}

impl WatchListService {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self {
            list: RwLock::new(WantToWatchList::new()),
            event_bus,
        }
    }

    /// Add a movie to the want-to-watch list.
    ///
    /// Duplicate ids are silent no-ops: returns false and emits nothing.
    /// A fresh add returns true and emits MovieAddedToWatchList.
    pub fn add(&self, movie: Movie) -> bool {
        let movie_id = movie.id;
        let title = movie.title.clone();

        let added = self.list.write().unwrap().add(movie);
        if added {
            self.event_bus
                .emit(MovieAddedToWatchList::new(movie_id, title));
        }

        added
    }

    pub fn contains(&self, movie_id: i64) -> bool {
        self.list.read().unwrap().contains(movie_id)
    }

    /// Snapshot of the list in insertion order.
    pub fn movies(&self) -> Vec<Movie> {
        self.list.read().unwrap().movies().to_vec()
    }

    pub fn len(&self) -> usize {
        self.list.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.read().unwrap().is_empty()
    }
}
