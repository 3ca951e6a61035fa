// src/services/producer_service.rs
//
// Producer Service - free-text reference resolution
//
// Movie producers are stored as a comma-separated text column, not foreign
// keys. This service decides, token by token, whether a name corresponds to
// a Producers row (Linked) or stays plain text (Plain).
//
// CRITICAL RULES:
// - Membership probes never fail: storage errors degrade to "not linked"
// - Resolution is exact-match and case-sensitive, first row wins
// - One lookup per token; the resolved record rides along with Linked

use std::sync::Arc;

use crate::domain::credits::ProducerCredit;
use crate::domain::movie::{split_multi_valued, Movie};
use crate::domain::producer::Producer;
use crate::error::AppResult;
use crate::repositories::ProducerRepository;

use super::catalog_service::fetch_with_retry;

pub struct ProducerService {
    producer_repo: Arc<dyn ProducerRepository>,
}

impl ProducerService {
    pub fn new(producer_repo: Arc<dyn ProducerRepository>) -> Self {
        Self { producer_repo }
    }

    /// Load all producers straight from storage (the producers grid).
    pub fn list_producers(&self) -> AppResult<Vec<Producer>> {
        fetch_with_retry("producer list", || self.producer_repo.list_all())
    }

    pub fn get_producer(&self, producer_id: i64) -> AppResult<Option<Producer>> {
        self.producer_repo.get_by_id(producer_id)
    }

    /// Membership probe for a free-text producer name.
    ///
    /// Never fails: a storage error degrades to false so the caller renders
    /// the name as plain text instead of a dead link. Empty and
    /// whitespace-only names are not references at all.
    pub fn producer_exists(&self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }

        match self.producer_repo.count_by_name(name) {
            Ok(count) => count > 0,
            Err(e) => {
                log::warn!("Producer existence probe failed for '{}': {}", name, e);
                false
            }
        }
    }

    /// Full-record lookup by name. `Ok(None)` is the normal miss, not an
    /// error.
    pub fn resolve_by_name(&self, name: &str) -> AppResult<Option<Producer>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        self.producer_repo.get_by_name(name)
    }

    /// Classify every producer token of a movie as Linked or Plain.
    ///
    /// Tokens come from splitting the movie's producers text on commas,
    /// trimmed, empty tokens dropped. Each surviving token costs exactly one
    /// lookup; a hit carries the resolved record so the click target needs
    /// no second trip. A storage error degrades that token to Plain.
    pub fn resolve_credits(&self, movie: &Movie) -> Vec<ProducerCredit> {
        let raw = match movie.producers.as_deref() {
            Some(raw) => raw,
            None => return Vec::new(),
        };

        split_multi_valued(raw)
            .into_iter()
            .map(|token| match self.resolve_by_name(token) {
                Ok(Some(producer)) => ProducerCredit::Linked {
                    name: token.to_string(),
                    producer,
                },
                Ok(None) => ProducerCredit::Plain {
                    name: token.to_string(),
                },
                Err(e) => {
                    log::warn!("Producer resolution failed for '{}': {}", token, e);
                    ProducerCredit::Plain {
                        name: token.to_string(),
                    }
                }
            })
            .collect()
    }
}
