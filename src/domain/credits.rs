// src/domain/credits.rs
//
// Producer Credit Value Objects
//
// Pure, immutable outcomes of resolving a movie's free-text producer
// references against the Producer catalog. A credit is either linked (a
// catalog record exists for that exact name, and it travels with the credit
// so the detail view needs no second lookup) or plain text.
//
// INVARIANTS:
// - The name is always the trimmed token from the movie record
// - Classification depends only on catalog contents at resolution time
// - A storage failure during classification degrades to Plain, never errors

use serde::{Deserialize, Serialize};

use crate::domain::producer::Producer;

/// One resolved producer reference from a movie's producers field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProducerCredit {
    /// A catalog record matched the name exactly; navigable in the UI
    Linked { name: String, producer: Producer },

    /// No catalog record for this name; rendered as plain text
    Plain { name: String },
}

impl ProducerCredit {
    /// The trimmed name token as it appeared in the movie record
    pub fn name(&self) -> &str {
        match self {
            ProducerCredit::Linked { name, .. } => name,
            ProducerCredit::Plain { name } => name,
        }
    }

    /// Returns true when this credit navigates to a catalog record
    pub fn is_linked(&self) -> bool {
        matches!(self, ProducerCredit::Linked { .. })
    }

    /// The resolved record, when linked
    pub fn producer(&self) -> Option<&Producer> {
        match self {
            ProducerCredit::Linked { producer, .. } => Some(producer),
            ProducerCredit::Plain { .. } => None,
        }
    }
}
