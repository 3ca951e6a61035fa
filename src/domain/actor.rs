// src/domain/actor.rs
//
// Actor Entity
//
// Every descriptive field is optional: the upstream store carries NULLs
// freely and the UI substitutes "N/A" where it cares.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Storage primary key (ActorID)
    pub id: i64,

    pub name: Option<String>,
    pub spouse: Option<String>,
    pub biography: Option<String>,
}

impl Actor {
    pub fn new(id: i64, name: Option<String>) -> Self {
        Self {
            id,
            name,
            spouse: None,
            biography: None,
        }
    }

    /// Display name, empty string when the record has none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
