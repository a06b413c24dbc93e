// Data model for the task list

use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// Ids are assigned by the store, strictly increasing from 0, and stay
/// unique for the store's lifetime. Insertion order of the owning
/// collection is the only meaningful order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub name: String,
    pub completed: bool,
}
