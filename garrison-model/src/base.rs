use serde::{Deserialize, Serialize};

use crate::ids::BaseId;

/// A base a user can be assigned to.
///
/// Owned by the hosting context; the console treats the base list as a
/// read-only lookup table for display and for the assignment selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base {
    #[serde(rename = "_id")]
    pub id: BaseId,
    pub name: String,
    /// Geographic region, e.g. "TX".
    pub state: String,
}

impl std::fmt::Display for Base {
    // Selector label format: "name - state"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name, self.state)
    }
}
