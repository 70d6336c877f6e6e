use serde::{Deserialize, Serialize};

/// An entry in the item catalog.
///
/// The catalog is the only owner of item data. Rooms and the player's
/// inventory refer to items by [`ItemId`](crate::ItemId).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Item {
    /// Display name, e.g. "Rusty Key".
    pub name: String,
    /// Text shown when the item is examined.
    pub description: String,
    /// Whether the player may pick the item up.
    #[serde(default)]
    pub takeable: bool,
}

impl Item {
    /// Create a non-takeable item.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            takeable: false,
        }
    }

    /// Mark the item as takeable.
    pub fn takeable(mut self) -> Self {
        self.takeable = true;
        self
    }
}
