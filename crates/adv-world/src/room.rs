use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::id::{ItemId, RoomId};

/// A single exit: a direction label and the room it leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    /// Direction label, e.g. "north".
    pub direction: String,
    /// Room the exit leads to.
    pub destination: RoomId,
}

/// Exits of a room in declaration order.
///
/// Serialized as a JSON object mapping direction to destination. Unlike a
/// hash map, the order the author wrote the exits in is kept, since it
/// decides the order movement choices are offered in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exits(Vec<Exit>);

impl Exits {
    /// Create an empty exit list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an exit. A repeated direction replaces the earlier destination
    /// in place.
    pub fn insert(&mut self, direction: impl Into<String>, destination: impl Into<RoomId>) {
        let direction = direction.into();
        let destination = destination.into();
        match self.0.iter_mut().find(|e| e.direction == direction) {
            Some(existing) => existing.destination = destination,
            None => self.0.push(Exit {
                direction,
                destination,
            }),
        }
    }

    /// Destination of the exit in `direction`, if any.
    pub fn get(&self, direction: &str) -> Option<&RoomId> {
        self.0
            .iter()
            .find(|e| e.direction == direction)
            .map(|e| &e.destination)
    }

    /// Iterate over exits in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Exit> {
        self.0.iter()
    }

    /// Number of exits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the room has no exits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Exits {
    type Item = &'a Exit;
    type IntoIter = std::slice::Iter<'a, Exit>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Exits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for exit in &self.0 {
            map.serialize_entry(&exit.direction, &exit.destination)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Exits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExitsVisitor;

        impl<'de> Visitor<'de> for ExitsVisitor {
            type Value = Exits;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from direction to room id")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Exits, A::Error> {
                let mut exits = Exits::new();
                while let Some((direction, destination)) =
                    access.next_entry::<String, RoomId>()?
                {
                    exits.insert(direction, destination);
                }
                Ok(exits)
            }
        }

        deserializer.deserialize_map(ExitsVisitor)
    }
}

/// A location in the world.
///
/// `items` is the room's initial contents. During play the engine keeps its
/// own copy of each room's item list; the room itself is never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Room {
    /// Display name.
    pub name: String,
    /// Text shown when the player enters or looks around.
    pub description: String,
    /// Exits in declaration order.
    #[serde(default)]
    pub exits: Exits,
    /// Items initially present, in display order.
    #[serde(default)]
    pub items: Vec<ItemId>,
    /// Whether entering requires the key item.
    #[serde(default)]
    pub locked: bool,
}

impl Room {
    /// Create an unlocked room without exits or items.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exits: Exits::new(),
            items: Vec::new(),
            locked: false,
        }
    }

    /// Add an exit.
    pub fn with_exit(mut self, direction: impl Into<String>, destination: impl Into<RoomId>) -> Self {
        self.exits.insert(direction, destination);
        self
    }

    /// Place an item in the room.
    pub fn with_item(mut self, item: impl Into<ItemId>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Mark the room as locked.
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }
}
