use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};
use crate::id::{ItemId, RoomId};
use crate::item::Item;
use crate::room::Room;

const DEMO_WORLD: &str = include_str!("../worlds/demo.json");

fn default_key_item() -> ItemId {
    ItemId::from("key")
}

/// The static description of a game world.
///
/// This is also the authoring format: the JSON field names below are a
/// stable schema and unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorldModel {
    /// Room the player starts in.
    pub starting_room: RoomId,
    /// Item that opens locked rooms.
    #[serde(default = "default_key_item")]
    pub key_item: ItemId,
    /// All rooms, keyed by id.
    pub rooms: HashMap<RoomId, Room>,
    /// The item catalog, keyed by id.
    #[serde(default)]
    pub items: HashMap<ItemId, Item>,
}

impl WorldModel {
    /// Create an empty world starting in `starting_room`.
    ///
    /// The result is not valid until the starting room is added; build it
    /// up with [`with_room`](Self::with_room) and [`with_item`](Self::with_item)
    /// and hand it to the engine, which validates it.
    pub fn new(starting_room: impl Into<RoomId>) -> Self {
        Self {
            starting_room: starting_room.into(),
            key_item: default_key_item(),
            rooms: HashMap::new(),
            items: HashMap::new(),
        }
    }

    /// Add or replace a room.
    pub fn with_room(mut self, id: impl Into<RoomId>, room: Room) -> Self {
        self.rooms.insert(id.into(), room);
        self
    }

    /// Add or replace a catalog item.
    pub fn with_item(mut self, id: impl Into<ItemId>, item: Item) -> Self {
        self.items.insert(id.into(), item);
        self
    }

    /// Designate the item that opens locked rooms.
    pub fn with_key_item(mut self, id: impl Into<ItemId>) -> Self {
        self.key_item = id.into();
        self
    }

    /// Parse and validate a world from JSON.
    pub fn from_json_str(json: &str) -> WorldResult<Self> {
        let world: Self = serde_json::from_str(json)?;
        world.validate()?;
        Ok(world)
    }

    /// Read, parse, and validate a world file.
    pub fn from_path(path: &Path) -> WorldResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| WorldError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading world");
        Self::from_json_str(&json)
    }

    /// The built-in four-room demo world.
    pub fn demo() -> WorldResult<Self> {
        Self::from_json_str(DEMO_WORLD)
    }

    /// Serialize back to the authoring format.
    pub fn to_json_pretty(&self) -> WorldResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every reference in the world resolves.
    ///
    /// Rooms are checked in id order so the reported error is stable.
    pub fn validate(&self) -> WorldResult<()> {
        if !self.rooms.contains_key(&self.starting_room) {
            return Err(WorldError::MissingStartingRoom(self.starting_room.clone()));
        }

        let mut placed: HashMap<&ItemId, &RoomId> = HashMap::new();
        for (id, room) in self.rooms() {
            for exit in &room.exits {
                if !self.rooms.contains_key(&exit.destination) {
                    return Err(WorldError::DanglingExit {
                        room: id.clone(),
                        direction: exit.direction.clone(),
                        destination: exit.destination.clone(),
                    });
                }
            }

            for item in &room.items {
                if !self.items.contains_key(item) {
                    return Err(WorldError::DanglingItem {
                        room: id.clone(),
                        item: item.clone(),
                    });
                }
                if let Some(first) = placed.insert(item, id) {
                    return Err(WorldError::DuplicateItemPlacement {
                        item: item.clone(),
                        first: first.clone(),
                        second: id.clone(),
                    });
                }
            }
        }

        let has_locked = self.rooms.values().any(|r| r.locked);
        if has_locked && !self.items.contains_key(&self.key_item) {
            return Err(WorldError::MissingKeyItem(self.key_item.clone()));
        }

        Ok(())
    }

    /// Look up a room.
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Look up a catalog item.
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Display name of an item, falling back to its id.
    pub fn item_name<'a>(&'a self, id: &'a ItemId) -> &'a str {
        self.items
            .get(id)
            .map(|i| i.name.as_str())
            .unwrap_or(id.as_str())
    }

    /// All rooms, sorted by id.
    pub fn rooms(&self) -> Vec<(&RoomId, &Room)> {
        let mut rooms: Vec<_> = self.rooms.iter().collect();
        rooms.sort_by(|a, b| a.0.cmp(b.0));
        rooms
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of catalog items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rooms() -> WorldModel {
        WorldModel::new("cellar")
            .with_room(
                "cellar",
                Room::new("Cellar", "Damp.").with_exit("up", "attic").with_item("lamp"),
            )
            .with_room("attic", Room::new("Attic", "Dusty.").with_exit("down", "cellar"))
            .with_item("lamp", Item::new("Oil Lamp", "Still warm.").takeable())
    }

    #[test]
    fn demo_world_is_valid() {
        let world = WorldModel::demo().unwrap();
        assert_eq!(world.starting_room, RoomId::from("start"));
        assert_eq!(world.room_count(), 4);
        assert_eq!(world.item_count(), 5);
        assert!(world.room(&RoomId::from("treasury")).unwrap().locked);
        assert_eq!(world.item_name(&ItemId::from("key")), "Rusty Key");

        let start = world.room(&RoomId::from("start")).unwrap();
        let directions: Vec<_> = start.exits.iter().map(|e| e.direction.as_str()).collect();
        assert_eq!(directions, ["north", "east"]);
    }

    #[test]
    fn builder_world_is_valid() {
        assert!(two_rooms().validate().is_ok());
    }

    #[test]
    fn missing_starting_room() {
        let world = WorldModel::new("nowhere").with_room("attic", Room::new("Attic", ""));
        assert!(matches!(
            world.validate(),
            Err(WorldError::MissingStartingRoom(id)) if id.as_str() == "nowhere"
        ));
    }

    #[test]
    fn dangling_exit() {
        let world = two_rooms().with_room("attic", Room::new("Attic", "").with_exit("east", "roof"));
        let err = world.validate().unwrap_err();
        assert!(matches!(err, WorldError::DanglingExit { ref destination, .. } if destination.as_str() == "roof"));
        assert!(err.to_string().contains("roof"));
    }

    #[test]
    fn dangling_item() {
        let world = two_rooms().with_room("attic", Room::new("Attic", "").with_item("ghost"));
        assert!(matches!(
            world.validate(),
            Err(WorldError::DanglingItem { item, .. }) if item.as_str() == "ghost"
        ));
    }

    #[test]
    fn item_placed_twice() {
        let world = two_rooms().with_room("attic", Room::new("Attic", "").with_item("lamp"));
        assert!(matches!(
            world.validate(),
            Err(WorldError::DuplicateItemPlacement { item, .. }) if item.as_str() == "lamp"
        ));
    }

    #[test]
    fn locked_room_needs_key_in_catalog() {
        let world = two_rooms().with_room("attic", Room::new("Attic", "").locked());
        assert!(matches!(world.validate(), Err(WorldError::MissingKeyItem(_))));

        let world = world.with_key_item("lamp");
        assert!(world.validate().is_ok());
    }

    #[test]
    fn rejects_unknown_top_level_fields() {
        let json = r#"{"startingRoom": "a", "rooms": {"a": {"name": "A", "description": ""}}, "version": 2}"#;
        assert!(matches!(
            WorldModel::from_json_str(json),
            Err(WorldError::Parse(_))
        ));
    }

    #[test]
    fn key_item_defaults_to_key() {
        let json = r#"{"startingRoom": "a", "rooms": {"a": {"name": "A", "description": ""}}}"#;
        let world = WorldModel::from_json_str(json).unwrap();
        assert_eq!(world.key_item, ItemId::from("key"));
        assert!(world.items.is_empty());
    }

    #[test]
    fn json_round_trip_keeps_exit_order() {
        let world = WorldModel::demo().unwrap();
        let json = world.to_json_pretty().unwrap();
        let back = WorldModel::from_json_str(&json).unwrap();
        assert_eq!(back, world);
    }

    #[test]
    fn load_from_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("world.json");
        std::fs::write(&path, two_rooms().to_json_pretty().unwrap()).unwrap();

        let world = WorldModel::from_path(&path).unwrap();
        assert_eq!(world.room_count(), 2);

        let missing = WorldModel::from_path(&dir.path().join("missing.json"));
        assert!(matches!(missing, Err(WorldError::Io { .. })));
    }
}
