//! Mutable game state.

use std::collections::{BTreeMap, BTreeSet};

use adv_world::{ItemId, RoomId, WorldModel};

/// Everything about a game in progress that can change.
///
/// The world model is never modified during play. Room contents, visited
/// rooms, and opened locks are tracked here as an overlay, so restoring the
/// initial state is just a matter of replacing this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    current_room: RoomId,
    inventory: Vec<ItemId>,
    unlocked: BTreeSet<RoomId>,
    visited: BTreeSet<RoomId>,
    room_items: BTreeMap<RoomId, Vec<ItemId>>,
}

impl GameState {
    /// The state a new game starts in: the starting room, nothing carried,
    /// nothing unlocked or visited, and every room holding its initial items.
    pub fn initial(world: &WorldModel) -> Self {
        let room_items = world
            .rooms
            .iter()
            .filter(|(_, room)| !room.items.is_empty())
            .map(|(id, room)| (id.clone(), room.items.clone()))
            .collect();

        Self {
            current_room: world.starting_room.clone(),
            inventory: Vec::new(),
            unlocked: BTreeSet::new(),
            visited: BTreeSet::new(),
            room_items,
        }
    }

    /// The room the player is in.
    pub fn current_room(&self) -> &RoomId {
        &self.current_room
    }

    /// Carried items in pickup order.
    pub fn inventory(&self) -> &[ItemId] {
        &self.inventory
    }

    /// Whether the player carries `item`.
    pub fn has_item(&self, item: &ItemId) -> bool {
        self.inventory.contains(item)
    }

    /// Locked rooms the player has opened.
    pub fn unlocked(&self) -> &BTreeSet<RoomId> {
        &self.unlocked
    }

    /// Whether the lock on `room` has been opened.
    pub fn is_unlocked(&self, room: &RoomId) -> bool {
        self.unlocked.contains(room)
    }

    /// Rooms the player has entered.
    pub fn visited(&self) -> &BTreeSet<RoomId> {
        &self.visited
    }

    /// Whether the player has entered `room`.
    pub fn has_visited(&self, room: &RoomId) -> bool {
        self.visited.contains(room)
    }

    /// Items currently lying in `room`, in display order.
    pub fn items_in(&self, room: &RoomId) -> &[ItemId] {
        self.room_items.get(room).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Items currently lying in the player's room.
    pub fn items_here(&self) -> &[ItemId] {
        self.items_in(&self.current_room)
    }

    pub(crate) fn enter(&mut self, room: RoomId) {
        self.visited.insert(room.clone());
        self.current_room = room;
    }

    pub(crate) fn unlock(&mut self, room: RoomId) {
        self.unlocked.insert(room);
    }

    /// Move `item` from the current room into the inventory. Returns false
    /// if the item is not lying here.
    pub(crate) fn pick_up(&mut self, item: &ItemId) -> bool {
        let Some(items) = self.room_items.get_mut(&self.current_room) else {
            return false;
        };
        let Some(pos) = items.iter().position(|i| i == item) else {
            return false;
        };
        let item = items.remove(pos);
        if items.is_empty() {
            self.room_items.remove(&self.current_room);
        }
        self.inventory.push(item);
        true
    }
}
