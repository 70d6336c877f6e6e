//! Narrative text for action results.

use adv_world::{ItemId, RoomId, WorldModel};

use crate::config::EngineConfig;
use crate::state::GameState;

/// Produces all player-facing text.
#[derive(Debug, Clone, Copy)]
pub struct Narrator<'a> {
    world: &'a WorldModel,
    config: &'a EngineConfig,
}

impl<'a> Narrator<'a> {
    /// Create a narrator over a world.
    pub fn new(world: &'a WorldModel, config: &'a EngineConfig) -> Self {
        Self { world, config }
    }

    /// Full description of a room as the player sees it in `state`: name,
    /// description, items lying there, and optionally the exits.
    pub fn describe_room(&self, state: &GameState, room_id: &RoomId) -> String {
        let Some(room) = self.world.room(room_id) else {
            return format!("You are somewhere called \"{room_id}\".");
        };

        let mut output = format!("{}\n{}", room.name, room.description);

        let items = state.items_in(room_id);
        let show_exits = self.config.show_exits && !room.exits.is_empty();
        if !items.is_empty() || show_exits {
            output.push('\n');
        }

        if !items.is_empty() {
            output.push_str(&format!("\nYou can see: {}", self.item_list(items)));
        }

        if show_exits {
            let exits: Vec<_> = room.exits.iter().map(|e| e.direction.as_str()).collect();
            output.push_str(&format!("\nExits: {}", exits.join(", ")));
        }

        output
    }

    /// Opening text of a new game.
    pub fn welcome(&self, state: &GameState) -> String {
        format!(
            "Welcome to the Text Adventure!\n\n{}",
            self.describe_room(state, state.current_room())
        )
    }

    /// The key opened a door and the player walked through.
    pub fn unlocked(&self, state: &GameState, room_id: &RoomId) -> String {
        format!(
            "You use the {} and the door unlocks.\n\n{}",
            self.world.item_name(&self.world.key_item),
            self.describe_room(state, room_id)
        )
    }

    /// The door is locked and the player has no key.
    pub fn locked(&self, direction: &str) -> String {
        format!("The way {direction} is locked. You need a key.")
    }

    /// An item was picked up.
    pub fn taken(&self, item: &ItemId) -> String {
        format!("You take the {}.", self.world.item_name(item))
    }

    /// An item lying here cannot be picked up.
    pub fn not_takeable(&self, item: &ItemId) -> String {
        format!("The {} can't be taken.", self.world.item_name(item))
    }

    /// The item to pick up is not in this room.
    pub fn not_here(&self) -> String {
        "There is no such item here.".to_string()
    }

    /// Description of an examined item.
    pub fn examine(&self, item: &ItemId) -> String {
        self.world
            .item(item)
            .map(|i| i.description.clone())
            .unwrap_or_else(|| "You see nothing special.".to_string())
    }

    /// The item to examine is neither carried nor here.
    pub fn not_seen(&self) -> String {
        "You haven't seen that here.".to_string()
    }

    /// Contents of the inventory.
    pub fn inventory(&self, state: &GameState) -> String {
        if state.inventory().is_empty() {
            "Your inventory is empty.".to_string()
        } else {
            format!("You are carrying: {}", self.item_list(state.inventory()))
        }
    }

    /// An action that does not fit the current state.
    pub fn cannot(&self) -> String {
        "You can't do that right now.".to_string()
    }

    fn item_list(&self, items: &[ItemId]) -> String {
        items
            .iter()
            .map(|i| self.world.item_name(i))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
