//! Applying actions to game state.

use adv_world::{ItemId, RoomId, WorldModel};
use serde::{Deserialize, Serialize};

use crate::choice::Action;
use crate::config::EngineConfig;
use crate::narrator::Narrator;
use crate::state::GameState;

/// Outcome of an action.
///
/// Failures are not errors: a locked door or a missing item is reported
/// here with `success == false`, and the game state is left as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    /// Whether the action took effect.
    pub success: bool,
    /// Narrative text for the player.
    pub message: String,
}

impl ActionResult {
    /// A successful outcome.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A failed outcome.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Apply `action` to `state`.
///
/// `state` is only modified when the returned result is successful.
pub fn execute(
    world: &WorldModel,
    config: &EngineConfig,
    state: &mut GameState,
    action: &Action,
) -> ActionResult {
    let narrator = Narrator::new(world, config);

    let result = match action {
        Action::Move {
            direction,
            destination,
        } => do_move(world, &narrator, state, direction, destination),
        Action::Take { item } => do_take(world, &narrator, state, item),
        Action::Examine { item } | Action::ExamineInventory { item } => {
            do_examine(&narrator, state, item)
        }
        Action::Look => ActionResult::ok(narrator.describe_room(state, state.current_room())),
        Action::Inventory => ActionResult::ok(narrator.inventory(state)),
    };

    tracing::debug!(
        kind = %action.kind(),
        room = %state.current_room(),
        success = result.success,
        "executed action"
    );
    result
}

fn do_move(
    world: &WorldModel,
    narrator: &Narrator<'_>,
    state: &mut GameState,
    direction: &str,
    destination: &RoomId,
) -> ActionResult {
    let exit = world
        .room(state.current_room())
        .and_then(|room| room.exits.get(direction));

    // The choice must still match an exit of the room the player is in.
    let Some(room) = exit
        .filter(|target| *target == destination)
        .and_then(|target| world.room(target))
    else {
        tracing::warn!(
            %direction,
            %destination,
            room = %state.current_room(),
            "move does not match any exit"
        );
        return ActionResult::fail(narrator.cannot());
    };

    if room.locked && !state.is_unlocked(destination) {
        if !state.has_item(&world.key_item) {
            return ActionResult::fail(narrator.locked(direction));
        }
        state.unlock(destination.clone());
        state.enter(destination.clone());
        tracing::info!(room = %destination, "room unlocked");
        return ActionResult::ok(narrator.unlocked(state, destination));
    }

    state.enter(destination.clone());
    ActionResult::ok(narrator.describe_room(state, destination))
}

fn do_take(
    world: &WorldModel,
    narrator: &Narrator<'_>,
    state: &mut GameState,
    item: &ItemId,
) -> ActionResult {
    if !state.items_here().contains(item) {
        return ActionResult::fail(narrator.not_here());
    }
    if !world.item(item).is_some_and(|i| i.takeable) {
        return ActionResult::fail(narrator.not_takeable(item));
    }

    state.pick_up(item);
    ActionResult::ok(narrator.taken(item))
}

fn do_examine(narrator: &Narrator<'_>, state: &GameState, item: &ItemId) -> ActionResult {
    if state.has_item(item) || state.items_here().contains(item) {
        ActionResult::ok(narrator.examine(item))
    } else {
        ActionResult::fail(narrator.not_seen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        world: WorldModel,
        config: EngineConfig,
        state: GameState,
    }

    impl Fixture {
        fn new() -> Self {
            let world = WorldModel::demo().unwrap();
            let state = GameState::initial(&world);
            Self {
                world,
                config: EngineConfig::default(),
                state,
            }
        }

        fn run(&mut self, action: Action) -> ActionResult {
            execute(&self.world, &self.config, &mut self.state, &action)
        }

        fn go(&mut self, direction: &str, destination: &str) -> ActionResult {
            self.run(Action::Move {
                direction: direction.to_string(),
                destination: RoomId::from(destination),
            })
        }

        fn take(&mut self, item: &str) -> ActionResult {
            self.run(Action::Take {
                item: ItemId::from(item),
            })
        }
    }

    #[test]
    fn move_through_open_exit() {
        let mut fx = Fixture::new();
        let result = fx.go("east", "library");

        assert!(result.success);
        assert!(result.message.starts_with("Old Library"));
        assert!(result.message.contains("You can see: Ancient Book, Candle"));
        assert_eq!(fx.state.current_room(), &RoomId::from("library"));
        assert!(fx.state.has_visited(&RoomId::from("library")));
    }

    #[test]
    fn locked_door_without_key_fails_and_keeps_state() {
        let mut fx = Fixture::new();
        fx.go("north", "hallway");
        let before = fx.state.clone();

        let result = fx.go("west", "treasury");
        assert!(!result.success);
        assert_eq!(result.message, "The way west is locked. You need a key.");
        assert_eq!(fx.state, before);
    }

    #[test]
    fn key_unlocks_door() {
        let mut fx = Fixture::new();
        fx.take("key");
        fx.go("north", "hallway");

        let result = fx.go("west", "treasury");
        assert!(result.success);
        assert!(result.message.starts_with("You use the Rusty Key and the door unlocks."));
        assert!(result.message.contains("You can see: Gold Coins, Silver Sword"));
        assert!(fx.state.is_unlocked(&RoomId::from("treasury")));
        assert_eq!(fx.state.current_room(), &RoomId::from("treasury"));
    }

    #[test]
    fn unlocked_door_stays_open() {
        let mut fx = Fixture::new();
        fx.take("key");
        fx.go("north", "hallway");
        fx.go("west", "treasury");
        fx.go("east", "hallway");

        let result = fx.go("west", "treasury");
        assert!(result.success);
        assert!(!result.message.contains("unlocks"));
        assert!(result.message.starts_with("Treasury"));
    }

    #[test]
    fn move_not_matching_an_exit_fails() {
        let mut fx = Fixture::new();
        let before = fx.state.clone();

        let result = fx.go("west", "treasury");
        assert!(!result.success);
        assert_eq!(result.message, "You can't do that right now.");

        // Right direction, wrong destination
        let result = fx.go("north", "library");
        assert!(!result.success);
        assert_eq!(fx.state, before);
    }

    #[test]
    fn take_item() {
        let mut fx = Fixture::new();
        let result = fx.take("key");

        assert!(result.success);
        assert_eq!(result.message, "You take the Rusty Key.");
        assert_eq!(fx.state.inventory(), [ItemId::from("key")]);
        assert!(fx.state.items_here().is_empty());
    }

    #[test]
    fn take_item_not_here() {
        let mut fx = Fixture::new();
        let result = fx.take("sword");
        assert!(!result.success);
        assert_eq!(result.message, "There is no such item here.");

        fx.take("key");
        let result = fx.take("key");
        assert!(!result.success);
        assert_eq!(fx.state.inventory().len(), 1);
    }

    #[test]
    fn take_fixed_item_fails() {
        let mut fx = Fixture::new();
        fx.go("east", "library");
        let before = fx.state.clone();

        let result = fx.take("candle");
        assert!(!result.success);
        assert_eq!(result.message, "The Candle can't be taken.");
        assert_eq!(fx.state, before);
    }

    #[test]
    fn examine_here_and_carried() {
        let mut fx = Fixture::new();
        let key = ItemId::from("key");

        let result = fx.run(Action::Examine { item: key.clone() });
        assert!(result.success);
        assert_eq!(result.message, "An old rusty key. It might open something.");

        fx.take("key");
        fx.go("east", "library");
        let result = fx.run(Action::ExamineInventory { item: key });
        assert!(result.success);
        assert!(result.message.contains("rusty key"));
    }

    #[test]
    fn examine_unseen_item_fails() {
        let mut fx = Fixture::new();
        let result = fx.run(Action::Examine {
            item: ItemId::from("gold"),
        });
        assert!(!result.success);
        assert_eq!(result.message, "You haven't seen that here.");
    }

    #[test]
    fn look_and_inventory_always_succeed() {
        let mut fx = Fixture::new();

        let look = fx.run(Action::Look);
        assert!(look.success);
        assert!(look.message.starts_with("Starting Room"));

        let inv = fx.run(Action::Inventory);
        assert!(inv.success);
        assert_eq!(inv.message, "Your inventory is empty.");

        fx.take("key");
        let inv = fx.run(Action::Inventory);
        assert_eq!(inv.message, "You are carrying: Rusty Key");
    }
}
