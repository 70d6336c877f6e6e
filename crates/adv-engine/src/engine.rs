//! The engine: construction, play, and reset.

use adv_world::{ItemId, RoomId, WorldModel, WorldResult};
use serde::Serialize;

use crate::choice::{Action, Choice, available_choices};
use crate::config::EngineConfig;
use crate::executor::{self, ActionResult};
use crate::history::{History, HistoryEntry};
use crate::narrator::Narrator;
use crate::state::GameState;

/// Read-only summary of the game for status displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusView {
    /// Current room id.
    pub room_id: RoomId,
    /// Current room display name.
    pub room_name: String,
    /// Carried items in pickup order.
    pub inventory: Vec<ItemId>,
    /// Number of carried items.
    pub inventory_count: usize,
    /// Number of locked rooms opened so far.
    pub unlocked_count: usize,
    /// Number of rooms entered so far.
    pub visited_count: usize,
}

/// A game in progress over a validated world.
///
/// The engine is single-player and synchronous: every call runs to
/// completion and callers take turns.
#[derive(Debug, Clone)]
pub struct GameEngine {
    world: WorldModel,
    config: EngineConfig,
    initial: GameState,
    state: GameState,
    history: History,
}

impl GameEngine {
    /// Validate `world` and start a new game with the default config.
    pub fn new(world: WorldModel) -> WorldResult<Self> {
        Self::with_config(world, EngineConfig::default())
    }

    /// Validate `world` and start a new game.
    pub fn with_config(world: WorldModel, config: EngineConfig) -> WorldResult<Self> {
        world.validate()?;

        let initial = GameState::initial(&world);
        tracing::info!(
            rooms = world.room_count(),
            items = world.item_count(),
            start = %world.starting_room,
            "adventure engine ready"
        );

        Ok(Self {
            state: initial.clone(),
            initial,
            world,
            config,
            history: History::new(),
        })
    }

    /// The world being played.
    pub fn world(&self) -> &WorldModel {
        &self.world
    }

    /// The engine config.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Choices taken since construction or the last reset.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Choices legal right now, in display order.
    pub fn available_choices(&self) -> Vec<Choice> {
        available_choices(&self.world, &self.state)
    }

    /// Take a choice previously returned by
    /// [`available_choices`](Self::available_choices).
    pub fn execute(&mut self, choice: &Choice) -> ActionResult {
        let room = self.state.current_room().clone();
        let result = executor::execute(&self.world, &self.config, &mut self.state, &choice.action);

        if self.config.record_history {
            self.history.push(HistoryEntry {
                room,
                choice: choice.clone(),
                success: result.success,
            });
        }

        result
    }

    /// Perform a bare action, labelling it the way the choice list would.
    pub fn perform(&mut self, action: Action) -> ActionResult {
        let choice = Choice::for_action(&self.world, &self.state, action);
        self.execute(&choice)
    }

    /// Restore the state the engine was constructed with.
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
        self.history.clear();
        tracing::info!("adventure reset");
    }

    /// Summary of the current state.
    pub fn snapshot(&self) -> StatusView {
        let room_id = self.state.current_room().clone();
        let room_name = self
            .world
            .room(&room_id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| room_id.to_string());

        StatusView {
            room_name,
            room_id,
            inventory: self.state.inventory().to_vec(),
            inventory_count: self.state.inventory().len(),
            unlocked_count: self.state.unlocked().len(),
            visited_count: self.state.visited().len(),
        }
    }

    /// Description of the current room.
    pub fn room_description(&self) -> String {
        self.narrator()
            .describe_room(&self.state, self.state.current_room())
    }

    /// Opening text, shown at the start and after a reset.
    pub fn welcome(&self) -> String {
        self.narrator().welcome(&self.state)
    }

    fn narrator(&self) -> Narrator<'_> {
        Narrator::new(&self.world, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adv_world::{Item, Room, WorldError};

    fn engine() -> GameEngine {
        GameEngine::new(WorldModel::demo().unwrap()).unwrap()
    }

    fn choose(engine: &mut GameEngine, id: &str) -> ActionResult {
        let choice = engine
            .available_choices()
            .into_iter()
            .find(|c| c.id == id)
            .unwrap_or_else(|| panic!("no choice {id}"));
        engine.execute(&choice)
    }

    #[test]
    fn construction_rejects_invalid_world() {
        let world = WorldModel::new("a")
            .with_room("a", Room::new("A", "").with_exit("north", "b"));
        assert!(matches!(
            GameEngine::new(world),
            Err(WorldError::DanglingExit { .. })
        ));
    }

    #[test]
    fn snapshot_tracks_progress() {
        let mut engine = engine();
        let status = engine.snapshot();
        assert_eq!(status.room_name, "Starting Room");
        assert_eq!(status.inventory_count, 0);

        choose(&mut engine, "take-key");
        choose(&mut engine, "move-north");
        let status = engine.snapshot();
        assert_eq!(status.room_id, RoomId::from("hallway"));
        assert_eq!(status.room_name, "Long Hallway");
        assert_eq!(status.inventory, [ItemId::from("key")]);
        assert_eq!(status.inventory_count, 1);
        assert_eq!(status.visited_count, 1);
    }

    #[test]
    fn history_records_choices() {
        let mut engine = engine();
        choose(&mut engine, "move-north");
        choose(&mut engine, "move-west");

        let entries = engine.history().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].room, RoomId::from("start"));
        assert!(entries[0].success);
        assert_eq!(entries[1].room, RoomId::from("hallway"));
        assert_eq!(entries[1].choice.text, "Go west (locked)");
        assert!(!entries[1].success);
    }

    #[test]
    fn history_can_be_disabled() {
        let config = EngineConfig::new().with_history(false);
        let mut engine = GameEngine::with_config(WorldModel::demo().unwrap(), config).unwrap();
        choose(&mut engine, "look");
        assert!(engine.history().is_empty());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut engine = engine();
        let fresh = engine.state().clone();

        choose(&mut engine, "take-key");
        choose(&mut engine, "move-north");
        choose(&mut engine, "move-west");
        assert_ne!(engine.state(), &fresh);

        engine.reset();
        assert_eq!(engine.state(), &fresh);
        assert!(engine.history().is_empty());

        engine.reset();
        assert_eq!(engine.state(), &fresh);
    }

    #[test]
    fn perform_labels_bare_actions() {
        let mut engine = engine();
        let result = engine.perform(Action::Take {
            item: ItemId::from("key"),
        });
        assert!(result.success);
        assert_eq!(engine.history().entries()[0].choice.id, "take-key");
    }

    #[test]
    fn welcome_text() {
        let engine = engine();
        let text = engine.welcome();
        assert!(text.starts_with("Welcome to the Text Adventure!\n\nStarting Room"));
        assert!(text.ends_with(&engine.room_description()));
    }

    #[test]
    fn world_without_locks_needs_no_key() {
        let world = WorldModel::new("a")
            .with_room("a", Room::new("A", "First.").with_exit("east", "b").with_item("coin"))
            .with_room("b", Room::new("B", "Second."))
            .with_item("coin", Item::new("Coin", "Shiny.").takeable());
        let mut engine = GameEngine::new(world).unwrap();

        assert!(choose(&mut engine, "take-coin").success);
        assert!(choose(&mut engine, "move-east").success);
        assert_eq!(engine.snapshot().room_name, "B");
    }
}
