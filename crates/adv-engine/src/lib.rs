//! Choice-based adventure engine.
//!
//! Given a validated [`WorldModel`](adv_world::WorldModel), the engine tracks
//! where the player is, what they carry, and which locked rooms they have
//! opened. Callers ask for the currently legal [`Choice`]s, pick one, and get
//! back an [`ActionResult`] describing what happened.
//!
//! ```
//! use adv_engine::GameEngine;
//! use adv_world::WorldModel;
//!
//! let mut engine = GameEngine::new(WorldModel::demo()?)?;
//! let take = engine
//!     .available_choices()
//!     .into_iter()
//!     .find(|c| c.id == "take-key")
//!     .expect("key is in the starting room");
//! let result = engine.execute(&take);
//! assert!(result.success);
//! assert_eq!(engine.snapshot().inventory_count, 1);
//! # Ok::<(), adv_world::WorldError>(())
//! ```

/// Legal actions and their labels.
pub mod choice;
/// Engine configuration.
pub mod config;
/// The engine: construction, play, and reset.
pub mod engine;
/// Applying actions to game state.
pub mod executor;
/// Record of choices taken.
pub mod history;
/// Narrative text.
pub mod narrator;
/// Mutable game state.
pub mod state;

pub use choice::{Action, Choice, ChoiceKind, available_choices};
pub use config::EngineConfig;
pub use engine::{GameEngine, StatusView};
pub use executor::{ActionResult, execute};
pub use history::{History, HistoryEntry};
pub use state::GameState;
