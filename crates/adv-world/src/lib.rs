//! World model for the adventure engine: rooms, items, and the static
//! relationships between them.
//!
//! A [`WorldModel`] is loaded once, validated, and never mutated afterwards.
//! Everything that changes during play lives in the engine's game state.
//! Worlds are authored as JSON; see [`WorldModel::from_json_str`].

/// Configuration errors raised while loading or validating a world.
pub mod error;
/// Identifier newtypes for rooms and items.
pub mod id;
/// Item catalog entries.
pub mod item;
/// Rooms and their ordered exits.
pub mod room;
/// The validated world model.
pub mod world;

pub use error::{WorldError, WorldResult};
pub use id::{ItemId, RoomId};
pub use item::Item;
pub use room::{Exit, Exits, Room};
pub use world::WorldModel;
