use std::path::PathBuf;

use crate::id::{ItemId, RoomId};

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that make a world description unusable.
///
/// All of these are raised before play starts; an engine is never built on
/// top of a world that failed validation.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The world file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not match the schema.
    #[error("invalid world document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The designated starting room is not defined.
    #[error("starting room \"{0}\" is not defined")]
    MissingStartingRoom(RoomId),

    /// An exit points at a room that is not defined.
    #[error("exit \"{direction}\" of room \"{room}\" leads to undefined room \"{destination}\"")]
    DanglingExit {
        /// Room owning the exit.
        room: RoomId,
        /// Direction label of the exit.
        direction: String,
        /// Undefined destination.
        destination: RoomId,
    },

    /// A room lists an item that is not in the catalog.
    #[error("room \"{room}\" holds undefined item \"{item}\"")]
    DanglingItem {
        /// Room listing the item.
        room: RoomId,
        /// Undefined item id.
        item: ItemId,
    },

    /// An item is placed more than once.
    #[error("item \"{item}\" is placed in both \"{first}\" and \"{second}\"")]
    DuplicateItemPlacement {
        /// The item placed twice.
        item: ItemId,
        /// First room it was found in.
        first: RoomId,
        /// Second room it was found in (may equal `first`).
        second: RoomId,
    },

    /// The world has locked rooms but the key item is not in the catalog.
    #[error("key item \"{0}\" is not defined but the world has locked rooms")]
    MissingKeyItem(ItemId),
}
