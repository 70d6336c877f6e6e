//! Record of choices taken.

use adv_world::{RoomId, WorldModel};
use serde::{Deserialize, Serialize};

use crate::choice::Choice;

/// One choice taken by the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Room the player was in when choosing.
    pub room: RoomId,
    /// The choice taken.
    pub choice: Choice,
    /// Whether it succeeded.
    pub success: bool,
}

/// Chronological, append-only log of choices.
///
/// Only used for transcripts and debugging; the game never reads it back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Export as a markdown list, one line per choice.
    pub fn export_markdown(&self, world: &WorldModel) -> String {
        let mut out = String::from("# Adventure Transcript\n\n");
        for (n, entry) in self.entries.iter().enumerate() {
            let room = world
                .room(&entry.room)
                .map(|r| r.name.as_str())
                .unwrap_or(entry.room.as_str());
            let outcome = if entry.success { "" } else { " *(failed)*" };
            out.push_str(&format!(
                "{}. **{}**: {}{}\n",
                n + 1,
                room,
                entry.choice.text,
                outcome
            ));
        }
        out
    }
}
