//! Legal actions and their labels.

use std::fmt;

use adv_world::{ItemId, RoomId, WorldModel};
use serde::{Deserialize, Serialize};

use crate::state::GameState;

/// Something the player can do.
///
/// Each variant carries everything the executor needs; there is no lookup
/// by name at execution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Action {
    /// Leave the current room through an exit.
    Move {
        /// Exit direction label.
        direction: String,
        /// Room the exit leads to.
        destination: RoomId,
    },
    /// Pick up an item lying in the current room.
    Take {
        /// Item to pick up.
        item: ItemId,
    },
    /// Examine an item lying in the current room.
    Examine {
        /// Item to examine.
        item: ItemId,
    },
    /// Examine a carried item.
    ExamineInventory {
        /// Item to examine.
        item: ItemId,
    },
    /// Describe the current room.
    Look,
    /// List carried items.
    Inventory,
}

/// The kind of an [`Action`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoiceKind {
    /// See [`Action::Move`].
    Move,
    /// See [`Action::Take`].
    Take,
    /// See [`Action::Examine`].
    Examine,
    /// See [`Action::ExamineInventory`].
    ExamineInventory,
    /// See [`Action::Look`].
    Look,
    /// See [`Action::Inventory`].
    Inventory,
}

impl fmt::Display for ChoiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move => write!(f, "move"),
            Self::Take => write!(f, "take"),
            Self::Examine => write!(f, "examine"),
            Self::ExamineInventory => write!(f, "examineInventory"),
            Self::Look => write!(f, "look"),
            Self::Inventory => write!(f, "inventory"),
        }
    }
}

impl Action {
    /// The kind of this action.
    pub fn kind(&self) -> ChoiceKind {
        match self {
            Self::Move { .. } => ChoiceKind::Move,
            Self::Take { .. } => ChoiceKind::Take,
            Self::Examine { .. } => ChoiceKind::Examine,
            Self::ExamineInventory { .. } => ChoiceKind::ExamineInventory,
            Self::Look => ChoiceKind::Look,
            Self::Inventory => ChoiceKind::Inventory,
        }
    }
}

/// An action offered to the player, with a label for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Stable key, unique within one list of choices (e.g. `take-key`).
    ///
    /// Each kind has its own prefix (`move-`, `take-`, `examine-room-`,
    /// `examine-inv-`) and none is a prefix of another, so ids of different
    /// kinds never collide whatever the item ids are.
    pub id: String,
    /// Label for display (e.g. "Take Rusty Key").
    pub text: String,
    /// What happens when the choice is taken.
    pub action: Action,
    /// Set on moves into a room that is still locked. Such a choice can be
    /// taken; it fails unless the player carries the key.
    pub locked: bool,
}

impl Choice {
    /// Label an action for the given state.
    pub fn for_action(world: &WorldModel, state: &GameState, action: Action) -> Self {
        let (id, text, locked) = match &action {
            Action::Move {
                direction,
                destination,
            } => {
                let locked = world.room(destination).is_some_and(|r| r.locked)
                    && !state.is_unlocked(destination);
                let text = if locked {
                    format!("Go {direction} (locked)")
                } else {
                    format!("Go {direction}")
                };
                (format!("move-{direction}"), text, locked)
            }
            Action::Take { item } => (
                format!("take-{item}"),
                format!("Take {}", world.item_name(item)),
                false,
            ),
            Action::Examine { item } => (
                format!("examine-room-{item}"),
                format!("Examine {}", world.item_name(item)),
                false,
            ),
            Action::ExamineInventory { item } => (
                format!("examine-inv-{item}"),
                format!("Examine {} (carried)", world.item_name(item)),
                false,
            ),
            Action::Look => ("look".to_string(), "Look around".to_string(), false),
            Action::Inventory => ("inventory".to_string(), "Check inventory".to_string(), false),
        };

        Self {
            id,
            text,
            action,
            locked,
        }
    }

    /// The kind of the underlying action.
    pub fn kind(&self) -> ChoiceKind {
        self.action.kind()
    }
}

/// All choices legal in `state`, in a fixed order: moves in exit order,
/// then examine/take for each item here, then examine for each carried item,
/// then look, then inventory when something is carried.
pub fn available_choices(world: &WorldModel, state: &GameState) -> Vec<Choice> {
    let mut actions = Vec::new();

    if let Some(room) = world.room(state.current_room()) {
        for exit in &room.exits {
            actions.push(Action::Move {
                direction: exit.direction.clone(),
                destination: exit.destination.clone(),
            });
        }
    }

    for item in state.items_here() {
        actions.push(Action::Examine { item: item.clone() });
        if world.item(item).is_some_and(|i| i.takeable) {
            actions.push(Action::Take { item: item.clone() });
        }
    }

    for item in state.inventory() {
        actions.push(Action::ExamineInventory { item: item.clone() });
    }

    actions.push(Action::Look);
    if !state.inventory().is_empty() {
        actions.push(Action::Inventory);
    }

    actions
        .into_iter()
        .map(|action| Choice::for_action(world, state, action))
        .collect()
}
