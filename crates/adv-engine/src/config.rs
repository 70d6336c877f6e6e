//! Engine configuration.

/// Options that change how the engine reports, not what it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Keep a history of every choice taken.
    pub record_history: bool,
    /// Append an "Exits:" line to room descriptions.
    pub show_exits: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            record_history: true,
            show_exits: false,
        }
    }
}

impl EngineConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable history recording.
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Enable or disable the exits line in room descriptions.
    pub fn with_exits(mut self, show: bool) -> Self {
        self.show_exits = show;
        self
    }
}
