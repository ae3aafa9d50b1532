use crate::undo_stack::DEFAULT_MAX_LEVELS;
use serde::{Deserialize, Serialize};

/// Editor behaviour knobs, embedded as `editor` in `pagekit.config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Undo levels kept (0 = unlimited)
    pub history_limit: usize,

    /// Checkpoint after every successful edit
    pub auto_checkpoint: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_MAX_LEVELS,
            auto_checkpoint: false,
        }
    }
}
