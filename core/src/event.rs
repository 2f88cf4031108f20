//! Events emitted by a configurator session in response to commands.
//!
//! The rendering layer reads these to animate changes; the session
//! state itself is the source of truth for what is selected.

use crate::types::Yen;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConfiguratorEvent {
    ColorSelected {
        color: String,
        total: Yen,
    },
    OptionToggled {
        option:   String,
        selected: bool,
        /// Options removed because `option` declared them incompatible.
        evicted:  Vec<String>,
        total:    Yen,
    },
    SelectionReset {
        total: Yen,
    },
    CommandRejected {
        command_type: String,
        reason:       String,
    },
}

impl ConfiguratorEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ColorSelected { .. }   => "color_selected",
            Self::OptionToggled { .. }   => "option_toggled",
            Self::SelectionReset { .. }  => "selection_reset",
            Self::CommandRejected { .. } => "command_rejected",
        }
    }
}
