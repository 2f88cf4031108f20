use serde::{Deserialize, Serialize};

/// All user-issued configurator commands.
/// One command corresponds to one UI event (a color click or an option click).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum ConfiguratorCommand {
    SelectColor  { color: String },
    ToggleOption { option: String },
    /// Back to the initial selection (first color, default options).
    Reset,
}

impl ConfiguratorCommand {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SelectColor { .. }  => "select_color",
            Self::ToggleOption { .. } => "toggle_option",
            Self::Reset               => "reset",
        }
    }
}
