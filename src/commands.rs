//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host performs after an update.

use crate::messages::Msg;
use crate::picker::PickerItem;

// ============================================================================
// Host Command Registry
// ============================================================================

/// Identifies a command exposed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    /// Flip between enabled and disabled
    ToggleSpotlight,
    /// Open the group navigation picker
    SelectGroup,
}

/// A command definition for host registration
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub id: CommandId,
    pub name: &'static str,
    pub label: &'static str,
}

/// Static registry of all host commands
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        id: CommandId::ToggleSpotlight,
        name: "spotlight.toggleSpotlight",
        label: "Toggle Group Spotlight",
    },
    CommandDef {
        id: CommandId::SelectGroup,
        name: "spotlight.selectGroup",
        label: "Go to Group...",
    },
];

impl CommandId {
    /// Registered host name (e.g. `spotlight.selectGroup`)
    pub fn name(self) -> &'static str {
        self.def().name
    }

    /// Look up a command by its registered name
    pub fn from_name(name: &str) -> Option<Self> {
        COMMANDS.iter().find(|def| def.name == name).map(|def| def.id)
    }

    /// Message dispatched when the host runs this command
    pub fn to_msg(self) -> Msg {
        match self {
            CommandId::ToggleSpotlight => Msg::ToggleRequested,
            CommandId::SelectGroup => Msg::NavigateRequested,
        }
    }

    fn def(self) -> &'static CommandDef {
        COMMANDS
            .iter()
            .find(|def| def.id == self)
            .unwrap_or_else(|| unreachable!("every CommandId is registered"))
    }
}

/// Side effects requested by `update`
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Present the group picker; the host answers with `Msg::GroupPicked`
    ShowGroupPicker {
        placeholder: &'static str,
        items: Vec<PickerItem>,
    },
    /// Put the cursor at the start of `line` with no selection, scroll it to
    /// the top of the viewport and focus the document
    RevealLine { line: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_command_is_registered_once() {
        for id in [CommandId::ToggleSpotlight, CommandId::SelectGroup] {
            assert_eq!(COMMANDS.iter().filter(|d| d.id == id).count(), 1);
        }
    }

    #[test]
    fn test_from_name_round_trips() {
        for def in COMMANDS {
            assert_eq!(CommandId::from_name(def.name), Some(def.id));
        }
        assert_eq!(CommandId::from_name("spotlight.unknown"), None);
    }

    #[test]
    fn test_command_messages() {
        assert!(matches!(
            CommandId::ToggleSpotlight.to_msg(),
            Msg::ToggleRequested
        ));
        assert!(matches!(
            CommandId::SelectGroup.to_msg(),
            Msg::NavigateRequested
        ));
    }
}
