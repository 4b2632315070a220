//! Command definitions for the shopping list screen
//!
//! Each command is bound to a single key. The help dialog renders this
//! table and the key handler looks commands up in it.

/// A command that can be executed from the list screen
#[derive(Debug, Clone)]
pub struct Command {
    /// Key that triggers the command
    pub key: char,
    /// Short description
    pub description: &'static str,
    /// Command action
    pub action: CommandAction,
}

/// Actions that commands can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    AddItem,
    RemoveItem,
    LoadRecipe,
    SaveRecipe,
    SaveList,
    ClearList,
    Help,
    Quit,
}

/// All available commands, in help display order
pub static COMMANDS: &[Command] = &[
    Command {
        key: 'a',
        description: "Add an item",
        action: CommandAction::AddItem,
    },
    Command {
        key: 'r',
        description: "Remove an item",
        action: CommandAction::RemoveItem,
    },
    Command {
        key: 'l',
        description: "Load a recipe",
        action: CommandAction::LoadRecipe,
    },
    Command {
        key: 'w',
        description: "Save as a recipe",
        action: CommandAction::SaveRecipe,
    },
    Command {
        key: 's',
        description: "Save as a shopping list",
        action: CommandAction::SaveList,
    },
    Command {
        key: 'c',
        description: "Clear the list",
        action: CommandAction::ClearList,
    },
    Command {
        key: 'h',
        description: "Show or hide help",
        action: CommandAction::Help,
    },
    Command {
        key: '?',
        description: "Show or hide help",
        action: CommandAction::Help,
    },
    Command {
        key: 'q',
        description: "Quit",
        action: CommandAction::Quit,
    },
];

/// Find the command bound to a key
pub fn find_command(key: char) -> Option<CommandAction> {
    COMMANDS
        .iter()
        .find(|cmd| cmd.key == key)
        .map(|cmd| cmd.action)
}
