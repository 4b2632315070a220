//! Shopping list CLI commands
//!
//! `combine` builds a shopping list from recipes without opening the
//! terminal UI. Unlike loading in the UI, it merges nothing if any recipe
//! conflicts.

use clap::Subcommand;

use crate::display::format_ledger_table;
use crate::error::RecappeResult;
use crate::session::Session;

/// Shopping list subcommands
#[derive(Subcommand)]
pub enum ListCommands {
    /// List saved shopping lists
    Saved,
    /// Show the items in a saved shopping list
    Show {
        /// Shopping list name
        name: String,
    },
    /// Delete a saved shopping list
    Delete {
        /// Shopping list name
        name: String,
    },
    /// Combine recipes into a new shopping list
    Combine {
        /// Name to save the shopping list as
        name: String,
        /// Recipes to combine, in order
        #[arg(required = true)]
        recipes: Vec<String>,
    },
}

/// Handle a shopping list command
pub fn handle_list_command(session: &mut Session, cmd: ListCommands) -> RecappeResult<()> {
    match cmd {
        ListCommands::Saved => {
            let names = session.saved_lists()?;
            if names.is_empty() {
                println!("No shopping lists saved.");
                return Ok(());
            }

            for name in &names {
                println!("{}", name);
            }
            println!("\nTotal: {} shopping lists", names.len());
        }

        ListCommands::Show { name } => {
            let list = session.read_list(&name)?;
            println!("Shopping list: {}\n", name);
            print!(
                "{}",
                format_ledger_table(&list, session.settings().sort_display)
            );
            if list.is_empty() {
                println!();
            }
        }

        ListCommands::Delete { name } => {
            session.delete_list(&name)?;
            println!("Deleted shopping list: {}", name);
        }

        ListCommands::Combine { name, recipes } => {
            session.load_recipes(&recipes)?;
            session.save_list(&name)?;

            println!(
                "Saved shopping list '{}' from {} recipes:\n",
                name,
                recipes.len()
            );
            print!(
                "{}",
                format_ledger_table(session.ledger(), session.settings().sort_display)
            );
        }
    }

    Ok(())
}
