//! Recipe CLI commands

use clap::Subcommand;

use crate::display::format_ledger_table;
use crate::error::RecappeResult;
use crate::session::Session;

/// Recipe subcommands
#[derive(Subcommand)]
pub enum RecipeCommands {
    /// List saved recipes
    List,
    /// Show the items in a recipe
    Show {
        /// Recipe name
        name: String,
    },
    /// Delete a saved recipe
    Delete {
        /// Recipe name
        name: String,
    },
}

/// Handle a recipe command
pub fn handle_recipe_command(session: &Session, cmd: RecipeCommands) -> RecappeResult<()> {
    match cmd {
        RecipeCommands::List => {
            let names = session.saved_recipes()?;
            if names.is_empty() {
                println!("No recipes saved.");
                return Ok(());
            }

            for name in &names {
                println!("{}", name);
            }
            println!("\nTotal: {} recipes", names.len());
        }

        RecipeCommands::Show { name } => {
            let recipe = session.read_recipe(&name)?;
            println!("Recipe: {}\n", name);
            print!(
                "{}",
                format_ledger_table(&recipe, session.settings().sort_display)
            );
            if recipe.is_empty() {
                println!();
            }
        }

        RecipeCommands::Delete { name } => {
            session.delete_recipe(&name)?;
            println!("Deleted recipe: {}", name);
        }
    }

    Ok(())
}
