use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use recappe::cli::{handle_list_command, handle_recipe_command, ListCommands, RecipeCommands};
use recappe::config::{RecappePaths, Settings};
use recappe::logging::init_file_logger;
use recappe::session::Session;

#[derive(Parser)]
#[command(
    name = "recappe",
    author = "Kellan Childers",
    version,
    about = "Build shopping lists from saved recipes",
    long_about = "RecAppE keeps a shopping list in the terminal. Add items by hand \
                  or load saved recipes; matching items are summed when their units \
                  agree. Lists are saved as plain text for the store and as data \
                  that can be loaded again later."
)]
struct Cli {
    /// Log debug detail to the log file
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Saved recipe commands
    #[command(subcommand)]
    Recipe(RecipeCommands),

    /// Saved shopping list commands
    #[command(subcommand)]
    List(ListCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = RecappePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    if let Err(e) = init_file_logger(&paths.log_file(), cli.verbose) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let mut session = Session::new(paths, settings)
        .context("Failed to prepare the data directory")?;

    match cli.command {
        None | Some(Commands::Tui) => {
            recappe::tui::run_tui(&mut session)?;
        }
        Some(Commands::Recipe(cmd)) => {
            handle_recipe_command(&session, cmd)?;
        }
        Some(Commands::List(cmd)) => {
            handle_list_command(&mut session, cmd)?;
        }
        Some(Commands::Config) => {
            let paths = session.paths();
            let settings = session.settings();
            println!("RecAppE Configuration");
            println!("=====================");
            println!("Data directory:     {}", paths.base_dir().display());
            println!("Recipes:            {}", paths.recipes_dir().display());
            println!("Shopping lists:     {}", paths.lists_dir().display());
            println!("Settings file:      {}", paths.settings_file().display());
            println!("Log file:           {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Sort display:      {}", settings.sort_display);
            println!("  Column width:      {}", settings.column_width);
            println!("  Append text lists: {}", settings.append_text_lists);
        }
    }

    Ok(())
}
