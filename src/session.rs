//! Shopping list session
//!
//! A [`Session`] owns the live shopping list for one run of the program and
//! exposes the commands the terminal UI and CLI call: add, remove, clear,
//! load a recipe or list, save a list or recipe, and list the items.
//!
//! Loading always goes through a transient ledger that is then merged into
//! the live one, so a recipe file and a typed-in item combine the same way.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::config::{RecappePaths, Settings};
use crate::error::{RecappeError, RecappeResult};
use crate::models::{Entry, IngredientLedger, Quantity};
use crate::storage::LedgerStore;

/// The live shopping list plus where to read and write files
pub struct Session {
    ledger: IngredientLedger,
    paths: RecappePaths,
    settings: Settings,
}

impl Session {
    /// Start a session with an empty shopping list
    ///
    /// Creates the recipe and shopping list directories if needed.
    pub fn new(paths: RecappePaths, settings: Settings) -> RecappeResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: IngredientLedger::new(),
            paths,
            settings,
        })
    }

    /// The live shopping list
    pub fn ledger(&self) -> &IngredientLedger {
        &self.ledger
    }

    /// Paths configuration
    pub fn paths(&self) -> &RecappePaths {
        &self.paths
    }

    /// Application settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Add an item to the shopping list
    pub fn add(&mut self, name: &str, quantity: Quantity, unit: &str) -> RecappeResult<()> {
        match self.ledger.add(name, quantity, unit) {
            Ok(()) => {
                info!(item = name, %quantity, unit, "added item");
                Ok(())
            }
            Err(e) => {
                warn!(item = name, error = %e, "add rejected");
                Err(e)
            }
        }
    }

    /// Add an item whose quantity is still raw user text
    pub fn add_raw(&mut self, name: &str, quantity: &str, unit: &str) -> RecappeResult<()> {
        let quantity = Quantity::parse(quantity)?;
        self.add(name, quantity, unit)
    }

    /// Remove an item from the shopping list
    pub fn remove(&mut self, name: &str) -> RecappeResult<Entry> {
        let entry = self.ledger.remove(name)?;
        info!(item = name, "removed item");
        Ok(entry)
    }

    /// Empty the shopping list
    pub fn clear(&mut self) {
        self.ledger.clear();
        info!("cleared shopping list");
    }

    /// Merge a saved recipe into the shopping list
    ///
    /// Returns the number of items in the recipe. A unit mismatch stops the
    /// merge part way; items merged before it stay on the list.
    pub fn load_recipe(&mut self, name: &str) -> RecappeResult<usize> {
        let path = self.paths.recipe_file(name);
        self.merge_file(&path)
    }

    /// Merge a saved shopping list into the current one
    pub fn load_list(&mut self, name: &str) -> RecappeResult<usize> {
        let path = self.paths.list_data_file(name);
        self.merge_file(&path)
    }

    /// Merge several recipes, all or nothing
    ///
    /// The recipes are combined in order into a scratch list first. If any
    /// of them conflicts, with each other or with the live list, nothing is
    /// merged and the error names the recipe that failed.
    pub fn load_recipes(&mut self, names: &[String]) -> RecappeResult<usize> {
        let mut combined = IngredientLedger::new();

        for name in names {
            let recipe = self.read_recipe(name)?;
            combined.try_merge_from(&recipe).map_err(|e| {
                warn!(recipe = name.as_str(), error = %e, "recipes conflict");
                e
            })?;
        }

        self.ledger.try_merge_from(&combined).map_err(|e| {
            warn!(error = %e, "recipes conflict with current list");
            e
        })?;

        info!(recipes = names.len(), items = combined.len(), "merged recipes");
        Ok(combined.len())
    }

    /// Read a saved recipe without touching the shopping list
    pub fn read_recipe(&self, name: &str) -> RecappeResult<IngredientLedger> {
        LedgerStore::load_structured(self.paths.recipe_file(name))
    }

    /// Read a saved shopping list without touching the live one
    pub fn read_list(&self, name: &str) -> RecappeResult<IngredientLedger> {
        LedgerStore::load_structured(self.paths.list_data_file(name))
    }

    fn merge_file(&mut self, path: &Path) -> RecappeResult<usize> {
        let loaded = LedgerStore::load_structured(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "load failed");
            e
        })?;

        self.ledger.merge_from(&loaded).map_err(|e| {
            warn!(path = %path.display(), error = %e, "merge stopped");
            e
        })?;

        info!(path = %path.display(), items = loaded.len(), "merged file");
        Ok(loaded.len())
    }

    /// Save the shopping list as plain text and as reloadable data
    pub fn save_list(&self, name: &str) -> RecappeResult<()> {
        require_file_name(name)?;

        LedgerStore::save_human_readable(
            &self.ledger,
            self.paths.list_text_file(name),
            self.settings.append_text_lists,
        )?;
        LedgerStore::save_structured(&self.ledger, self.paths.list_data_file(name))?;

        info!(list = name, items = self.ledger.len(), "saved shopping list");
        Ok(())
    }

    /// Save the shopping list as a recipe that can be loaded later
    pub fn save_as_recipe(&self, name: &str) -> RecappeResult<()> {
        require_file_name(name)?;

        LedgerStore::save_structured(&self.ledger, self.paths.recipe_file(name))?;

        info!(recipe = name, items = self.ledger.len(), "saved recipe");
        Ok(())
    }

    /// Display lines for every item, sorted when the settings ask for it
    pub fn list(&self) -> Vec<String> {
        let names: Vec<&str> = if self.settings.sort_display {
            self.ledger.sorted_names()
        } else {
            self.ledger.names().collect()
        };

        names
            .into_iter()
            .filter_map(|name| {
                self.ledger
                    .get(name)
                    .map(|entry| format!("{} {}", entry, name))
            })
            .collect()
    }

    /// Delete a saved recipe
    pub fn delete_recipe(&self, name: &str) -> RecappeResult<()> {
        require_file_name(name)?;
        delete_file(&self.paths.recipe_file(name))?;
        info!(recipe = name, "deleted recipe");
        Ok(())
    }

    /// Delete a saved shopping list, both the text and the data file
    pub fn delete_list(&self, name: &str) -> RecappeResult<()> {
        require_file_name(name)?;
        delete_file(&self.paths.list_data_file(name))?;

        let text = self.paths.list_text_file(name);
        if text.is_file() {
            fs::remove_file(&text)?;
        }

        info!(list = name, "deleted shopping list");
        Ok(())
    }

    /// Names of saved recipes
    pub fn saved_recipes(&self) -> RecappeResult<Vec<String>> {
        self.paths.saved_recipe_names()
    }

    /// Names of saved shopping lists
    pub fn saved_lists(&self) -> RecappeResult<Vec<String>> {
        self.paths.saved_list_names()
    }
}

/// Remove a saved file, reporting a missing one as `FileNotFound`
fn delete_file(path: &Path) -> RecappeResult<()> {
    if !path.is_file() {
        return Err(RecappeError::FileNotFound(path.to_path_buf()));
    }
    fs::remove_file(path)?;
    Ok(())
}

fn require_file_name(name: &str) -> RecappeResult<()> {
    if name.trim().is_empty() {
        return Err(RecappeError::Io("no file name given".into()));
    }
    Ok(())
}
