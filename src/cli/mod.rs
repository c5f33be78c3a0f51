mod favorites;
mod pantry;
mod recipes;
mod seasonal;
mod timer;

pub use favorites::{FavoritesCommand, favorites};
pub use pantry::{PantryCommand, pantry};
pub use recipes::{match_ingredients, show};
pub use seasonal::seasonal;
pub use timer::timer;

use anyhow::Context;
use plateup_recipe::Catalog;
use plateup_shared::Recipe;
use plateup_storage::FileStore;

use crate::config::Config;

/// State shared by every command, loaded once per invocation.
pub struct App {
    pub config: Config,
    pub catalog: Catalog,
    pub store: FileStore,
}

impl App {
    pub fn load(config: Config) -> anyhow::Result<Self> {
        let catalog = crate::catalog::load(&config.catalog)?;
        let store = FileStore::new(&config.storage.path);

        Ok(Self {
            config,
            catalog,
            store,
        })
    }

    fn recipe(&self, id: u32) -> anyhow::Result<&Recipe> {
        self.catalog
            .get(id)
            .with_context(|| format!("recipe {id}"))
    }
}

/// One line of a recipe listing.
fn recipe_line(recipe: &Recipe, match_percentage: Option<f64>, favorite: bool) -> String {
    let mut line = format!("#{:<4} {}", recipe.id, recipe.name);

    if let Some(percentage) = match_percentage {
        line.push_str(&format!("  ({percentage:.0}% match)"));
    }

    if let Some(minutes) = recipe.total_time {
        line.push_str(&format!("  {minutes} min"));
    }

    if let Some(difficulty) = recipe.difficulty {
        line.push_str(&format!("  {difficulty}"));
    }

    if favorite {
        line.push_str("  ★");
    }

    line
}
