use anyhow::Result;
use clap::Subcommand;
use plateup_storage::Favorites;

use super::{App, recipe_line};

#[derive(Subcommand, Debug)]
pub enum FavoritesCommand {
    /// List favorite recipes
    List,
    /// Add a recipe to favorites, or remove it if already there
    Toggle {
        /// Recipe id
        id: u32,
    },
}

#[tracing::instrument(skip(app))]
pub fn favorites(app: &App, command: FavoritesCommand) -> Result<()> {
    let favorites = Favorites::new(&app.store);

    match command {
        FavoritesCommand::List => {
            let recipes = favorites.recipes(app.catalog.recipes())?;
            if recipes.is_empty() {
                println!("No favorite recipes yet.");
                return Ok(());
            }

            for recipe in recipes {
                println!("{}", recipe_line(recipe, None, true));
            }
        }
        FavoritesCommand::Toggle { id } => {
            let recipe = app.recipe(id)?;

            if favorites.toggle(recipe.id)? {
                println!("Added {} to favorites.", recipe.name);
            } else {
                println!("Removed {} from favorites.", recipe.name);
            }
        }
    }

    Ok(())
}
