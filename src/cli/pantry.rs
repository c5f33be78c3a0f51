use anyhow::Result;
use clap::Subcommand;
use plateup_storage::{IngredientSelection, Pantry};

use super::App;

#[derive(Subcommand, Debug)]
pub enum PantryCommand {
    /// List every ingredient used by the catalog, by category
    Options,
    /// Show the saved selection
    Show,
    /// Select ingredients that are not selected yet and unselect the others
    Toggle {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Replace the saved selection
    Set {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Forget the saved selection
    Clear,
}

#[tracing::instrument(skip(app))]
pub fn pantry(app: &App, command: PantryCommand) -> Result<()> {
    let pantry = Pantry::new(&app.store);

    match command {
        PantryCommand::Options => {
            let selection = pantry.load()?;

            for (category, items) in app.catalog.ingredient_options() {
                println!("{category}:");
                for item in items {
                    let mark = if selection.contains(&item) { "x" } else { " " };
                    println!("  [{mark}] {item}");
                }
            }
        }
        PantryCommand::Show => print_selection(&pantry.load()?),
        PantryCommand::Toggle { names } => {
            let mut selection = pantry.load()?;
            for name in names {
                warn_unknown(app, &name);
                selection.toggle(name);
            }

            if selection.is_empty() {
                pantry.clear()?;
            } else {
                pantry.save(&selection)?;
            }

            print_selection(&selection);
        }
        PantryCommand::Set { names } => {
            for name in &names {
                warn_unknown(app, name);
            }

            let selection = IngredientSelection::from_items(names);
            pantry.save(&selection)?;

            print_selection(&selection);
        }
        PantryCommand::Clear => {
            pantry.clear()?;
            println!("Selection cleared.");
        }
    }

    Ok(())
}

fn warn_unknown(app: &App, name: &str) {
    let known = app
        .catalog
        .recipes()
        .iter()
        .any(|recipe| recipe.ingredient_items().any(|item| item == name));

    if !known {
        tracing::warn!(ingredient = name, "no recipe uses this ingredient");
    }
}

fn print_selection(selection: &IngredientSelection) {
    if selection.is_empty() {
        println!("No ingredients selected.");
        return;
    }

    println!("Selected ({}): {}", selection.len(), selection.items().join(", "));
}
