use anyhow::Result;
use plateup_recipe::{
    PREVIEW_LIMIT, Servings, fahrenheit_to_celsius, match_recipes, preview, scaled_ingredients,
};
use plateup_storage::{Favorites, Pantry};
use plateup_timer::format_clock;

use super::{App, recipe_line};

#[tracing::instrument(skip(app))]
pub fn match_ingredients(app: &App, ingredients: Vec<String>, all: bool) -> Result<()> {
    let selected = if ingredients.is_empty() {
        Pantry::new(&app.store).load()?.items().to_vec()
    } else {
        ingredients
    };

    if selected.is_empty() {
        println!("No ingredients selected. Pick some with `plateup pantry toggle <NAME>`.");
        return Ok(());
    }

    let matches = match_recipes(&selected, app.catalog.recipes());
    if matches.is_empty() {
        println!("No recipe uses at least half of its ingredients from your selection.");
        return Ok(());
    }

    let (shown, hidden) = if all {
        (&matches[..], 0)
    } else {
        preview(&matches, PREVIEW_LIMIT)
    };

    let favorites = Favorites::new(&app.store).ids()?;

    println!("Recipes for {}:", selected.join(", "));
    for m in shown {
        let favorite = favorites.contains(&m.recipe.id);
        println!("{}", recipe_line(m.recipe, Some(m.match_percentage), favorite));
    }

    if hidden > 0 {
        println!("... and {hidden} more, use --all to see every match");
    }

    Ok(())
}

#[tracing::instrument(skip(app))]
pub fn show(app: &App, id: u32, servings: Option<u32>) -> Result<()> {
    let recipe = app.recipe(id)?;
    let servings = Servings::new(servings.unwrap_or(app.config.recipe.default_servings));
    let favorite = Favorites::new(&app.store).contains(recipe.id)?;

    println!("{}{}", recipe.name, if favorite { " ★" } else { "" });
    if !recipe.description.is_empty() {
        println!("{}", recipe.description);
    }

    let mut facts = Vec::new();
    if let Some(cuisine) = &recipe.cuisine {
        facts.push(cuisine.clone());
    }
    if let Some(difficulty) = recipe.difficulty {
        facts.push(difficulty.to_string());
    }
    if let Some(prep) = recipe.prep_time {
        facts.push(format!("prep {prep} min"));
    }
    if let Some(cook) = recipe.cook_time {
        facts.push(format!("cook {cook} min"));
    }
    let timed = recipe.total_timer_seconds();
    if timed > 0 {
        facts.push(format!("{} on timers", format_clock(timed)));
    }
    if let Some(calories) = recipe.calories {
        facts.push(format!("{calories} kcal"));
    }
    if !facts.is_empty() {
        println!("{}", facts.join(" · "));
    }

    println!();
    println!("Ingredients ({} servings):", servings.get());
    for scaled in scaled_ingredients(recipe, servings) {
        let unit = &scaled.ingredient.unit;
        if unit.is_empty() {
            println!("  - {} {}", scaled.display, scaled.ingredient.item);
        } else {
            println!("  - {} {} {}", scaled.display, unit, scaled.ingredient.item);
        }
    }

    println!();
    println!("Steps:");
    for (index, step) in recipe.steps.iter().enumerate() {
        println!("  {}. {}", index + 1, step.instruction);

        if let Some(appliance) = &step.appliance {
            let mut line = format!("     {appliance}");
            if let Some(settings) = &step.appliance_settings {
                line.push_str(&format!(": {settings}"));
            }
            if let Some(fahrenheit) = step.temperature {
                line.push_str(&format!(
                    " at {fahrenheit}°F ({}°C)",
                    fahrenheit_to_celsius(fahrenheit)
                ));
            }
            println!("{line}");
        }

        if step.timer > 0 {
            println!(
                "     timer {} (plateup timer {} {})",
                format_clock(step.timer),
                recipe.id,
                index + 1
            );
        }
    }

    Ok(())
}
