use anyhow::{Context, Result};
use plateup_recipe::recommend;
use plateup_shared::Season;
use plateup_storage::Favorites;
use time::{Date, OffsetDateTime};

use super::{App, recipe_line};

/// Today's date, in UTC when the local offset is unknown.
fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

#[tracing::instrument(skip(app))]
pub fn seasonal(app: &App, month: Option<u8>) -> Result<()> {
    let season = match month {
        Some(index) => Season::from_month_index(index)
            .with_context(|| format!("month must be between 0 and 11, got {index}"))?,
        None => Season::from_date(today()),
    };

    let recommendations = recommend(season, app.catalog.recipes());
    let favorites = Favorites::new(&app.store).ids()?;

    println!("{} Specials", recommendations.profile.title);
    println!(
        "In season: {}",
        recommendations.profile.display_ingredients.join(", ")
    );

    for recipe in &recommendations.recipes {
        let favorite = favorites.contains(&recipe.id);
        println!("{}", recipe_line(recipe, None, favorite));
    }

    if recommendations.is_fallback {
        println!("Nothing in the catalog suits {season} yet, try this classic instead.");
    }

    Ok(())
}
