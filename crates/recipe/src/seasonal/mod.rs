//! Seasonal recommendations
//!
//! Picks recipes that suit the season of a given date:
//! - explicit `seasonal` tags decide on their own
//! - otherwise unsuitable name/description keywords exclude a recipe
//! - in-season ingredients include it, then suitable keywords do
//!
//! Results are ranked by how many in-season ingredient keywords they use and
//! a fixed fallback recipe is returned when nothing qualifies.

mod fallback;
mod profile;

pub use fallback::fallback_recipe;
pub use profile::{SeasonProfile, profile};

use plateup_shared::{Recipe, Season};
use time::Date;

/// Maximum number of seasonal recipes shown.
pub const SEASONAL_LIMIT: usize = 6;

#[derive(Debug, Clone)]
pub struct SeasonalRecommendations<'a> {
    pub season: Season,
    pub profile: &'static SeasonProfile,
    pub recipes: Vec<&'a Recipe>,
    /// `true` when `recipes` holds the season's fallback recipe.
    pub is_fallback: bool,
}

/// Seasonal recommendations for the season `date` falls in.
pub fn classify(date: Date, recipes: &[Recipe]) -> SeasonalRecommendations<'_> {
    recommend(Season::from_date(date), recipes)
}

pub fn recommend(season: Season, recipes: &[Recipe]) -> SeasonalRecommendations<'_> {
    let profile = profile(season);

    let mut ranked: Vec<(usize, &Recipe)> = recipes
        .iter()
        .filter(|recipe| is_in_season(recipe, season))
        .map(|recipe| (seasonal_ingredient_count(recipe, profile), recipe))
        .collect();

    // stable: equal counts keep catalog order
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    if ranked.is_empty() {
        tracing::debug!(%season, "no seasonal recipe in catalog, using fallback");

        return SeasonalRecommendations {
            season,
            profile,
            recipes: vec![fallback_recipe(season)],
            is_fallback: true,
        };
    }

    tracing::debug!(%season, eligible = ranked.len(), "seasonal recipes ranked");

    SeasonalRecommendations {
        season,
        profile,
        recipes: ranked
            .into_iter()
            .take(SEASONAL_LIMIT)
            .map(|(_, recipe)| recipe)
            .collect(),
        is_fallback: false,
    }
}

/// Whether `recipe` belongs on the `season` panel.
pub fn is_in_season(recipe: &Recipe, season: Season) -> bool {
    if !recipe.seasonal.is_empty() {
        return recipe.seasonal.contains(&season);
    }

    let profile = profile(season);
    let name = recipe.name.to_lowercase();
    let description = recipe.description.to_lowercase();
    let mentions = |keyword: &&str| name.contains(*keyword) || description.contains(*keyword);

    if profile.unsuitable_keywords.iter().any(mentions) {
        return false;
    }

    if seasonal_ingredient_count(recipe, profile) > 0 {
        return true;
    }

    profile.suitable_keywords.iter().any(mentions)
}

/// Number of distinct in-season ingredient keywords found in the
/// recipe's ingredient items (case-insensitive substring).
pub fn seasonal_ingredient_count(recipe: &Recipe, profile: &SeasonProfile) -> usize {
    let items: Vec<String> = recipe
        .ingredient_items()
        .map(str::to_lowercase)
        .collect();

    profile
        .ingredient_keywords
        .iter()
        .filter(|keyword| items.iter().any(|item| item.contains(*keyword)))
        .count()
}
