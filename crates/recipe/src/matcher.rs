//! Ingredient matching
//!
//! Scores each recipe by the share of its ingredients covered by the user's
//! selection and keeps the recipes that are at least half covered.

use std::collections::HashSet;

use plateup_shared::Recipe;

/// Minimum match percentage for a recipe to be suggested.
pub const MATCH_THRESHOLD: f64 = 50.0;

/// Number of matches shown on the home page before "see all".
pub const PREVIEW_LIMIT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecipeMatch<'a> {
    pub recipe: &'a Recipe,
    pub match_percentage: f64,
}

/// Percentage (0-100) of `recipe` ingredients present in `selected`.
///
/// Item names compare exactly. Duplicate selections count once and a recipe
/// without ingredients scores `0`.
pub fn match_percentage<S: AsRef<str>>(recipe: &Recipe, selected: &[S]) -> f64 {
    let selected: HashSet<&str> = selected.iter().map(AsRef::as_ref).collect();

    percentage(recipe, &selected)
}

fn percentage(recipe: &Recipe, selected: &HashSet<&str>) -> f64 {
    let total = recipe.ingredients.len();
    if total == 0 {
        return 0.0;
    }

    let items: HashSet<&str> = recipe.ingredient_items().collect();
    let matched = selected.iter().filter(|name| items.contains(*name)).count();

    100.0 * matched as f64 / total as f64
}

/// Recipes matching at least [`MATCH_THRESHOLD`] percent of their
/// ingredients, best match first. Equal scores keep catalog order.
pub fn match_recipes<'a, S: AsRef<str>>(
    selected: &[S],
    recipes: &'a [Recipe],
) -> Vec<RecipeMatch<'a>> {
    let selected: HashSet<&str> = selected.iter().map(AsRef::as_ref).collect();

    let mut matches: Vec<RecipeMatch<'a>> = recipes
        .iter()
        .map(|recipe| RecipeMatch {
            recipe,
            match_percentage: percentage(recipe, &selected),
        })
        .filter(|m| m.match_percentage >= MATCH_THRESHOLD)
        .collect();

    // stable: ties stay in catalog order
    matches.sort_by(|a, b| b.match_percentage.total_cmp(&a.match_percentage));

    tracing::debug!(
        selected = selected.len(),
        candidates = recipes.len(),
        matched = matches.len(),
        "matched recipes"
    );

    matches
}

/// The first `limit` matches plus how many were left out.
pub fn preview<'m, 'a>(
    matches: &'m [RecipeMatch<'a>],
    limit: usize,
) -> (&'m [RecipeMatch<'a>], usize) {
    let shown = &matches[..matches.len().min(limit)];

    (shown, matches.len() - shown.len())
}
