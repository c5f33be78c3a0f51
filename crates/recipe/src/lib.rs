pub mod catalog;
pub mod checklist;
pub mod detail;
pub mod error;
pub mod matcher;
pub mod seasonal;

pub use catalog::Catalog;
pub use checklist::StepChecklist;
pub use detail::{Servings, fahrenheit_to_celsius, format_quantity, scaled_ingredients};
pub use error::{RecipeError, RecipeResult};
pub use matcher::{
    MATCH_THRESHOLD, PREVIEW_LIMIT, RecipeMatch, match_percentage, match_recipes, preview,
};
pub use seasonal::{
    SEASONAL_LIMIT, SeasonProfile, SeasonalRecommendations, classify, fallback_recipe,
    is_in_season, profile, recommend,
};
