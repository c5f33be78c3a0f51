mod season;

pub use season::Season;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct Ingredient {
    #[validate(length(min = 1))]
    pub item: String,
    #[validate(range(min = 0.0))]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[validate(length(min = 1))]
    pub instruction: String,
    /// Countdown duration in seconds, `0` when the step is untimed.
    #[serde(default)]
    pub timer: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appliance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appliance_settings: Option<String>,
    /// Oven or appliance temperature in °F.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// A catalog entry. Records are immutable once the catalog is loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[validate(range(min = 1))]
    pub id: u32,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    #[validate(nested)]
    pub steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    /// Explicit season tags. When non-empty they override keyword heuristics.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seasonal: Vec<Season>,
}

impl Recipe {
    pub fn ingredient_items(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.item.as_str())
    }

    pub fn total_timer_seconds(&self) -> u32 {
        self.steps.iter().map(|s| s.timer).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_deserializes_catalog_format() {
        let recipe: Recipe = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Caprese Salad",
            "description": "Fresh and simple.",
            "image": "https://example.com/caprese.jpg",
            "ingredients": [
                { "item": "tomato", "quantity": 2, "unit": "medium", "category": "Vegetables" },
                { "item": "basil", "quantity": 0.25, "unit": "cup", "category": "Spices" }
            ],
            "steps": [
                { "instruction": "Slice tomatoes", "timer": 0 },
                { "instruction": "Bake", "timer": 600, "appliance": "Oven", "applianceSettings": "Bake", "temperature": 350 }
            ],
            "difficulty": "easy",
            "prepTime": 10,
            "seasonal": ["summer", "spring"]
        }))
        .unwrap();

        assert_eq!(recipe.id, 7);
        assert_eq!(recipe.ingredients[1].quantity, 0.25);
        assert_eq!(recipe.steps[1].appliance_settings.as_deref(), Some("Bake"));
        assert_eq!(recipe.steps[1].temperature, Some(350.0));
        assert_eq!(recipe.difficulty, Some(Difficulty::Easy));
        assert_eq!(recipe.prep_time, Some(10));
        assert_eq!(recipe.seasonal, vec![Season::Summer, Season::Spring]);
        assert_eq!(recipe.total_timer_seconds(), 600);
    }

    #[test]
    fn test_recipe_validation_rejects_zero_id_and_blank_items() {
        let recipe = Recipe {
            id: 0,
            name: "Broken".to_owned(),
            description: String::new(),
            image: None,
            ingredients: vec![Ingredient {
                item: String::new(),
                quantity: 1.0,
                unit: "cup".to_owned(),
                category: "Others".to_owned(),
            }],
            steps: vec![],
            cuisine: None,
            difficulty: None,
            prep_time: None,
            cook_time: None,
            total_time: None,
            servings: None,
            calories: None,
            seasonal: vec![],
        };

        let errors = recipe.validate().unwrap_err();
        let fields = errors.errors();
        assert!(fields.contains_key("id"));
        assert!(fields.contains_key("ingredients"));
    }
}
