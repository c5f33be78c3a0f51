#![allow(dead_code)]

use plateup_shared::{Ingredient, Recipe, Season};

pub fn recipe(id: u32, name: &str, items: &[&str]) -> Recipe {
    Recipe {
        id,
        name: name.to_owned(),
        description: String::new(),
        image: None,
        ingredients: items
            .iter()
            .map(|item| Ingredient {
                item: item.to_string(),
                quantity: 1.0,
                unit: "piece".to_owned(),
                category: "Others".to_owned(),
            })
            .collect(),
        steps: vec![],
        cuisine: None,
        difficulty: None,
        prep_time: None,
        cook_time: None,
        total_time: None,
        servings: None,
        calories: None,
        seasonal: vec![],
    }
}

pub fn tagged(mut recipe: Recipe, seasons: &[Season]) -> Recipe {
    recipe.seasonal = seasons.to_vec();
    recipe
}

pub fn described(mut recipe: Recipe, description: &str) -> Recipe {
    recipe.description = description.to_owned();
    recipe
}
