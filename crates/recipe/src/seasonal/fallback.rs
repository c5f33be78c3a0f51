use std::sync::LazyLock;

use plateup_shared::{Ingredient, Recipe, Season, Step};

struct FallbackTable {
    spring: Recipe,
    summer: Recipe,
    fall: Recipe,
    winter: Recipe,
    rainy: Recipe,
}

static FALLBACKS: LazyLock<FallbackTable> = LazyLock::new(|| FallbackTable {
    spring: spring_pea_risotto(),
    summer: summer_watermelon_salad(),
    fall: roasted_pumpkin_soup(),
    winter: hearty_vegetable_soup(),
    rainy: masala_chai(),
});

/// The recipe shown when nothing in the catalog suits `season`.
pub fn fallback_recipe(season: Season) -> &'static Recipe {
    let table = &*FALLBACKS;

    match season {
        Season::Spring => &table.spring,
        Season::Summer => &table.summer,
        Season::Fall => &table.fall,
        Season::Winter => &table.winter,
        Season::Rainy => &table.rainy,
    }
}

fn ingredient(item: &str, quantity: f64, unit: &str, category: &str) -> Ingredient {
    Ingredient {
        item: item.to_owned(),
        quantity,
        unit: unit.to_owned(),
        category: category.to_owned(),
    }
}

fn step(instruction: &str, timer: u32) -> Step {
    Step {
        instruction: instruction.to_owned(),
        timer,
        appliance: None,
        appliance_settings: None,
        temperature: None,
    }
}

fn recipe(
    id: u32,
    name: &str,
    description: &str,
    image: &str,
    ingredients: Vec<Ingredient>,
    steps: Vec<Step>,
    season: Season,
) -> Recipe {
    Recipe {
        id,
        name: name.to_owned(),
        description: description.to_owned(),
        image: Some(image.to_owned()),
        ingredients,
        steps,
        cuisine: None,
        difficulty: None,
        prep_time: None,
        cook_time: None,
        total_time: None,
        servings: None,
        calories: None,
        seasonal: vec![season],
    }
}

fn summer_watermelon_salad() -> Recipe {
    recipe(
        101,
        "Summer Watermelon Salad",
        "A refreshing summer salad with watermelon, feta, and mint.",
        "https://images.unsplash.com/photo-1563114773-84221bd62daa?auto=format&fit=crop&w=1170&q=80",
        vec![
            ingredient("Watermelon", 4.0, "cups", "Fruits"),
            ingredient("Feta Cheese", 1.0, "cup", "Dairy"),
            ingredient("Mint", 0.25, "cup", "Vegetables"),
            ingredient("Lime", 1.0, "piece", "Fruits"),
            ingredient("Olive Oil", 2.0, "tablespoons", "Others"),
        ],
        vec![
            step("Cut watermelon into cubes", 0),
            step("Combine all ingredients in a bowl", 0),
            step("Drizzle with olive oil and lime juice", 0),
            step("Chill before serving", 900),
        ],
        Season::Summer,
    )
}

fn masala_chai() -> Recipe {
    recipe(
        102,
        "Masala Chai",
        "Warm, spiced tea perfect for rainy days.",
        "https://images.unsplash.com/photo-1571934811356-5cc061b6821f?auto=format&fit=crop&w=1074&q=80",
        vec![
            ingredient("Tea Leaves", 2.0, "tablespoons", "Others"),
            ingredient("Water", 2.0, "cups", "Others"),
            ingredient("Milk", 1.0, "cup", "Dairy"),
            ingredient("Cardamom", 4.0, "pods", "Spices"),
            ingredient("Cinnamon", 1.0, "stick", "Spices"),
            ingredient("Ginger", 1.0, "inch", "Spices"),
            ingredient("Sugar", 2.0, "tablespoons", "Others"),
        ],
        vec![
            step("Boil water with spices", 300),
            step("Add tea leaves and simmer", 180),
            step("Add milk and sugar, bring to a boil", 180),
            step("Strain and serve hot", 0),
        ],
        Season::Rainy,
    )
}

fn hearty_vegetable_soup() -> Recipe {
    recipe(
        103,
        "Hearty Vegetable Soup",
        "A warming soup perfect for cold winter days.",
        "https://images.unsplash.com/photo-1547592166-23ac45744acd?auto=format&fit=crop&w=1171&q=80",
        vec![
            ingredient("Carrot", 2.0, "medium", "Vegetables"),
            ingredient("Potato", 2.0, "medium", "Vegetables"),
            ingredient("Onion", 1.0, "medium", "Vegetables"),
            ingredient("Celery", 2.0, "stalks", "Vegetables"),
            ingredient("Vegetable Broth", 6.0, "cups", "Others"),
            ingredient("Thyme", 1.0, "teaspoon", "Spices"),
            ingredient("Bay Leaf", 1.0, "piece", "Spices"),
        ],
        vec![
            step("Chop all vegetables into bite-sized pieces", 0),
            step("Heat oil in a large pot and sauté onions until translucent", 300),
            step("Add remaining vegetables and cook for 5 minutes", 300),
            step("Add broth, thyme, and bay leaf, bring to a boil", 600),
            step("Reduce heat and simmer until vegetables are tender", 1200),
            step("Season with salt and pepper to taste", 0),
        ],
        Season::Winter,
    )
}

fn spring_pea_risotto() -> Recipe {
    recipe(
        104,
        "Spring Pea Risotto",
        "A bright, fresh risotto celebrating spring vegetables.",
        "https://images.unsplash.com/photo-1633352615955-f0c99e8b7e5a?auto=format&fit=crop&w=1170&q=80",
        vec![
            ingredient("Arborio Rice", 1.5, "cups", "Grains"),
            ingredient("Fresh Peas", 1.0, "cup", "Vegetables"),
            ingredient("Asparagus", 1.0, "bunch", "Vegetables"),
            ingredient("Onion", 1.0, "small", "Vegetables"),
            ingredient("Vegetable Broth", 4.0, "cups", "Others"),
            ingredient("White Wine", 0.5, "cup", "Others"),
            ingredient("Parmesan Cheese", 0.5, "cup", "Dairy"),
        ],
        vec![
            step("Heat broth in a separate pot and keep warm", 300),
            step("Sauté diced onion in butter and oil until translucent", 300),
            step("Add rice and toast for 2 minutes", 120),
            step("Add wine and stir until absorbed", 180),
            step(
                "Add broth 1/2 cup at a time, stirring until absorbed before adding more",
                1200,
            ),
            step("Add peas and chopped asparagus in the last 5 minutes", 300),
            step("Stir in grated Parmesan and season to taste", 60),
        ],
        Season::Spring,
    )
}

fn roasted_pumpkin_soup() -> Recipe {
    recipe(
        105,
        "Roasted Pumpkin Soup",
        "A comforting autumn soup with spiced pumpkin flavors.",
        "https://images.unsplash.com/photo-1476718406336-bb5a9690ee2a?auto=format&fit=crop&w=687&q=80",
        vec![
            ingredient("Pumpkin", 4.0, "cups", "Vegetables"),
            ingredient("Onion", 1.0, "medium", "Vegetables"),
            ingredient("Garlic", 3.0, "cloves", "Vegetables"),
            ingredient("Vegetable Broth", 4.0, "cups", "Others"),
            ingredient("Cinnamon", 0.5, "teaspoon", "Spices"),
            ingredient("Nutmeg", 0.25, "teaspoon", "Spices"),
            ingredient("Cream", 0.5, "cup", "Dairy"),
        ],
        vec![
            step(
                "Roast pumpkin chunks with oil, salt, and pepper until tender",
                1800,
            ),
            step("Sauté diced onion and garlic until soft", 300),
            step("Add roasted pumpkin, spices, and broth", 0),
            step("Simmer for 15 minutes", 900),
            step("Blend until smooth and stir in cream", 120),
            step("Serve with toasted pumpkin seeds", 0),
        ],
        Season::Fall,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::VariantArray;
    use validator::Validate;

    #[test]
    fn test_every_season_has_a_valid_fallback() {
        for season in Season::VARIANTS {
            let recipe = fallback_recipe(*season);

            assert!(recipe.validate().is_ok(), "{}", recipe.name);
            assert_eq!(recipe.seasonal, vec![*season]);
            assert!(!recipe.ingredients.is_empty());
            assert!(!recipe.steps.is_empty());
        }
    }

    #[test]
    fn test_fallback_ids() {
        assert_eq!(fallback_recipe(Season::Summer).id, 101);
        assert_eq!(fallback_recipe(Season::Rainy).id, 102);
        assert_eq!(fallback_recipe(Season::Winter).id, 103);
        assert_eq!(fallback_recipe(Season::Spring).id, 104);
        assert_eq!(fallback_recipe(Season::Fall).id, 105);
    }

    #[test]
    fn test_fallback_is_built_once() {
        let first = fallback_recipe(Season::Fall) as *const Recipe;
        let second = fallback_recipe(Season::Fall) as *const Recipe;

        assert_eq!(first, second);
    }
}
