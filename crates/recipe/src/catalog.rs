use std::collections::{BTreeMap, BTreeSet, HashSet};

use plateup_shared::{Recipe, bail};
use validator::Validate;

/// The read-only recipe catalog.
///
/// Construction validates every record and rejects duplicate ids, so a
/// `Catalog` value is always complete and consistent.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> plateup_shared::Result<Self> {
        let mut ids = HashSet::with_capacity(recipes.len());

        for recipe in &recipes {
            recipe.validate()?;

            if !ids.insert(recipe.id) {
                bail!("duplicate recipe id {} in catalog", recipe.id);
            }
        }

        tracing::debug!(recipes = recipes.len(), "catalog loaded");

        Ok(Self { recipes })
    }

    pub fn from_json(bytes: &[u8]) -> plateup_shared::Result<Self> {
        let recipes: Vec<Recipe> = serde_json::from_slice(bytes)?;

        Self::new(recipes)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn find(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Like [`Catalog::find`] but reports a missing id as
    /// [`plateup_shared::Error::NotFound`].
    pub fn get(&self, id: u32) -> plateup_shared::Result<&Recipe> {
        self.find(id).ok_or(plateup_shared::Error::NotFound)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Ingredient picker options: every ingredient item grouped by category.
    /// Ingredients without a category are listed under `Others`.
    pub fn ingredient_options(&self) -> BTreeMap<String, BTreeSet<String>> {
        let mut options: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for ingredient in self.recipes.iter().flat_map(|r| r.ingredients.iter()) {
            let category = if ingredient.category.is_empty() {
                "Others"
            } else {
                ingredient.category.as_str()
            };

            options
                .entry(category.to_owned())
                .or_default()
                .insert(ingredient.item.to_owned());
        }

        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
        {
            "id": 1,
            "name": "Tomato Soup",
            "description": "Warm and simple.",
            "ingredients": [
                { "item": "tomato", "quantity": 4, "unit": "medium", "category": "Vegetables" },
                { "item": "onion", "quantity": 1, "unit": "medium", "category": "Vegetables" },
                { "item": "cream", "quantity": 0.5, "unit": "cup", "category": "Dairy" }
            ],
            "steps": [{ "instruction": "Simmer", "timer": 900 }]
        },
        {
            "id": 2,
            "name": "Omelette",
            "description": "Breakfast.",
            "ingredients": [
                { "item": "egg", "quantity": 2, "unit": "pieces", "category": "Dairy" },
                { "item": "onion", "quantity": 0.5, "unit": "medium", "category": "Vegetables" },
                { "item": "salt", "quantity": 1, "unit": "pinch" }
            ],
            "steps": [{ "instruction": "Whisk and fry", "timer": 120 }]
        }
    ]"#;

    #[test]
    fn test_from_json_and_find() {
        let catalog = Catalog::from_json(CATALOG.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find(2).map(|r| r.name.as_str()), Some("Omelette"));
        assert!(catalog.find(3).is_none());
        assert_eq!(catalog.get(1).map(|r| r.id).ok(), Some(1));
        assert!(matches!(catalog.get(3), Err(plateup_shared::Error::NotFound)));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut recipes: Vec<Recipe> = serde_json::from_str(CATALOG).unwrap();
        recipes[1].id = 1;

        let err = Catalog::new(recipes).unwrap_err();
        assert!(err.to_string().contains("duplicate recipe id 1"));
    }

    #[test]
    fn test_invalid_record_is_rejected() {
        let mut recipes: Vec<Recipe> = serde_json::from_str(CATALOG).unwrap();
        recipes[0].name = String::new();

        assert!(matches!(
            Catalog::new(recipes),
            Err(plateup_shared::Error::Validate(_))
        ));
    }

    #[test]
    fn test_ingredient_options_grouped_by_category() {
        let catalog = Catalog::from_json(CATALOG.as_bytes()).unwrap();
        let options = catalog.ingredient_options();

        let vegetables: Vec<_> = options["Vegetables"].iter().map(String::as_str).collect();
        assert_eq!(vegetables, vec!["onion", "tomato"]);
        assert_eq!(options["Dairy"].len(), 2);
        assert!(options["Others"].contains("salt"));
    }
}
