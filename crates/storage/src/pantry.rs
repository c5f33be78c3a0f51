use plateup_shared::bail;

use crate::{KeyValueStore, read_json, write_json};

pub const SELECTED_INGREDIENTS_KEY: &str = "selectedIngredients";

/// Ingredient picker state: names in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSelection {
    items: Vec<String>,
}

impl IngredientSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut selection = Self::new();
        for item in items {
            let item = item.into();
            if !selection.contains(&item) {
                selection.items.push(item);
            }
        }

        selection
    }

    /// Picks `name` if absent, drops it otherwise. Returns whether it is
    /// now selected.
    pub fn toggle(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();

        match self.items.iter().position(|item| *item == name) {
            Some(index) => {
                self.items.remove(index);
                false
            }
            None => {
                self.items.push(name);
                true
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Persists the ingredient selection handed from the picker to the matcher.
#[derive(Debug, Clone)]
pub struct Pantry<S> {
    store: S,
}

impl<S: KeyValueStore> Pantry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> plateup_shared::Result<IngredientSelection> {
        let items: Vec<String> =
            read_json(&self.store, SELECTED_INGREDIENTS_KEY)?.unwrap_or_default();

        Ok(IngredientSelection::from_items(items))
    }

    pub fn save(&self, selection: &IngredientSelection) -> plateup_shared::Result<()> {
        if selection.is_empty() {
            bail!("Please select at least one ingredient!");
        }

        write_json(&self.store, SELECTED_INGREDIENTS_KEY, selection.items())?;

        tracing::info!(count = selection.len(), "ingredient selection saved");

        Ok(())
    }

    pub fn clear(&self) -> plateup_shared::Result<()> {
        self.store.remove(SELECTED_INGREDIENTS_KEY)
    }
}
