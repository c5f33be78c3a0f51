use plateup_shared::Recipe;

use crate::{KeyValueStore, read_json, write_json};

pub const FAVORITES_KEY: &str = "favoriteRecipes";

/// The user's favorite recipe ids, persisted as a JSON array.
#[derive(Debug, Clone)]
pub struct Favorites<S> {
    store: S,
}

impl<S: KeyValueStore> Favorites<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored ids in insertion order. Duplicates left by older writers are
    /// dropped.
    pub fn ids(&self) -> plateup_shared::Result<Vec<u32>> {
        let mut ids: Vec<u32> = read_json(&self.store, FAVORITES_KEY)?.unwrap_or_default();
        let mut seen = std::collections::HashSet::new();
        ids.retain(|id| seen.insert(*id));

        Ok(ids)
    }

    pub fn contains(&self, id: u32) -> plateup_shared::Result<bool> {
        Ok(self.ids()?.contains(&id))
    }

    /// Adds or removes `id` and returns whether it is now a favorite.
    pub fn toggle(&self, id: u32) -> plateup_shared::Result<bool> {
        let mut ids = self.ids()?;

        let favorite = match ids.iter().position(|existing| *existing == id) {
            Some(index) => {
                ids.remove(index);
                false
            }
            None => {
                ids.push(id);
                true
            }
        };

        write_json(&self.store, FAVORITES_KEY, &ids)?;

        tracing::info!(recipe_id = id, favorite, "favorite toggled");

        Ok(favorite)
    }

    /// Favorite recipes in catalog order. Ids missing from the catalog are
    /// skipped.
    pub fn recipes<'a>(
        &self,
        recipes: &'a [Recipe],
    ) -> plateup_shared::Result<Vec<&'a Recipe>> {
        let ids = self.ids()?;

        Ok(recipes.iter().filter(|r| ids.contains(&r.id)).collect())
    }
}
