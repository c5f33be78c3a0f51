use std::collections::BTreeSet;

use plateup_shared::Recipe;

use crate::{RecipeError, RecipeResult};

/// Tracks which steps of a recipe have been cooked.
///
/// Steps are ticked off in order: a step can only change once the step
/// before it is done.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepChecklist {
    total: usize,
    completed: BTreeSet<usize>,
}

impl StepChecklist {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            completed: BTreeSet::new(),
        }
    }

    pub fn for_recipe(recipe: &Recipe) -> Self {
        Self::new(recipe.steps.len())
    }

    /// Flips step `index` (zero-based) and returns whether it is now done.
    pub fn toggle(&mut self, index: usize) -> RecipeResult<bool> {
        if index >= self.total {
            return Err(RecipeError::StepOutOfRange {
                step: index + 1,
                total: self.total,
            });
        }

        if index > 0 && !self.completed.contains(&(index - 1)) {
            return Err(RecipeError::StepOutOfOrder {
                step: index + 1,
                previous: index,
            });
        }

        if self.completed.remove(&index) {
            return Ok(false);
        }

        self.completed.insert(index);

        Ok(true)
    }

    /// Marks step `index` done, used when its timer runs out.
    pub fn complete(&mut self, index: usize) -> RecipeResult<()> {
        if !self.is_completed(index) {
            self.toggle(index)?;
        }

        Ok(())
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_finished(&self) -> bool {
        self.completed.len() == self.total
    }
}
