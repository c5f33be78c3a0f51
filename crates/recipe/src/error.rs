use thiserror::Error;

pub type RecipeResult<T> = Result<T, RecipeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipeError {
    #[error("Step {step} does not exist - this recipe has {total} steps")]
    StepOutOfRange { step: usize, total: usize },

    #[error("Step {step} is locked - complete step {previous} first")]
    StepOutOfOrder { step: usize, previous: usize },
}
