mod error;
pub mod recipe;

pub use error::*;
pub use recipe::{Difficulty, Ingredient, Recipe, Season, Step};
