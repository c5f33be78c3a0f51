mod state;
mod ticker;

pub use state::*;
pub use ticker::*;
