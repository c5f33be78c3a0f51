mod favorites;
mod kv;
mod pantry;

pub use favorites::*;
pub use kv::*;
pub use pantry::*;
