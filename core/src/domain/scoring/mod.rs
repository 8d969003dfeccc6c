pub mod engine;
pub mod entities;
pub mod restrictions;

pub use engine::*;
pub use entities::*;
