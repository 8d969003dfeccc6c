pub mod entities;
pub mod schema;

pub use entities::*;
