mod token_find_entity;
mod token_insert_entity;

pub use token_find_entity::*;
pub use token_insert_entity::*;
