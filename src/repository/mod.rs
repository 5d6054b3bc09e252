mod error;
mod tokens_repository;

pub use error::*;
pub use tokens_repository::*;
