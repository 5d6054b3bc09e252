mod entity;
mod tokens_repository;
mod tokens_repository_impl;

pub use tokens_repository::*;
pub use tokens_repository_impl::*;
