mod token_reconciler;
mod tokens_service;
mod tokens_service_impl;

pub use token_reconciler::*;
pub use tokens_service::*;
pub use tokens_service_impl::*;
