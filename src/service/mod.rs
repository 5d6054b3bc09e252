pub mod messages_service;
pub mod push_gateway_service;
pub mod tokens_service;

mod validation;
