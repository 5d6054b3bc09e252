mod messages_service;
mod messages_service_impl;

pub use messages_service::*;
pub use messages_service_impl::*;
