mod fcm_push_gateway_service_config;
mod fcm_request;
mod platform_payload;
mod service_account_key;

pub use fcm_push_gateway_service_config::*;
pub use fcm_request::*;
pub use platform_payload::*;
pub use service_account_key::*;
