use super::Platform;

///
/// Push token registered by one app installation on one device.
///
/// At most one token exists per (app_id, user_id, device_id, platform).
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub id: String,
    pub platform: Platform,
    pub app_id: String,
    pub user_id: String,
    pub device_id: String,
    /// Opaque token issued by the push provider
    pub value: String,
    /// Unix timestamp in milliseconds
    pub created_at: i64,
}

impl Token {
    pub fn values(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(|token| token.value.clone()).collect()
    }
}
