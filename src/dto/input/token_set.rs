use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TokenSet {
    pub app_id: String,
    pub user_id: String,
    pub platform: String,
    pub device_id: String,
    pub token: String,
}
