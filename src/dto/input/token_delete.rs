use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TokenDelete {
    pub app_id: String,
    pub user_id: String,
    pub platform: String,
    pub device_id: String,
}
