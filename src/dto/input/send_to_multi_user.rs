use super::Message;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SendToMultiUser {
    pub app_id: String,
    /// Tokens are collected in this order
    pub user_id_list: Vec<String>,
    pub message: Message,
}
