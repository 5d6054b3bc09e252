use super::Message;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SendToUser {
    pub app_id: String,
    pub user_id: String,
    pub message: Message,
}
