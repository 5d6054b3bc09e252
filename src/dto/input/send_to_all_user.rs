use super::Message;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SendToAllUser {
    pub app_id: String,
    pub message: Message,
}
