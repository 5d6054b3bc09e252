use crate::model::Token;
use bson::DateTime;
use serde::Serialize;

#[derive(Serialize)]
pub struct TokenInsertEntity<'a> {
    pub _id: &'a str,

    pub app_id: &'a str,
    pub user_id: &'a str,
    pub device_id: &'a str,
    pub platform: &'a str,

    pub value: &'a str,

    pub created_at: DateTime,
}

impl<'a> From<&'a Token> for TokenInsertEntity<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            _id: &token.id,
            app_id: &token.app_id,
            user_id: &token.user_id,
            device_id: &token.device_id,
            platform: token.platform.as_ref(),
            value: &token.value,
            created_at: DateTime::from_millis(token.created_at),
        }
    }
}
