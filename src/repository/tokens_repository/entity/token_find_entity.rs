use crate::model::{Platform, Token};
use bson::DateTime;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Deserialize)]
pub struct TokenFindEntity {
    pub _id: String,

    pub app_id: String,
    pub user_id: String,
    pub device_id: String,
    pub platform: String,

    pub value: String,

    pub created_at: DateTime,
}

impl TryFrom<TokenFindEntity> for Token {
    type Error = strum::ParseError;

    fn try_from(value: TokenFindEntity) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value._id,
            platform: Platform::from_str(&value.platform)?,
            app_id: value.app_id,
            user_id: value.user_id,
            device_id: value.device_id,
            value: value.value,
            created_at: value.created_at.timestamp_millis(),
        })
    }
}
