use super::PlatformPayload;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct FcmSendRequest<'a> {
    pub message: FcmMessage<'a>,
}

///
/// Exactly one of token and topic is set
///
#[derive(Serialize)]
pub struct FcmMessage<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<&'a str>,
    #[serde(flatten)]
    pub payload: &'a PlatformPayload,
}

#[derive(Deserialize)]
pub struct FcmErrorResponse {
    pub error: FcmErrorStatus,
}

#[derive(Deserialize)]
pub struct FcmErrorStatus {
    pub status: Option<String>,
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct TopicManagementRequest<'a> {
    pub to: String,
    pub registration_tokens: &'a [String],
}

#[derive(Deserialize)]
pub struct TopicManagementResponse {
    #[serde(default)]
    pub results: Vec<TopicManagementResult>,
}

///
/// Empty object on success
///
#[derive(Deserialize)]
pub struct TopicManagementResult {
    pub error: Option<String>,
}
