use serde::Serialize;
use std::collections::BTreeMap;

///
/// Message content shared by token and topic sends.
/// Maps are ordered so serialization is stable.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformPayload {
    pub notification: Notification,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,
    pub apns: ApnsConfig,
    pub android: AndroidConfig,
    pub webpush: WebpushConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApnsConfig {
    pub headers: BTreeMap<String, String>,
    pub payload: ApnsPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApnsPayload {
    pub aps: Aps,
    #[serde(flatten)]
    pub custom_data: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aps {
    pub badge: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sound: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AndroidConfig {
    pub notification: AndroidNotification,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AndroidNotification {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub click_action: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sound: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebpushConfig {
    pub headers: BTreeMap<String, String>,
    pub notification: WebpushNotification,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebpushNotification {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon: String,
}
