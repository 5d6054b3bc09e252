use crate::model;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub data: BTreeMap<String, String>,
    pub ios: Option<IosOptions>,
    pub android: Option<AndroidOptions>,
    pub web: Option<WebOptions>,
}

#[derive(Debug, Deserialize)]
pub struct IosOptions {
    #[serde(default)]
    pub badge: i32,
    #[serde(default)]
    pub sound: String,
}

#[derive(Debug, Deserialize)]
pub struct AndroidOptions {
    #[serde(default)]
    pub click_action: String,
    #[serde(default)]
    pub sound: String,
    #[serde(default)]
    pub tag: String,
}

#[derive(Debug, Deserialize)]
pub struct WebOptions {
    #[serde(default)]
    pub icon: String,
}

impl From<Message> for model::Message {
    fn from(value: Message) -> Self {
        Self {
            title: value.title,
            body: value.body,
            data: value.data,
            ios: value.ios.map(|ios| model::IosOptions {
                badge: ios.badge,
                sound: ios.sound,
            }),
            android: value.android.map(|android| model::AndroidOptions {
                click_action: android.click_action,
                sound: android.sound,
                tag: android.tag,
            }),
            web: value.web.map(|web| model::WebOptions { icon: web.icon }),
        }
    }
}
