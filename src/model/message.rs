use std::collections::BTreeMap;

///
/// Platform agnostic push message. Built per request, never persisted.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub title: String,
    pub body: String,
    pub data: BTreeMap<String, String>,
    pub ios: Option<IosOptions>,
    pub android: Option<AndroidOptions>,
    pub web: Option<WebOptions>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IosOptions {
    pub badge: i32,
    pub sound: String,
}

impl Default for IosOptions {
    /// Options used when the message carries none: badge 1 and no sound.
    fn default() -> Self {
        Self {
            badge: 1,
            sound: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AndroidOptions {
    pub click_action: String,
    pub sound: String,
    pub tag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebOptions {
    pub icon: String,
}
