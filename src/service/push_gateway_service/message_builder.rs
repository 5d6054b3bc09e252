use super::dto::{
    AndroidConfig, AndroidNotification, ApnsConfig, ApnsPayload, Aps, Notification,
    PlatformPayload, WebpushConfig, WebpushNotification,
};
use crate::model::Message;
use std::collections::BTreeMap;

///
/// Converts [Message] into payload fragments for every platform.
///
/// Output depends only on the message and the configured server key.
///
pub struct MessageBuilder {
    web_push_server_key: String,
}

impl MessageBuilder {
    pub fn new(web_push_server_key: String) -> Self {
        Self {
            web_push_server_key,
        }
    }

    pub fn build(&self, message: &Message) -> PlatformPayload {
        let ios = message.ios.clone().unwrap_or_default();
        let android = message.android.clone().unwrap_or_default();
        let web = message.web.clone().unwrap_or_default();

        PlatformPayload {
            notification: Notification {
                title: message.title.clone(),
                body: message.body.clone(),
            },
            data: message.data.clone(),
            apns: ApnsConfig {
                headers: BTreeMap::from([("apns-priority".to_string(), "10".to_string())]),
                payload: ApnsPayload {
                    aps: Aps {
                        badge: ios.badge,
                        sound: ios.sound,
                    },
                    custom_data: BTreeMap::from([(
                        "notification_foreground".to_string(),
                        serde_json::Value::Bool(true),
                    )]),
                },
            },
            android: AndroidConfig {
                notification: AndroidNotification {
                    click_action: android.click_action,
                    sound: android.sound,
                    tag: android.tag,
                },
            },
            webpush: WebpushConfig {
                headers: BTreeMap::from([
                    ("Authorization".to_string(), format!("Bearer {}", self.web_push_server_key)),
                    ("Content-Type".to_string(), "application/json".to_string()),
                ]),
                notification: WebpushNotification { icon: web.icon },
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{AndroidOptions, IosOptions, WebOptions};
    use serde_json::json;

    fn message() -> Message {
        Message {
            title: "Hello".to_string(),
            body: "World".to_string(),
            data: BTreeMap::from([
                ("z".to_string(), "last".to_string()),
                ("a".to_string(), "first".to_string()),
            ]),
            ios: None,
            android: None,
            web: None,
        }
    }

    #[test]
    fn build_ios_defaults() {
        let payload = MessageBuilder::new("key".to_string()).build(&message());

        assert_eq!(payload.apns.payload.aps.badge, 1);
        assert_eq!(payload.apns.payload.aps.sound, "");
    }

    #[test]
    fn build_ios_options_kept() {
        let message = Message {
            ios: Some(IosOptions {
                badge: 7,
                sound: "ding.caf".to_string(),
            }),
            ..message()
        };

        let payload = MessageBuilder::new("key".to_string()).build(&message);

        assert_eq!(payload.apns.payload.aps.badge, 7);
        assert_eq!(payload.apns.payload.aps.sound, "ding.caf");
    }

    #[test]
    fn build_android_and_web_defaults_empty() {
        let payload = MessageBuilder::new("key".to_string()).build(&message());

        assert_eq!(
            payload.android.notification,
            AndroidNotification {
                click_action: String::new(),
                sound: String::new(),
                tag: String::new(),
            }
        );
        assert_eq!(payload.webpush.notification.icon, "");
    }

    #[test]
    fn build_android_and_web_options_kept() {
        let message = Message {
            android: Some(AndroidOptions {
                click_action: "OPEN_CHAT".to_string(),
                sound: "default".to_string(),
                tag: "chat".to_string(),
            }),
            web: Some(WebOptions {
                icon: "https://example.com/icon.png".to_string(),
            }),
            ..message()
        };

        let payload = MessageBuilder::new("key".to_string()).build(&message);

        assert_eq!(payload.android.notification.click_action, "OPEN_CHAT");
        assert_eq!(payload.android.notification.sound, "default");
        assert_eq!(payload.android.notification.tag, "chat");
        assert_eq!(
            payload.webpush.notification.icon,
            "https://example.com/icon.png"
        );
    }

    #[test]
    fn build_fixed_headers() {
        let payload = MessageBuilder::new("server-key".to_string()).build(&message());

        assert_eq!(payload.apns.headers.get("apns-priority").unwrap(), "10");
        assert_eq!(
            payload.apns.payload.custom_data.get("notification_foreground"),
            Some(&serde_json::Value::Bool(true))
        );
        assert_eq!(
            payload.webpush.headers.get("Content-Type").unwrap(),
            "application/json"
        );
        assert_eq!(
            payload.webpush.headers.get("Authorization").unwrap(),
            "Bearer server-key"
        );
    }

    #[test]
    fn build_deterministic_bytes() {
        let message = message();

        let bytes_1 = serde_json::to_vec(&MessageBuilder::new("k".to_string()).build(&message))
            .unwrap();
        let bytes_2 = serde_json::to_vec(&MessageBuilder::new("k".to_string()).build(&message))
            .unwrap();

        assert_eq!(bytes_1, bytes_2);
    }

    #[test]
    fn build_wire_format() {
        let payload = MessageBuilder::new("k".to_string()).build(&message());

        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "notification": { "title": "Hello", "body": "World" },
                "data": { "a": "first", "z": "last" },
                "apns": {
                    "headers": { "apns-priority": "10" },
                    "payload": {
                        "aps": { "badge": 1 },
                        "notification_foreground": true
                    }
                },
                "android": { "notification": {} },
                "webpush": {
                    "headers": {
                        "Authorization": "Bearer k",
                        "Content-Type": "application/json"
                    },
                    "notification": {}
                }
            })
        );
    }

    #[test]
    fn build_empty_data_omitted() {
        let message = Message {
            data: BTreeMap::new(),
            ..message()
        };

        let payload = MessageBuilder::new("k".to_string()).build(&message);
        let value = serde_json::to_value(&payload).unwrap();

        assert!(value.get("data").is_none());
    }
}
