pub struct FcmPushGatewayServiceConfig {
    pub project_id: String,
    /// Base URL of FCM HTTP v1 API
    pub messaging_url: String,
    /// Base URL of Instance ID API used for topic management
    pub iid_url: String,
    /// Sent as bearer token in web push headers
    pub web_push_server_key: String,
}
