use anyhow::anyhow;
use std::net::SocketAddr;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub max_http_content_len: usize,

    pub fcm_project_id: String,
    /// Path to service account key in JSON format
    pub fcm_credentials_path: String,
    pub fcm_server_key: String,
    pub fcm_messaging_url: String,
    pub fcm_iid_url: String,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("PUSH_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("PUSH_NOTIFIER_LOG_FILENAME")?;
        let bind_address = Self::env_var("PUSH_NOTIFIER_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("PUSH_NOTIFIER_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("PUSH_NOTIFIER_DB_NAME")?;
        let max_http_content_len = Self::env_var("PUSH_NOTIFIER_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let fcm_project_id = Self::env_var("PUSH_NOTIFIER_FCM_PROJECT_ID")?;
        let fcm_credentials_path = Self::env_var("PUSH_NOTIFIER_FCM_CREDENTIALS_PATH")?;
        let fcm_server_key = Self::env_var("PUSH_NOTIFIER_FCM_SERVER_KEY")?;
        let fcm_messaging_url = Self::env_var("PUSH_NOTIFIER_FCM_MESSAGING_URL")?;
        let fcm_iid_url = Self::env_var("PUSH_NOTIFIER_FCM_IID_URL")?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            max_http_content_len,
            fcm_project_id,
            fcm_credentials_path,
            fcm_server_key,
            fcm_messaging_url,
            fcm_iid_url,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
