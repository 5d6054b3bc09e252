use super::{
    dto::{
        FcmErrorResponse, FcmMessage, FcmPushGatewayServiceConfig, FcmSendRequest,
        TopicManagementRequest, TopicManagementResponse,
    },
    AccessTokenProvider, Error, MessageBuilder, PartialFailure, PushGatewayService,
    RecipientFailure,
};
use crate::model::Message;
use axum::async_trait;
use std::sync::Arc;

///
/// [PushGatewayService] backed by Firebase Cloud Messaging.
///
/// Messages go through HTTP v1 API which addresses a single token
/// per request, topic management goes through Instance ID API.
///
pub struct FcmPushGatewayService {
    config: FcmPushGatewayServiceConfig,
    message_builder: MessageBuilder,
    access_token_provider: Arc<dyn AccessTokenProvider>,
    http_client: reqwest::Client,
}

impl FcmPushGatewayService {
    pub fn new(
        config: FcmPushGatewayServiceConfig,
        access_token_provider: Arc<dyn AccessTokenProvider>,
        http_client: reqwest::Client,
    ) -> Self {
        let message_builder = MessageBuilder::new(config.web_push_server_key.clone());

        Self {
            config,
            message_builder,
            access_token_provider,
            http_client,
        }
    }

    fn send_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/messages:send",
            self.config.messaging_url.trim_end_matches('/'),
            self.config.project_id
        )
    }

    fn topic_management_url(&self, action: &str) -> String {
        format!(
            "{}/iid/v1:{action}",
            self.config.iid_url.trim_end_matches('/')
        )
    }

    async fn send(&self, access_token: &str, request: &FcmSendRequest<'_>) -> Result<(), Error> {
        let response = self
            .http_client
            .post(self.send_url())
            .bearer_auth(access_token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let reason = match serde_json::from_str::<FcmErrorResponse>(&body) {
            Ok(FcmErrorResponse { error }) => error.status.or(error.message).unwrap_or(body),
            Err(_) => body,
        };

        Err(Error::Provider { status, reason })
    }

    async fn manage_topic(
        &self,
        operation: &'static str,
        action: &str,
        topic: &str,
        tokens: &[String],
    ) -> Result<(), Error> {
        if tokens.is_empty() {
            return Ok(());
        }

        let access_token = self.access_token_provider.access_token().await?;
        let request = TopicManagementRequest {
            to: format!("/topics/{topic}"),
            registration_tokens: tokens,
        };

        let response = self
            .http_client
            .post(self.topic_management_url(action))
            .bearer_auth(access_token)
            .header("access_token_auth", "true")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reason = response.text().await.unwrap_or_default();
            return Err(Error::Provider { status, reason });
        }

        let response = response.json::<TopicManagementResponse>().await?;
        let failures = response
            .results
            .into_iter()
            .enumerate()
            .filter_map(|(index, result)| {
                result.error.map(|reason| RecipientFailure { index, reason })
            })
            .collect::<Vec<_>>();

        match failures.is_empty() {
            true => Ok(()),
            false => Err(Error::PartialFailure(PartialFailure {
                operation,
                total: tokens.len(),
                failures,
            })),
        }
    }
}

#[async_trait]
impl PushGatewayService for FcmPushGatewayService {
    async fn subscribe_topic(&self, topic: &str, tokens: &[String]) -> Result<(), Error> {
        tracing::debug!(topic, count = tokens.len(), "subscribing to topic");
        self.manage_topic("subscribe", "batchAdd", topic, tokens)
            .await
    }

    async fn unsubscribe_topic(&self, topic: &str, tokens: &[String]) -> Result<(), Error> {
        tracing::debug!(topic, count = tokens.len(), "unsubscribing from topic");
        self.manage_topic("unsubscribe", "batchRemove", topic, tokens)
            .await
    }

    async fn send_by_tokens(
        &self,
        app_id: &str,
        tokens: &[String],
        message: &Message,
    ) -> Result<(), Error> {
        tracing::debug!(app_id, count = tokens.len(), "sending to tokens");

        if tokens.is_empty() {
            return Ok(());
        }

        let access_token = self.access_token_provider.access_token().await?;
        let payload = self.message_builder.build(message);

        let mut failures = Vec::new();
        for (index, token) in tokens.iter().enumerate() {
            let request = FcmSendRequest {
                message: FcmMessage {
                    token: Some(token),
                    topic: None,
                    payload: &payload,
                },
            };

            if let Err(err) = self.send(&access_token, &request).await {
                let reason = match err {
                    Error::Provider { reason, .. } => reason,
                    err => err.to_string(),
                };
                failures.push(RecipientFailure { index, reason });
            }
        }

        match failures.is_empty() {
            true => Ok(()),
            false => Err(Error::PartialFailure(PartialFailure {
                operation: "send",
                total: tokens.len(),
                failures,
            })),
        }
    }

    async fn send_by_topic(
        &self,
        app_id: &str,
        topic: &str,
        message: &Message,
    ) -> Result<(), Error> {
        tracing::debug!(app_id, topic, "sending to topic");

        let access_token = self.access_token_provider.access_token().await?;
        let payload = self.message_builder.build(message);
        let request = FcmSendRequest {
            message: FcmMessage {
                token: None,
                topic: Some(topic),
                payload: &payload,
            },
        };

        self.send(&access_token, &request).await
    }
}
