use super::MessagesService;
use crate::{
    dto::{
        input,
        output::{self, Stage},
    },
    error::Error,
    model::{Message, Token},
    repository::TokensRepository,
    service::{
        push_gateway_service::{PushGatewayService, TOPIC_ALL_USERS},
        validation::validate_not_empty,
    },
};
use axum::async_trait;
use std::sync::Arc;

pub struct MessagesServiceImpl {
    repository: Arc<dyn TokensRepository>,
    push_gateway: Arc<dyn PushGatewayService>,
}

impl MessagesServiceImpl {
    pub fn new(
        repository: Arc<dyn TokensRepository>,
        push_gateway: Arc<dyn PushGatewayService>,
    ) -> Self {
        Self {
            repository,
            push_gateway,
        }
    }

    async fn send_by_tokens(
        &self,
        outcome: &mut output::Outcome,
        app_id: &str,
        tokens: &[String],
        message: &Message,
    ) {
        match self.push_gateway.send_by_tokens(app_id, tokens, message).await {
            Ok(()) => tracing::info!(count = tokens.len(), "sent message"),
            Err(err) => {
                tracing::warn!(%err, "sending message failed");
                outcome.add_failures(Stage::Send, err.reasons());
            }
        }
    }
}

#[async_trait]
impl MessagesService for MessagesServiceImpl {
    async fn send_to_user(&self, request: input::SendToUser) -> Result<output::Outcome, Error> {
        tracing::info!("sending message to user");

        validate_not_empty(&request.app_id, "app_id must not be empty")?;
        validate_not_empty(&request.user_id, "user_id must not be empty")?;

        let tokens = self
            .repository
            .find_many_by_user(&request.app_id, &request.user_id)
            .await;
        let tokens = match tokens {
            Ok(tokens) => Token::values(&tokens),
            Err(err) => {
                tracing::warn!(%err, "finding tokens failed");
                return Ok(output::Outcome::degraded(
                    Stage::TokenLookup,
                    [err.to_string()],
                ));
            }
        };
        tracing::info!(count = tokens.len(), "found tokens");

        if tokens.is_empty() {
            return Ok(output::Outcome::no_recipients());
        }

        let message = Message::from(request.message);
        let mut outcome = output::Outcome::completed();
        self.send_by_tokens(&mut outcome, &request.app_id, &tokens, &message)
            .await;

        Ok(outcome)
    }

    async fn send_to_multi_user(
        &self,
        request: input::SendToMultiUser,
    ) -> Result<output::Outcome, Error> {
        tracing::info!(users = request.user_id_list.len(), "sending message to users");

        validate_not_empty(&request.app_id, "app_id must not be empty")?;
        if request.user_id_list.is_empty() {
            return Err(Error::Validation("user_id_list must not be empty"));
        }

        let mut outcome = output::Outcome::completed();
        let mut tokens = Vec::new();
        for user_id in request.user_id_list.iter() {
            match self
                .repository
                .find_many_by_user(&request.app_id, user_id)
                .await
            {
                Ok(user_tokens) if user_tokens.is_empty() => {
                    tracing::debug!(user_id, "user has no tokens");
                }
                Ok(user_tokens) => tokens.extend(Token::values(&user_tokens)),
                Err(err) => {
                    tracing::warn!(%err, user_id, "finding tokens failed");
                    outcome.add_failures(
                        Stage::TokenLookup,
                        [format!("user_id: {user_id}, reason: {err}")],
                    );
                }
            }
        }
        tracing::info!(count = tokens.len(), "found tokens");

        if tokens.is_empty() {
            return match outcome.failures.is_empty() {
                true => Ok(output::Outcome::no_recipients()),
                false => Ok(outcome),
            };
        }

        let message = Message::from(request.message);
        self.send_by_tokens(&mut outcome, &request.app_id, &tokens, &message)
            .await;

        Ok(outcome)
    }

    async fn send_to_all_user(
        &self,
        request: input::SendToAllUser,
    ) -> Result<output::Outcome, Error> {
        tracing::info!("sending message to all users");

        validate_not_empty(&request.app_id, "app_id must not be empty")?;

        let message = Message::from(request.message);
        let result = self
            .push_gateway
            .send_by_topic(&request.app_id, TOPIC_ALL_USERS, &message)
            .await;

        match result {
            Ok(()) => {
                tracing::info!("sent message to topic");
                Ok(output::Outcome::completed())
            }
            Err(err) => {
                tracing::warn!(%err, "sending message to topic failed");
                Ok(output::Outcome::degraded(Stage::Send, err.reasons()))
            }
        }
    }
}
