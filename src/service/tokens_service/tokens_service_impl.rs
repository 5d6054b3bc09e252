use super::{ReconcileError, TokenReconciler, TokensService};
use crate::{
    dto::{
        input,
        output::{self, Stage},
    },
    error::Error,
    generator::{Clock, IdGenerator},
    model::Token,
    repository::TokensRepository,
    service::{
        push_gateway_service::{PushGatewayService, TOPIC_ALL_USERS},
        validation::{parse_platform, validate_not_empty},
    },
};
use axum::async_trait;
use std::sync::Arc;

pub struct TokensServiceImpl {
    repository: Arc<dyn TokensRepository>,
    reconciler: TokenReconciler,
    push_gateway: Arc<dyn PushGatewayService>,
    id_generator: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl TokensServiceImpl {
    pub fn new(
        repository: Arc<dyn TokensRepository>,
        push_gateway: Arc<dyn PushGatewayService>,
        id_generator: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let reconciler = TokenReconciler::new(repository.clone());

        Self {
            repository,
            reconciler,
            push_gateway,
            id_generator,
            clock,
        }
    }

    fn validate_set_token(token: &input::TokenSet) -> Result<(), Error> {
        validate_not_empty(&token.app_id, "app_id must not be empty")?;
        validate_not_empty(&token.user_id, "user_id must not be empty")?;
        validate_not_empty(&token.device_id, "device_id must not be empty")?;
        validate_not_empty(&token.token, "token must not be empty")?;

        Ok(())
    }

    fn validate_delete_token(token: &input::TokenDelete) -> Result<(), Error> {
        validate_not_empty(&token.app_id, "app_id must not be empty")?;
        validate_not_empty(&token.user_id, "user_id must not be empty")?;
        validate_not_empty(&token.device_id, "device_id must not be empty")?;

        Ok(())
    }

    fn reconcile_error_stage(err: &ReconcileError) -> Stage {
        match err {
            ReconcileError::Lookup(_) => Stage::TokenLookup,
            ReconcileError::Insert(_) => Stage::TokenInsert,
            ReconcileError::Update(_) => Stage::TokenUpdate,
        }
    }
}

#[async_trait]
impl TokensService for TokensServiceImpl {
    async fn set_token(&self, token: input::TokenSet) -> Result<output::Outcome, Error> {
        tracing::info!("setting token");

        Self::validate_set_token(&token)?;
        let platform = parse_platform(&token.platform)?;

        let candidate = Token {
            id: self.id_generator.next_id(),
            platform,
            app_id: token.app_id,
            user_id: token.user_id,
            device_id: token.device_id,
            value: token.token,
            created_at: self.clock.now_millis(),
        };

        let reconciliation = match self.reconciler.reconcile(candidate).await {
            Ok(reconciliation) => reconciliation,
            Err(err) => {
                tracing::warn!(%err, "reconciling token failed");
                let stage = Self::reconcile_error_stage(&err);
                return Ok(output::Outcome::degraded(stage, [err.to_string()]));
            }
        };

        let token = reconciliation.token();
        tracing::info!(id = token.id, kind = reconciliation.kind(), "reconciled token");

        let tokens = [token.value.clone()];
        if let Err(err) = self.push_gateway.subscribe_topic(TOPIC_ALL_USERS, &tokens).await {
            tracing::warn!(%err, "subscribing token to topic failed");
            return Ok(output::Outcome::degraded(
                Stage::TopicSubscribe,
                err.reasons(),
            ));
        }

        tracing::info!("set token");

        Ok(output::Outcome::completed())
    }

    async fn delete_token(&self, token: input::TokenDelete) -> Result<output::Outcome, Error> {
        tracing::info!("deleting token");

        Self::validate_delete_token(&token)?;
        let platform = parse_platform(&token.platform)?;

        let existing = self
            .repository
            .find_by_device(&token.app_id, &token.user_id, &token.device_id, platform)
            .await;
        let existing = match existing {
            Ok(Some(existing)) => existing,
            Ok(None) => {
                tracing::info!("token not exist");
                return Ok(output::Outcome::completed());
            }
            Err(err) => {
                tracing::warn!(%err, "finding token failed");
                return Ok(output::Outcome::degraded(
                    Stage::TokenLookup,
                    [err.to_string()],
                ));
            }
        };

        if let Err(err) = self.repository.delete(&existing.id).await {
            tracing::warn!(%err, id = existing.id, "deleting token failed");
            return Ok(output::Outcome::degraded(
                Stage::TokenDelete,
                [err.to_string()],
            ));
        }
        tracing::info!(id = existing.id, "deleted token");

        let tokens = [existing.value];
        if let Err(err) = self
            .push_gateway
            .unsubscribe_topic(TOPIC_ALL_USERS, &tokens)
            .await
        {
            tracing::warn!(%err, "unsubscribing token from topic failed");
            return Ok(output::Outcome::degraded(
                Stage::TopicUnsubscribe,
                err.reasons(),
            ));
        }

        Ok(output::Outcome::completed())
    }
}
