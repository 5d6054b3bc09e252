use super::ApplicationEnv;
use crate::{
    generator::{ObjectIdGenerator, SystemClock},
    repository::TokensRepositoryImpl,
    service::{
        messages_service::{MessagesService, MessagesServiceImpl},
        push_gateway_service::{
            FcmPushGatewayService, FcmPushGatewayServiceConfig, ServiceAccountAccessTokenProvider,
            ServiceAccountKey,
        },
        tokens_service::{TokensService, TokensServiceImpl},
    },
};
use anyhow::Context;
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub tokens_service: Arc<dyn TokensService>,
    pub messages_service: Arc<dyn MessagesService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let tokens_repository = TokensRepositoryImpl::new(db).await?;
    let tokens_repository = Arc::new(tokens_repository);

    tracing::info!("reading service account key");
    let service_account_key = std::fs::read_to_string(&env.fcm_credentials_path)
        .with_context(|| format!("cannot read {}", env.fcm_credentials_path))?;
    let service_account_key = serde_json::from_str::<ServiceAccountKey>(&service_account_key)?;

    tracing::info!("creating services");
    let http_client = reqwest::Client::new();
    let access_token_provider =
        ServiceAccountAccessTokenProvider::new(service_account_key, http_client.clone())?;
    let access_token_provider = Arc::new(access_token_provider);

    let config = FcmPushGatewayServiceConfig {
        project_id: env.fcm_project_id.clone(),
        messaging_url: env.fcm_messaging_url.clone(),
        iid_url: env.fcm_iid_url.clone(),
        web_push_server_key: env.fcm_server_key.clone(),
    };
    let push_gateway = FcmPushGatewayService::new(config, access_token_provider, http_client);
    let push_gateway = Arc::new(push_gateway);

    let tokens_service = TokensServiceImpl::new(
        tokens_repository.clone(),
        push_gateway.clone(),
        Arc::new(ObjectIdGenerator),
        Arc::new(SystemClock),
    );
    let tokens_service = Arc::new(tokens_service);

    let messages_service = MessagesServiceImpl::new(tokens_repository, push_gateway);
    let messages_service = Arc::new(messages_service);

    Ok((
        ApplicationState {
            tokens_service,
            messages_service,
        },
        ApplicationStateToClose { db_client },
    ))
}
