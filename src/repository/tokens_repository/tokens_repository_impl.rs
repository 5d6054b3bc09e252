use super::{
    entity::{TokenFindEntity, TokenInsertEntity},
    TokensRepository,
};
use crate::{
    model::{Platform, Token},
    repository::Error,
};
use axum::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::{options::IndexOptions, Database, IndexModel};

const TOKENS: &str = "push_notification_tokens";
const INDEX_NAME_DEVICE: &str = "index_app_id_user_id_device_id_platform";
const FIND_ALL_BATCH_SIZE: u32 = 300;

pub struct TokensRepositoryImpl {
    database: Database,
}

impl TokensRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.iter().any(|name| name == TOKENS) {
            tracing::debug!(collection = TOKENS, "creating collection");
            database.create_collection(TOKENS).await?;
        }

        let collection = database.collection::<Document>(TOKENS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        // Not unique: uniqueness per device is kept by the reconciler
        if !index_names.contains(&INDEX_NAME_DEVICE.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "app_id": 1,
                            "user_id": 1,
                            "device_id": 1,
                            "platform": 1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_DEVICE.to_string())
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = TOKENS,
                index = INDEX_NAME_DEVICE,
                "created index"
            );
        }

        Ok(Self { database })
    }
}

#[async_trait]
impl TokensRepository for TokensRepositoryImpl {
    async fn find_by_device(
        &self,
        app_id: &str,
        user_id: &str,
        device_id: &str,
        platform: Platform,
    ) -> Result<Option<Token>, Error> {
        let entity = self
            .database
            .collection::<TokenFindEntity>(TOKENS)
            .find_one(doc! {
                "app_id": app_id,
                "user_id": user_id,
                "device_id": device_id,
                "platform": platform.as_ref(),
            })
            .await?;

        let token = entity.map(Token::try_from).transpose()?;

        Ok(token)
    }

    async fn find_many_by_user(&self, app_id: &str, user_id: &str) -> Result<Vec<Token>, Error> {
        let entities: Vec<TokenFindEntity> = self
            .database
            .collection::<TokenFindEntity>(TOKENS)
            .find(doc! {
                "app_id": app_id,
                "user_id": user_id,
            })
            .sort(doc! { "created_at": 1, "_id": 1 })
            .await?
            .try_collect()
            .await?;

        let tokens = entities
            .into_iter()
            .map(Token::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tokens)
    }

    async fn find_all(&self) -> Result<Vec<Token>, Error> {
        let entities: Vec<TokenFindEntity> = self
            .database
            .collection::<TokenFindEntity>(TOKENS)
            .find(doc! {})
            .batch_size(FIND_ALL_BATCH_SIZE)
            .await?
            .try_collect()
            .await?;

        let tokens = entities
            .into_iter()
            .map(Token::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tokens)
    }

    async fn insert(&self, token: &Token) -> Result<(), Error> {
        self.database
            .collection::<TokenInsertEntity>(TOKENS)
            .insert_one(TokenInsertEntity::from(token))
            .await?;

        Ok(())
    }

    async fn update_value(&self, id: &str, value: &str) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(TOKENS)
            .update_one(
                doc! {
                    "_id": id,
                },
                doc! {
                    "$set": {
                        "value": value,
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        let delete_result = self
            .database
            .collection::<Document>(TOKENS)
            .delete_one(doc! {
                "_id": id,
            })
            .await?;

        match delete_result.deleted_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }
}
