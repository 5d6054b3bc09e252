use crate::{
    model::{Platform, Token},
    repository::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokensRepository: Send + Sync {
    ///
    /// Finds token registered for the device.
    /// Token value is not part of the lookup key.
    ///
    async fn find_by_device(
        &self,
        app_id: &str,
        user_id: &str,
        device_id: &str,
        platform: Platform,
    ) -> Result<Option<Token>, Error>;

    ///
    /// Finds all tokens of the user, oldest first
    ///
    async fn find_many_by_user(&self, app_id: &str, user_id: &str) -> Result<Vec<Token>, Error>;

    ///
    /// Finds every stored token
    ///
    async fn find_all(&self) -> Result<Vec<Token>, Error>;

    async fn insert(&self, token: &Token) -> Result<(), Error>;

    ///
    /// Replaces token value, id and created_at stay untouched
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when token does not exist
    ///
    async fn update_value(&self, id: &str, value: &str) -> Result<(), Error>;

    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when token does not exist
    ///
    async fn delete(&self, id: &str) -> Result<(), Error>;
}
