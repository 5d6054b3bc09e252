use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokensService: Send + Sync {
    ///
    /// Register push token of the device and subscribe it
    /// to the topic of all users.
    ///
    /// ### Returns
    /// outcome with store or provider failures
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - any of the fields is empty
    /// - [Error::UnknownPlatform] when
    ///     - platform is not one of ios, android, web
    ///
    async fn set_token(&self, token: input::TokenSet) -> Result<output::Outcome, Error>;

    ///
    /// Remove push token of the device and unsubscribe it
    /// from the topic of all users. Removing token that does not exist
    /// completes without changes.
    ///
    /// ### Returns
    /// outcome with store or provider failures
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - any of the fields is empty
    /// - [Error::UnknownPlatform] when
    ///     - platform is not one of ios, android, web
    ///
    async fn delete_token(&self, token: input::TokenDelete) -> Result<output::Outcome, Error>;
}
