use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagesService: Send + Sync {
    ///
    /// Send message to every device of the user.
    /// Nothing is sent when user has no tokens.
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - app_id or user_id is empty
    ///
    async fn send_to_user(&self, request: input::SendToUser) -> Result<output::Outcome, Error>;

    ///
    /// Send message to every device of every user with a single
    /// provider call. Users without tokens are skipped.
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - app_id is empty
    ///     - user_id_list is empty
    ///
    async fn send_to_multi_user(
        &self,
        request: input::SendToMultiUser,
    ) -> Result<output::Outcome, Error>;

    ///
    /// Broadcast message through the topic of all users,
    /// tokens are not looked up.
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - app_id is empty
    ///
    async fn send_to_all_user(
        &self,
        request: input::SendToAllUser,
    ) -> Result<output::Outcome, Error>;
}
