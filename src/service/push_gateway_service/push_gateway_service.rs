use super::Error;
use crate::model::Message;
use axum::async_trait;

///
/// Topic every registered token is subscribed to
///
pub const TOPIC_ALL_USERS: &str = "all";

///
/// Delivery through external topic based push provider.
///
/// Sends are best effort: nothing is retried and provider limits
/// are not enforced here.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushGatewayService: Send + Sync {
    ///
    /// ### Errors
    /// - [Error::PartialFailure] with every rejected token
    ///
    async fn subscribe_topic(&self, topic: &str, tokens: &[String]) -> Result<(), Error>;

    ///
    /// ### Errors
    /// - [Error::PartialFailure] with every rejected token
    ///
    async fn unsubscribe_topic(&self, topic: &str, tokens: &[String]) -> Result<(), Error>;

    ///
    /// Sends message to every token
    ///
    /// ### Errors
    /// - [Error::PartialFailure] with every token the message was not sent to
    ///
    async fn send_by_tokens(
        &self,
        app_id: &str,
        tokens: &[String],
        message: &Message,
    ) -> Result<(), Error>;

    ///
    /// Sends message to every subscriber of the topic
    ///
    async fn send_by_topic(&self, app_id: &str, topic: &str, message: &Message)
        -> Result<(), Error>;
}
