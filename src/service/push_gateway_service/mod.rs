mod access_token_provider;
mod dto;
mod error;
mod fcm_push_gateway_service;
mod message_builder;
mod push_gateway_service;

pub use access_token_provider::*;
pub use dto::{FcmPushGatewayServiceConfig, ServiceAccountKey};
pub use error::*;
pub use fcm_push_gateway_service::*;
pub use message_builder::*;
pub use push_gateway_service::*;

#[cfg(test)]
mod test {
    use axum::Router;

    ///
    /// Serves router on random local port
    ///
    /// ### Returns
    /// base url of the server
    ///
    pub async fn spawn_fake_provider(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        format!("http://{address}")
    }
}
