use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    service::{messages_service::MessagesService, tokens_service::TokensService},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/", get(ping))
        .route("/ping", get(ping))
        .route("/v1/tokens/set", post(set_token))
        .route("/v1/tokens/delete", post(delete_token))
        .route("/v1/messages/send_to_user", post(send_to_user))
        .route("/v1/messages/send_to_multi_user", post(send_to_multi_user))
        .route("/v1/messages/send_to_all_user", post(send_to_all_user))
}

async fn ping() -> StatusCode {
    StatusCode::OK
}

async fn set_token(
    State(tokens_service): State<Arc<dyn TokensService>>,
    token: Result<Json<input::TokenSet>, JsonRejection>,
) -> Result<Json<output::Success>, Error> {
    let Json(token) = token?;
    let outcome = tokens_service.set_token(token).await?;

    Ok(Json(outcome.into()))
}

async fn delete_token(
    State(tokens_service): State<Arc<dyn TokensService>>,
    token: Result<Json<input::TokenDelete>, JsonRejection>,
) -> Result<Json<output::Success>, Error> {
    let Json(token) = token?;
    let outcome = tokens_service.delete_token(token).await?;

    Ok(Json(outcome.into()))
}

async fn send_to_user(
    State(messages_service): State<Arc<dyn MessagesService>>,
    request: Result<Json<input::SendToUser>, JsonRejection>,
) -> Result<Json<output::Success>, Error> {
    let Json(request) = request?;
    let outcome = messages_service.send_to_user(request).await?;

    Ok(Json(outcome.into()))
}

async fn send_to_multi_user(
    State(messages_service): State<Arc<dyn MessagesService>>,
    request: Result<Json<input::SendToMultiUser>, JsonRejection>,
) -> Result<Json<output::Success>, Error> {
    let Json(request) = request?;
    let outcome = messages_service.send_to_multi_user(request).await?;

    Ok(Json(outcome.into()))
}

async fn send_to_all_user(
    State(messages_service): State<Arc<dyn MessagesService>>,
    request: Result<Json<input::SendToAllUser>, JsonRejection>,
) -> Result<Json<output::Success>, Error> {
    let Json(request) = request?;
    let outcome = messages_service.send_to_all_user(request).await?;

    Ok(Json(outcome.into()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        dto::output::{Outcome, Stage},
        service::{messages_service::MockMessagesService, tokens_service::MockTokensService},
    };
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Method, Request},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn create_router(
        tokens_service: MockTokensService,
        messages_service: MockMessagesService,
    ) -> Router {
        routing().with_state(ApplicationState {
            tokens_service: Arc::new(tokens_service),
            messages_service: Arc::new(messages_service),
        })
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn ping_ok() {
        let router = create_router(MockTokensService::new(), MockMessagesService::new());

        for uri in ["/", "/ping"] {
            let request = Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap();

            let response = router.clone().oneshot(request).await.unwrap();

            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn set_token_success_envelope() {
        let mut tokens_service = MockTokensService::new();
        tokens_service
            .expect_set_token()
            .withf(|token| {
                token.app_id == "app"
                    && token.user_id == "user"
                    && token.platform == "ios"
                    && token.device_id == "device"
                    && token.token == "abc"
            })
            .times(1)
            .returning(|_| Ok(Outcome::completed()));
        let router = create_router(tokens_service, MockMessagesService::new());

        let request = post_json(
            "/v1/tokens/set",
            r#"{"app_id":"app","user_id":"user","platform":"ios","device_id":"device","token":"abc"}"#,
        );
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "status": 200, "outcome": { "status": "completed", "failures": [] } })
        );
    }

    #[tokio::test]
    async fn set_token_unknown_platform_bad_request() {
        let mut tokens_service = MockTokensService::new();
        tokens_service
            .expect_set_token()
            .returning(|token| Err(Error::UnknownPlatform(token.platform)));
        let router = create_router(tokens_service, MockMessagesService::new());

        let request = post_json(
            "/v1/tokens/set",
            r#"{"app_id":"app","user_id":"user","platform":"windows","device_id":"device","token":"abc"}"#,
        );
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["message"], "validation error: unknown platform windows");
    }

    #[tokio::test]
    async fn set_token_missing_field_bad_request() {
        let mut tokens_service = MockTokensService::new();
        tokens_service.expect_set_token().never();
        let router = create_router(tokens_service, MockMessagesService::new());

        let request = post_json("/v1/tokens/set", r#"{"app_id":"app"}"#);
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["status"], 400);
    }

    #[tokio::test]
    async fn set_token_malformed_json_bad_request() {
        let mut tokens_service = MockTokensService::new();
        tokens_service.expect_set_token().never();
        let router = create_router(tokens_service, MockMessagesService::new());

        let request = post_json("/v1/tokens/set", "{not json");
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_token_degraded_outcome_still_ok() {
        let mut tokens_service = MockTokensService::new();
        tokens_service.expect_delete_token().returning(|_| {
            Ok(Outcome::degraded(
                Stage::TokenLookup,
                ["mongo error: connection refused".to_string()],
            ))
        });
        let router = create_router(tokens_service, MockMessagesService::new());

        let request = post_json(
            "/v1/tokens/delete",
            r#"{"app_id":"app","user_id":"user","platform":"web","device_id":"device"}"#,
        );
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "status": 200,
                "outcome": {
                    "status": "degraded",
                    "failures": [
                        { "stage": "token_lookup", "reason": "mongo error: connection refused" }
                    ]
                }
            })
        );
    }

    #[tokio::test]
    async fn send_to_user_no_recipients() {
        let mut messages_service = MockMessagesService::new();
        messages_service
            .expect_send_to_user()
            .withf(|request| request.user_id == "user" && request.message.title == "Hi")
            .returning(|_| Ok(Outcome::no_recipients()));
        let router = create_router(MockTokensService::new(), messages_service);

        let request = post_json(
            "/v1/messages/send_to_user",
            r#"{"app_id":"app","user_id":"user","message":{"title":"Hi","body":"there"}}"#,
        );
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["outcome"]["status"], "no_recipients");
    }

    #[tokio::test]
    async fn send_to_multi_user_user_id_list_passed() {
        let mut messages_service = MockMessagesService::new();
        messages_service
            .expect_send_to_multi_user()
            .withf(|request| request.user_id_list == vec!["u1".to_string(), "u2".to_string()])
            .times(1)
            .returning(|_| Ok(Outcome::completed()));
        let router = create_router(MockTokensService::new(), messages_service);

        let request = post_json(
            "/v1/messages/send_to_multi_user",
            r#"{"app_id":"app","user_id_list":["u1","u2"],"message":{"title":"Hi"}}"#,
        );
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn send_to_multi_user_validation_bad_request() {
        let mut messages_service = MockMessagesService::new();
        messages_service
            .expect_send_to_multi_user()
            .returning(|_| Err(Error::Validation("user_id_list must not be empty")));
        let router = create_router(MockTokensService::new(), messages_service);

        let request = post_json(
            "/v1/messages/send_to_multi_user",
            r#"{"app_id":"app","user_id_list":[],"message":{"title":"Hi"}}"#,
        );
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn send_to_all_user_ok() {
        let mut messages_service = MockMessagesService::new();
        messages_service
            .expect_send_to_all_user()
            .withf(|request| {
                request.app_id == "app"
                    && request.message.ios.as_ref().is_some_and(|ios| ios.badge == 5)
            })
            .times(1)
            .returning(|_| Ok(Outcome::completed()));
        let router = create_router(MockTokensService::new(), messages_service);

        let request = post_json(
            "/v1/messages/send_to_all_user",
            r#"{"app_id":"app","message":{"title":"Hi","ios":{"badge":5}}}"#,
        );
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
