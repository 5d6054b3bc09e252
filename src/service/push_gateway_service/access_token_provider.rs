use super::{
    dto::{AccessTokenResponse, ServiceAccountClaims, ServiceAccountKey},
    Error,
};
use axum::async_trait;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use time::OffsetDateTime;
use tokio::sync::Mutex;

const SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform https://www.googleapis.com/auth/firebase.messaging";
const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
const EXPIRY_MARGIN_SECS: i64 = 60;

///
/// Provides OAuth2 bearer token accepted by the push provider APIs
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, Error>;
}

struct CachedAccessToken {
    access_token: String,
    /// Unix timestamp in seconds
    expire_at: i64,
}

///
/// Exchanges JWT signed with service account key for an access token.
/// Token is cached until shortly before it expires.
///
pub struct ServiceAccountAccessTokenProvider {
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    http_client: reqwest::Client,
    cache: Mutex<Option<CachedAccessToken>>,
}

impl ServiceAccountAccessTokenProvider {
    pub fn new(key: ServiceAccountKey, http_client: reqwest::Client) -> Result<Self, Error> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;

        Ok(Self {
            key,
            encoding_key,
            http_client,
            cache: Mutex::new(None),
        })
    }

    async fn fetch_access_token(&self, now: i64) -> Result<CachedAccessToken, Error> {
        let claims = ServiceAccountClaims {
            iss: &self.key.client_email,
            scope: SCOPE,
            aud: &self.key.token_uri,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };
        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(self.key.private_key_id.clone());
        let assertion = jsonwebtoken::encode(&header, &claims, &self.encoding_key)?;

        let response = self
            .http_client
            .post(&self.key.token_uri)
            .form(&[("grant_type", GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reason = response.text().await.unwrap_or_default();
            return Err(Error::Provider { status, reason });
        }

        let response = response.json::<AccessTokenResponse>().await?;

        Ok(CachedAccessToken {
            access_token: response.access_token,
            expire_at: now + response.expires_in,
        })
    }
}

#[async_trait]
impl AccessTokenProvider for ServiceAccountAccessTokenProvider {
    async fn access_token(&self) -> Result<String, Error> {
        let mut cache = self.cache.lock().await;
        let now = OffsetDateTime::now_utc().unix_timestamp();

        if let Some(cached) = cache.as_ref() {
            if cached.expire_at - EXPIRY_MARGIN_SECS > now {
                return Ok(cached.access_token.clone());
            }
        }

        tracing::debug!("fetching access token");
        let fetched = self.fetch_access_token(now).await?;
        let access_token = fetched.access_token.clone();
        *cache = Some(fetched);
        tracing::debug!("fetched access token");

        Ok(access_token)
    }
}
