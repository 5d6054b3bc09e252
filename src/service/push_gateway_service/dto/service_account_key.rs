use serde::{Deserialize, Serialize};

///
/// Google service account key, as downloaded from the console
///
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub private_key_id: String,
    pub private_key: String,
    pub client_email: String,
    pub token_uri: String,
}

#[derive(Serialize)]
pub struct ServiceAccountClaims<'a> {
    pub iss: &'a str,
    pub scope: &'a str,
    pub aud: &'a str,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}
