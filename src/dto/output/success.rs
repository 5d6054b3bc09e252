use super::Outcome;
use axum::http::StatusCode;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Success {
    pub status: u16,
    pub outcome: Outcome,
}

impl From<Outcome> for Success {
    fn from(outcome: Outcome) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            outcome,
        }
    }
}
