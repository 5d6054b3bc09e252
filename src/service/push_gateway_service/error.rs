use reqwest::StatusCode;
use std::fmt::Display;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    PartialFailure(PartialFailure),

    #[error("provider responded with {status}: {reason}")]
    Provider { status: StatusCode, reason: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("jwt error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl Error {
    ///
    /// Every failure reason carried by the error.
    /// Partial failures report one reason per failed recipient.
    ///
    pub fn reasons(&self) -> Vec<String> {
        match self {
            Error::PartialFailure(partial_failure) => partial_failure
                .failures
                .iter()
                .map(|failure| format!("index: {}, reason: {}", failure.index, failure.reason))
                .collect(),
            err => vec![err.to_string()],
        }
    }
}

///
/// Provider accepted the request but rejected some of the recipients
///
#[derive(Debug)]
pub struct PartialFailure {
    pub operation: &'static str,
    pub total: usize,
    pub failures: Vec<RecipientFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientFailure {
    /// Position of the token in the request
    pub index: usize,
    pub reason: String,
}

impl Display for PartialFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} failed for {}/{} tokens",
            self.operation,
            self.failures.len(),
            self.total
        )?;
        if let Some(first) = self.failures.first() {
            write!(f, ", index: {}, reason: {}", first.index, first.reason)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn partial_failure_display_first_reason() {
        let err = Error::PartialFailure(PartialFailure {
            operation: "subscribe",
            total: 3,
            failures: vec![
                RecipientFailure {
                    index: 1,
                    reason: "NOT_FOUND".to_string(),
                },
                RecipientFailure {
                    index: 2,
                    reason: "INVALID_ARGUMENT".to_string(),
                },
            ],
        });

        assert_eq!(
            err.to_string(),
            "subscribe failed for 2/3 tokens, index: 1, reason: NOT_FOUND"
        );
    }

    #[test]
    fn partial_failure_reasons_every_recipient() {
        let err = Error::PartialFailure(PartialFailure {
            operation: "send",
            total: 4,
            failures: vec![
                RecipientFailure {
                    index: 0,
                    reason: "UNREGISTERED".to_string(),
                },
                RecipientFailure {
                    index: 3,
                    reason: "INVALID_ARGUMENT".to_string(),
                },
            ],
        });

        assert_eq!(
            err.reasons(),
            vec![
                "index: 0, reason: UNREGISTERED".to_string(),
                "index: 3, reason: INVALID_ARGUMENT".to_string(),
            ]
        );
    }

    #[test]
    fn provider_error_single_reason() {
        let err = Error::Provider {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            reason: "INTERNAL".to_string(),
        };

        assert_eq!(err.reasons(), vec![err.to_string()]);
    }
}
