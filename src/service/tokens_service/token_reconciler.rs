use crate::{
    model::Token,
    repository::{self, TokensRepository},
};
use std::sync::Arc;

///
/// How registration was applied to the store
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// Device registered for the first time
    Created(Token),
    /// Device registered again with a new value, id and created_at kept
    Rotated(Token),
    /// Same value already stored, nothing written
    Unchanged(Token),
}

impl Reconciliation {
    pub fn token(&self) -> &Token {
        match self {
            Reconciliation::Created(token) => token,
            Reconciliation::Rotated(token) => token,
            Reconciliation::Unchanged(token) => token,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Reconciliation::Created(_) => "created",
            Reconciliation::Rotated(_) => "rotated",
            Reconciliation::Unchanged(_) => "unchanged",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    #[error("token lookup failed: {0}")]
    Lookup(repository::Error),

    #[error("token insert failed: {0}")]
    Insert(repository::Error),

    #[error("token update failed: {0}")]
    Update(repository::Error),
}

///
/// Decides whether registration creates a token, rotates value
/// of the existing one or changes nothing.
///
/// Lookup and write are separate operations, so concurrent registrations
/// of the same device may still both insert.
///
pub struct TokenReconciler {
    repository: Arc<dyn TokensRepository>,
}

impl TokenReconciler {
    pub fn new(repository: Arc<dyn TokensRepository>) -> Self {
        Self { repository }
    }

    pub async fn reconcile(&self, candidate: Token) -> Result<Reconciliation, ReconcileError> {
        let existing = self
            .repository
            .find_by_device(
                &candidate.app_id,
                &candidate.user_id,
                &candidate.device_id,
                candidate.platform,
            )
            .await
            .map_err(ReconcileError::Lookup)?;

        match existing {
            Some(existing) if existing.value == candidate.value => {
                Ok(Reconciliation::Unchanged(existing))
            }
            Some(existing) => {
                self.repository
                    .update_value(&existing.id, &candidate.value)
                    .await
                    .map_err(ReconcileError::Update)?;

                Ok(Reconciliation::Rotated(Token {
                    value: candidate.value,
                    ..existing
                }))
            }
            None => {
                self.repository
                    .insert(&candidate)
                    .await
                    .map_err(ReconcileError::Insert)?;

                Ok(Reconciliation::Created(candidate))
            }
        }
    }
}
