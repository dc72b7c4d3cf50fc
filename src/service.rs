//! Deletion service abstraction.
//!
//! The panel never talks to a backend directly; it goes through the
//! [`DeletionService`] trait so a real HTTP implementation can slot in
//! behind the same interface. The shipped [`SimulatedDeletionService`]
//! settles successfully after a fixed delay.

use async_trait::async_trait;
use std::time::Duration;
use uuid::Uuid;

/// Error types for deletion service operations.
#[derive(Debug, thiserror::Error)]
pub enum DeletionError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Service error: {0}")]
    Other(String),
}

/// Acknowledgement returned once a deletion request has been accepted.
#[derive(Debug, Clone)]
pub struct DeletionReceipt {
    /// Server-side identifier of the scheduled deletion.
    pub request_id: Uuid,
    /// Account the deletion was scheduled for.
    pub account_email: String,
    /// Preformatted date the deletion takes effect.
    pub scheduled_for: String,
}

/// Collaborator that schedules an irreversible account deletion.
///
/// The real implementation would validate the caller's session, schedule
/// the deletion, and send the confirmation email previewed in the result
/// view. None of that happens client-side.
#[async_trait]
pub trait DeletionService: Send + Sync {
    async fn request_account_deletion(
        &self,
        account_email: &str,
        reason: &str,
    ) -> Result<DeletionReceipt, DeletionError>;
}

/// Stand-in service that accepts every request after a fixed delay.
pub struct SimulatedDeletionService {
    delay: Duration,
    deletion_date: String,
}

impl SimulatedDeletionService {
    pub fn new(delay: Duration, deletion_date: impl Into<String>) -> Self {
        Self {
            delay,
            deletion_date: deletion_date.into(),
        }
    }
}

#[async_trait]
impl DeletionService for SimulatedDeletionService {
    async fn request_account_deletion(
        &self,
        account_email: &str,
        reason: &str,
    ) -> Result<DeletionReceipt, DeletionError> {
        log::info!(
            "simulating deletion request for {} (reason: {})",
            account_email,
            reason
        );
        tokio::time::sleep(self.delay).await;

        Ok(DeletionReceipt {
            request_id: Uuid::new_v4(),
            account_email: account_email.to_string(),
            scheduled_for: self.deletion_date.clone(),
        })
    }
}
