use crate::core::errors::PortalError;
use crate::core::models::{AuthSession, AuthUser, SignupMetadata};
use async_trait::async_trait;

/// Client seam for the hosted authentication service.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Creates an identity from email/password, attaching the signup fields
    /// as auxiliary metadata.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: SignupMetadata,
    ) -> Result<AuthUser, PortalError>;

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, PortalError>;

    /// Compensation hook: removes an identity whose profile row could not be
    /// written, so a failed two-phase signup leaves no orphan behind.
    async fn delete_user(&self, user_id: &str) -> Result<(), PortalError>;
}

pub mod in_memory;
