use crate::core::errors::PortalError;
use crate::core::models::SessionRecord;
use async_trait::async_trait;

/// First-class lifecycle for the locally persisted session: written on login,
/// read by the dashboard pages, cleared on logout. Last writer wins.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn write(&self, record: SessionRecord) -> Result<(), PortalError>;
    async fn read(&self) -> Result<Option<SessionRecord>, PortalError>;
    async fn clear(&self) -> Result<(), PortalError>;
}

pub mod in_memory;
