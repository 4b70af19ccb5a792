use crate::constants::SESSION_KEY;
use crate::core::errors::PortalError;
use crate::core::models::SessionRecord;
use crate::infrastructure::session::SessionStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Models the browser's key/value storage: the record is kept as a JSON
/// string under the fixed `"user"` key. Clones share state.
#[derive(Clone)]
pub struct InMemorySessionStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        InMemorySessionStore {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn write(&self, record: SessionRecord) -> Result<(), PortalError> {
        let value = serde_json::to_string(&record)
            .map_err(|e| PortalError::SessionError(format!("Failed to serialize session: {}", e)))?;
        self.entries.lock().await.insert(SESSION_KEY.to_string(), value);
        Ok(())
    }

    async fn read(&self) -> Result<Option<SessionRecord>, PortalError> {
        let entries = self.entries.lock().await;
        entries
            .get(SESSION_KEY)
            .map(|value| {
                serde_json::from_str(value)
                    .map_err(|e| PortalError::SessionError(format!("Corrupt session record: {}", e)))
            })
            .transpose()
    }

    async fn clear(&self) -> Result<(), PortalError> {
        self.entries.lock().await.remove(SESSION_KEY);
        Ok(())
    }
}
