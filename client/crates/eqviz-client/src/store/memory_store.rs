use crate::store::{PersistedAuthRecord, StoreError, StoreResult, TokenStore};

use std::sync::Mutex;

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    record: Mutex<Option<PersistedAuthRecord>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: PersistedAuthRecord) -> Self {
        Self {
            record: Mutex::new(Some(record)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, record: &PersistedAuthRecord) -> StoreResult<()> {
        let mut guard = self.record.lock().map_err(|_| StoreError::poisoned())?;
        *guard = Some(record.clone());
        Ok(())
    }

    fn load(&self) -> StoreResult<Option<PersistedAuthRecord>> {
        let guard = self.record.lock().map_err(|_| StoreError::poisoned())?;
        Ok(guard.clone())
    }

    fn token(&self) -> StoreResult<Option<String>> {
        let guard = self.record.lock().map_err(|_| StoreError::poisoned())?;
        Ok(guard.as_ref().map(|r| r.token.clone()))
    }

    fn clear(&self) -> StoreResult<()> {
        let mut guard = self.record.lock().map_err(|_| StoreError::poisoned())?;
        *guard = None;
        Ok(())
    }
}
