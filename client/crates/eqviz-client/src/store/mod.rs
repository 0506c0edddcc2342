//! Persistence for the auth token and the signed-in user profile.
//!
//! Both entries are written together and cleared together. Readers never
//! observe one without the other: a store holding only half of the pair is
//! reported as empty.

pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod memory_store;
pub(crate) mod persisted_auth_record;

pub use error::{Result as StoreResult, StoreError};
pub use file_store::FileTokenStore;
pub use memory_store::MemoryTokenStore;
pub use persisted_auth_record::PersistedAuthRecord;

/// Storage key for the raw token
pub const TOKEN_KEY: &str = "auth_token";
/// Storage key for the JSON-serialized user profile
pub const USER_KEY: &str = "user.json";

pub trait TokenStore: Send + Sync {
    /// Persist token and user as one unit.
    fn save(&self, record: &PersistedAuthRecord) -> StoreResult<()>;

    /// Previously saved record, or `None` when nothing (or only half) is stored.
    fn load(&self) -> StoreResult<Option<PersistedAuthRecord>>;

    /// Just the token, for attaching to outgoing requests.
    fn token(&self) -> StoreResult<Option<String>>;

    /// Remove both entries. Clearing an empty store succeeds.
    fn clear(&self) -> StoreResult<()>;
}
