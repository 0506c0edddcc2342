#![allow(dead_code)]

use eqviz_client::models::UserProfile;
use eqviz_client::{ApiClient, MemoryTokenStore, PersistedAuthRecord, TokenStore};

use std::sync::Arc;

pub fn bob() -> UserProfile {
    UserProfile {
        id: 1,
        username: "bob".into(),
        email: None,
        first_name: None,
        last_name: None,
    }
}

pub fn bob_record() -> PersistedAuthRecord {
    PersistedAuthRecord::new("abc", bob())
}

/// Client over `store`, returned together with a handle to that store.
pub fn client_with_store<S>(uri: &str, store: S) -> (ApiClient, Arc<S>)
where
    S: TokenStore + 'static,
{
    let store = Arc::new(store);
    let client = ApiClient::new(uri, Arc::clone(&store) as Arc<dyn TokenStore>);
    (client, store)
}

/// Client whose store already holds token "abc" for bob.
pub fn authenticated_client(uri: &str) -> (ApiClient, Arc<MemoryTokenStore>) {
    client_with_store(uri, MemoryTokenStore::with_record(bob_record()))
}
