use crate::models::UserProfile;

use serde::{Deserialize, Serialize};

/// Token plus the profile it was issued for. Always saved and cleared as a pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedAuthRecord {
    pub token: String,
    pub user: UserProfile,
}

impl PersistedAuthRecord {
    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}
