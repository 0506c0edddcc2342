use crate::models::UserProfile;

use serde::Deserialize;

/// Token and user issued by login or register.
///
/// Login nests the user under `user`; register returns the user fields next
/// to the token. Both shapes deserialize into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AuthPayload {
    Nested {
        token: String,
        user: UserProfile,
    },
    Flat {
        token: String,
        #[serde(flatten)]
        user: UserProfile,
    },
}

impl<'de> Deserialize<'de> for AuthResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (token, user) = match AuthPayload::deserialize(deserializer)? {
            AuthPayload::Nested { token, user } => (token, user),
            AuthPayload::Flat { token, user } => (token, user),
        };
        Ok(AuthResponse { token, user })
    }
}
