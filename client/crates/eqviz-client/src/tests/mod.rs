mod error;
mod error_message;
mod models;

use crate::models::UserProfile;

pub(crate) fn bob() -> UserProfile {
    UserProfile {
        id: 1,
        username: "bob".into(),
        email: Some("bob@example.com".into()),
        first_name: Some("Bob".into()),
        last_name: Some("Builder".into()),
    }
}
