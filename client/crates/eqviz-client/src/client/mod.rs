pub(crate) mod api_client;
pub(crate) mod error_message;
pub(crate) mod unauthorized;

pub use api_client::{ApiClient, AUTHORIZATION_SCHEME};
pub use unauthorized::{HookId, UnauthorizedEvent, UnauthorizedHook};
