pub(crate) mod auth_session;
pub(crate) mod session_state;

pub use auth_session::AuthSession;
pub use session_state::SessionState;
