//! eqviz-client
//!
//! Session-aware client for the Chemical Equipment Parameter Visualizer API:
//! token persistence, a request pipeline that attaches and invalidates the
//! token, the login/register/logout state machine and the route guard.

pub mod client;
pub mod error;
pub mod guard;
pub mod models;
pub mod session;
pub mod store;
pub mod validators;

#[cfg(test)]
mod tests;

pub use client::{ApiClient, HookId, UnauthorizedEvent};
pub use error::{ClientError, Result as ClientResult};
pub use guard::{GuardDecision, Navigator, Route, guard, resolve};
pub use session::{AuthSession, SessionState};
pub use store::{FileTokenStore, MemoryTokenStore, PersistedAuthRecord, TokenStore};
