//! Login, registration and logout on top of [`ApiClient`] and its token store.
//!
//! State is published through a `watch` channel. Every transition writes (or
//! clears) the token store first and publishes second, so a subscriber that
//! sees `Authenticated` can rely on the token already being on disk.
//!
//! Overlapping calls are not serialised. If two logins race, whichever
//! response resolves last determines both the stored record and the final
//! state. A logout issued while a login is in flight can be overtaken by that
//! login.

use crate::client::{ApiClient, HookId};
use crate::models::{AuthResponse, Credentials, RegistrationInput, UserProfile};
use crate::session::SessionState;
use crate::store::PersistedAuthRecord;
use crate::validators::{ValidationError, validate_password};
use crate::{ClientError, ClientResult};

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::watch;

pub struct AuthSession {
    client: Arc<ApiClient>,
    state_tx: Arc<watch::Sender<SessionState>>,
    state_rx: watch::Receiver<SessionState>,
    hook_id: HookId,
}

impl AuthSession {
    /// Create a session in the `Loading` state.
    ///
    /// Registers a 401 hook on `client` that drops the session to
    /// `Unauthenticated`. The hook is removed again when the session is
    /// dropped. Call [`restore`](Self::restore) to read the persisted record.
    pub fn new(client: Arc<ApiClient>) -> Self {
        let (state_tx, state_rx) = watch::channel(SessionState::Loading);
        let state_tx = Arc::new(state_tx);

        let hook_tx = Arc::clone(&state_tx);
        let hook_id = client.on_unauthorized(move |event| {
            info!("Session invalidated by 401 from {}", event.path);
            hook_tx.send_replace(SessionState::Unauthenticated);
        });

        Self {
            client,
            state_tx,
            state_rx,
            hook_id,
        }
    }

    /// [`new`](Self::new) followed by [`restore`](Self::restore).
    pub fn start(client: Arc<ApiClient>) -> Self {
        let session = Self::new(client);
        session.restore();
        session
    }

    /// Leave `Loading` based on what the token store holds.
    pub fn restore(&self) -> SessionState {
        let state = match self.client.store().load() {
            Ok(Some(record)) => {
                info!("Restored session for {}", record.user.username);
                SessionState::Authenticated(record.user)
            }
            Ok(None) => SessionState::Unauthenticated,
            Err(e) => {
                warn!("Could not read persisted session: {e}");
                SessionState::Unauthenticated
            }
        };

        self.set_state(state.clone());
        state
    }

    /// Exchange credentials for a session. On failure the state is left as it
    /// was and the error is returned.
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<UserProfile> {
        let response = self.client.login(credentials).await?;
        self.establish(response)
    }

    /// Create an account and sign in with it.
    ///
    /// The password length is checked locally before anything is sent; the
    /// backend still has the final word on what it accepts.
    pub async fn register(&self, input: &RegistrationInput) -> ClientResult<UserProfile> {
        if !validate_password(&input.password) {
            return Err(ValidationError::PasswordTooShort.into());
        }

        let response = self.client.register(input).await?;
        self.establish(response)
    }

    /// End the session.
    ///
    /// The server call is best effort and skipped when no token is stored.
    /// Local cleanup always runs: the store is cleared and the state becomes
    /// `Unauthenticated` even if the server could not be reached. Only a
    /// failure to clear the store is returned.
    ///
    /// A token the server already expired makes the logout call itself answer
    /// 401, which runs the client's unauthorized hooks like any other 401.
    pub async fn logout(&self) -> ClientResult<()> {
        let has_token = match self.client.store().token() {
            Ok(token) => token.is_some(),
            Err(e) => {
                warn!("Could not read auth token before logout: {e}");
                false
            }
        };

        if has_token && let Err(e) = self.client.logout().await {
            warn!("Server-side logout failed, clearing local session anyway: {e}");
        }

        let cleared = self.client.store().clear();
        self.set_state(SessionState::Unauthenticated);
        info!("Logged out");

        cleared.map_err(ClientError::from)
    }

    fn establish(&self, response: AuthResponse) -> ClientResult<UserProfile> {
        let record = PersistedAuthRecord::new(response.token, response.user);
        self.client.store().save(&record)?;

        info!("Signed in as {}", record.user.username);
        self.set_state(SessionState::Authenticated(record.user.clone()));
        Ok(record.user)
    }

    fn set_state(&self, state: SessionState) {
        self.state_tx.send_replace(state);
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_rx.clone()
    }

    /// Get current state.
    pub fn state(&self) -> SessionState {
        self.state_rx.borrow().clone()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state_rx.borrow().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state_rx.borrow().is_authenticated()
    }

    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }
}

impl Drop for AuthSession {
    fn drop(&mut self) {
        self.client.remove_unauthorized(self.hook_id);
    }
}
