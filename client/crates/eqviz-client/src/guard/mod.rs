//! Gatekeeping for views that need a signed-in user.

pub(crate) mod navigator;
pub(crate) mod route;

pub use navigator::Navigator;
pub use route::Route;

use crate::client::{ApiClient, HookId};
use crate::models::UserProfile;
use crate::session::SessionState;

use std::sync::Arc;

/// Outcome of checking the session before rendering a protected view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision<'a> {
    /// Session still loading, render a placeholder
    Pending,
    Redirect(Route),
    Allow(&'a UserProfile),
}

/// Decide what a protected view should do for the given session state.
pub fn guard(state: &SessionState) -> GuardDecision<'_> {
    match state {
        SessionState::Loading => GuardDecision::Pending,
        SessionState::Unauthenticated => GuardDecision::Redirect(Route::Login),
        SessionState::Authenticated(user) => GuardDecision::Allow(user),
    }
}

/// Like [`guard`], but public routes are always allowed through.
///
/// Returns `None` when the route can render without a user.
pub fn resolve(route: Route, state: &SessionState) -> Option<GuardDecision<'_>> {
    route.requires_auth().then(|| guard(state))
}

/// Send the user to the login view whenever `client` sees a 401.
pub fn redirect_on_unauthorized(client: &ApiClient, navigator: Arc<dyn Navigator>) -> HookId {
    client.on_unauthorized(move |_event| navigator.navigate(Route::Login))
}
