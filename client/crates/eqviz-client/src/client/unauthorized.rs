use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Raised once for every response that came back 401.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnauthorizedEvent {
    /// Request path relative to the base URL
    pub path: String,
    /// Reason reported by the backend, or a generic one
    pub message: String,
}

pub type UnauthorizedHook = Arc<dyn Fn(&UnauthorizedEvent) + Send + Sync>;

/// Handle for removing a registered hook again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookId(u64);

/// Listeners the application root registers for "session is no longer valid".
#[derive(Default)]
pub(crate) struct UnauthorizedHooks {
    hooks: RwLock<Vec<(HookId, UnauthorizedHook)>>,
    next_id: AtomicU64,
}

impl UnauthorizedHooks {
    pub(crate) fn register(&self, hook: UnauthorizedHook) -> HookId {
        let id = HookId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut hooks = self.hooks.write().unwrap_or_else(|e| e.into_inner());
        hooks.push((id, hook));
        id
    }

    /// Returns false when `id` was not (or no longer) registered.
    pub(crate) fn remove(&self, id: HookId) -> bool {
        let mut hooks = self.hooks.write().unwrap_or_else(|e| e.into_inner());
        let before = hooks.len();
        hooks.retain(|(hook_id, _)| *hook_id != id);
        hooks.len() != before
    }

    /// Runs every hook once. The lock is released before any hook runs, so a
    /// hook may register or remove hooks.
    pub(crate) fn fire(&self, event: &UnauthorizedEvent) {
        let hooks: Vec<UnauthorizedHook> = self
            .hooks
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(_, hook)| Arc::clone(hook))
            .collect();

        for hook in hooks {
            hook(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.hooks.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl fmt::Debug for UnauthorizedHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnauthorizedHooks")
            .field("count", &self.len())
            .finish()
    }
}
