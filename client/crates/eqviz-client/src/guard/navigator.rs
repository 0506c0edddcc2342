use crate::guard::Route;

/// Moves the user to another view.
///
/// The HTTP layer never navigates on its own; the application root wires an
/// implementation of this to the client's unauthorized hook.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

impl<F> Navigator for F
where
    F: Fn(Route) + Send + Sync,
{
    fn navigate(&self, route: Route) {
        self(route)
    }
}
