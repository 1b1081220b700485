use tracing::warn;

/// Capability to send the user back to the login entry point
///
/// Invoked once the session has been cleared after an unrecoverable
/// authentication failure. Any `Fn(&str)` closure is a navigator.
pub trait Navigator: Send + Sync {
    /// Navigates to `route`
    fn navigate(&self, route: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str) + Send + Sync,
{
    fn navigate(&self, route: &str) {
        self(route)
    }
}

/// Navigator that only reports the redirect through `tracing`
///
/// Suitable for headless programs where there is no login view to show.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: &str) {
        warn!("Session expired, login required at {}", route);
    }
}
