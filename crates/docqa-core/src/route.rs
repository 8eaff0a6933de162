//! Client-side routes and the session guard in front of them.

use crate::session::Session;
use std::fmt;
use std::time::Duration;

/// How long a success message stays visible before an auth redirect.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Upload and ask. Requires a session.
    Home,
    Login,
    Signup,
}

impl Route {
    /// Match a path exactly. Unknown paths yield `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "" => Some(Route::Home),
            "/login" => Some(Route::Login),
            "/signup" => Some(Route::Signup),
            _ => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
        }
    }

    pub fn requires_session(self) -> bool {
        matches!(self, Route::Home)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Guard state, recomputed from the session on every navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Gated,
    Open,
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

impl Navigation {
    /// The route that ends up on screen after following redirects.
    pub fn destination(self) -> Route {
        match self {
            Navigation::Render(route) | Navigation::Redirect(route) => route,
        }
    }
}

/// A navigation to perform once `after` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub to: Route,
    pub after: Duration,
}

impl Redirect {
    /// Redirect after the standard success-message delay.
    pub fn delayed(to: Route) -> Self {
        Self {
            to,
            after: REDIRECT_DELAY,
        }
    }
}

/// Decides whether a route may render for the current session.
///
/// Holds no state of its own; the session is consulted on every call.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    session: Session,
}

impl RouteGuard {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn state(&self) -> GuardState {
        if self.session.is_authenticated() {
            GuardState::Open
        } else {
            GuardState::Gated
        }
    }

    /// Check a known route.
    pub fn check(&self, route: Route) -> Navigation {
        if route.requires_session() && self.state() == GuardState::Gated {
            Navigation::Redirect(Route::Login)
        } else {
            Navigation::Render(route)
        }
    }

    /// Resolve a raw path. Unknown paths go to `/`, which may in turn
    /// redirect to `/login`.
    pub fn navigate(&self, path: &str) -> Navigation {
        match Route::from_path(path) {
            Some(route) => self.check(route),
            None => Navigation::Redirect(self.check(Route::Home).destination()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn guard(token: Option<&str>) -> RouteGuard {
        let session = Session::in_memory();
        if let Some(t) = token {
            session.sign_in(t).unwrap();
        }
        RouteGuard::new(session)
    }

    #[rstest]
    #[case("/", Some(Route::Home))]
    #[case("", Some(Route::Home))]
    #[case("/login", Some(Route::Login))]
    #[case("/login/", Some(Route::Login))]
    #[case("/signup?next=/", Some(Route::Signup))]
    #[case("/admin", None)]
    #[case("/login/extra", None)]
    fn test_from_path(#[case] path: &str, #[case] expected: Option<Route>) {
        assert_eq!(Route::from_path(path), expected);
    }

    #[test]
    fn test_home_gated_without_token() {
        let guard = guard(None);
        assert_eq!(guard.state(), GuardState::Gated);
        assert_eq!(guard.check(Route::Home), Navigation::Redirect(Route::Login));
    }

    #[test]
    fn test_home_open_with_token() {
        let guard = guard(Some("T"));
        assert_eq!(guard.state(), GuardState::Open);
        assert_eq!(guard.check(Route::Home), Navigation::Render(Route::Home));
    }

    #[rstest]
    #[case(None)]
    #[case(Some("T"))]
    fn test_auth_pages_always_render(#[case] token: Option<&str>) {
        let guard = guard(token);
        assert_eq!(guard.check(Route::Login), Navigation::Render(Route::Login));
        assert_eq!(guard.check(Route::Signup), Navigation::Render(Route::Signup));
    }

    #[test]
    fn test_unknown_path_redirects_home_or_login() {
        assert_eq!(
            guard(Some("T")).navigate("/nowhere"),
            Navigation::Redirect(Route::Home)
        );
        assert_eq!(
            guard(None).navigate("/nowhere"),
            Navigation::Redirect(Route::Login)
        );
    }

    #[test]
    fn test_guard_reevaluates_after_sign_out() {
        let session = Session::in_memory();
        session.sign_in("T").unwrap();
        let guard = RouteGuard::new(session.clone());
        assert_eq!(guard.navigate("/"), Navigation::Render(Route::Home));

        session.sign_out().unwrap();
        assert_eq!(guard.navigate("/"), Navigation::Redirect(Route::Login));
    }

    #[test]
    fn test_delayed_redirect() {
        let redirect = Redirect::delayed(Route::Home);
        assert_eq!(redirect.to, Route::Home);
        assert_eq!(redirect.after, Duration::from_millis(1500));
    }
}
