use std::fmt;
use std::rc::Rc;

use log::info;
use gloo_history::HistoryListener;
use yew_router::history::History;

/// One of the five views the site can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Privacy,
    Terms,
    Cookies,
    ChildSafety,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Privacy,
        Route::Terms,
        Route::Cookies,
        Route::ChildSafety,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Privacy => "/privacy-policy",
            Route::Terms => "/terms-of-service",
            Route::Cookies => "/cookie-policy",
            Route::ChildSafety => "/child-safety-standards-policy",
        }
    }

    /// Exact, case-sensitive lookup. Anything unknown is the home page.
    pub fn resolve(path: &str) -> Route {
        Route::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .unwrap_or(Route::Home)
    }

    pub fn is_legal(self) -> bool {
        !matches!(self, Route::Home)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Route::Home => "home",
            Route::Privacy => "privacy",
            Route::Terms => "terms",
            Route::Cookies => "cookies",
            Route::ChildSafety => "child-safety",
        };
        f.write_str(name)
    }
}

/// Keeps a location callback registered. Dropping it deregisters the callback.
pub struct PathSubscription {
    _listener: HistoryListener,
}

/// Source of the current location path, decoupled from the browser so the
/// page state can be driven by an in-memory history.
pub trait PathProvider {
    fn current_path(&self) -> String;
    fn navigate(&self, path: &str);
    fn subscribe(&self, on_change: Box<dyn Fn()>) -> PathSubscription;
}

impl<H: History> PathProvider for H {
    fn current_path(&self) -> String {
        self.location().path().to_string()
    }

    fn navigate(&self, path: &str) {
        self.push(path.to_string());
    }

    fn subscribe(&self, on_change: Box<dyn Fn()>) -> PathSubscription {
        PathSubscription {
            _listener: self.listen(move || on_change()),
        }
    }
}

/// Page-level state: always exactly one route, re-resolved on every
/// location change.
pub struct Site<P: PathProvider> {
    provider: Rc<P>,
    _subscription: PathSubscription,
}

impl<P: PathProvider + 'static> Site<P> {
    pub fn mount(provider: P, on_change: impl Fn(Route) + 'static) -> Self {
        let provider = Rc::new(provider);
        info!("Mounted at {}", Route::resolve(&provider.current_path()));

        let subscription = {
            let watched = provider.clone();
            provider.subscribe(Box::new(move || {
                let route = Route::resolve(&watched.current_path());
                info!("Location changed, now showing {}", route);
                on_change(route);
            }))
        };

        Self {
            provider,
            _subscription: subscription,
        }
    }

    pub fn route(&self) -> Route {
        Route::resolve(&self.provider.current_path())
    }

    pub fn open(&self, route: Route) {
        self.provider.navigate(route.path());
    }

    pub fn go_home(&self) {
        self.open(Route::Home);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use yew_router::history::MemoryHistory;

    #[test]
    fn known_paths_resolve_to_their_views() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve("/privacy-policy"), Route::Privacy);
        assert_eq!(Route::resolve("/terms-of-service"), Route::Terms);
        assert_eq!(Route::resolve("/cookie-policy"), Route::Cookies);
        assert_eq!(
            Route::resolve("/child-safety-standards-policy"),
            Route::ChildSafety
        );
    }

    #[test]
    fn everything_else_falls_back_to_home() {
        for path in [
            "",
            "/privacy-policy/",
            "/Privacy-Policy",
            "/TERMS-OF-SERVICE",
            "privacy-policy",
            "/cookie-policy?ref=footer",
            "/does-not-exist",
        ] {
            assert_eq!(Route::resolve(path), Route::Home, "path {:?}", path);
        }
    }

    #[test]
    fn path_round_trips_through_resolve() {
        for route in Route::ALL {
            assert_eq!(Route::resolve(route.path()), route);
        }
    }

    #[test]
    fn only_home_is_not_a_legal_page() {
        let legal: Vec<Route> = Route::ALL.into_iter().filter(|r| r.is_legal()).collect();
        assert_eq!(legal.len(), 4);
        assert!(!legal.contains(&Route::Home));
    }

    #[test]
    fn initial_route_comes_from_the_current_location() {
        let history = MemoryHistory::new();
        history.push("/cookie-policy");

        let site = Site::mount(history, |_| {});
        assert_eq!(site.route(), Route::Cookies);
    }

    #[test]
    fn location_changes_are_reported_with_the_new_route() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let site = {
            let seen = seen.clone();
            Site::mount(MemoryHistory::new(), move |route| {
                seen.borrow_mut().push(route)
            })
        };

        site.open(Route::Privacy);
        site.open(Route::ChildSafety);
        site.go_home();

        assert_eq!(
            *seen.borrow(),
            vec![Route::Privacy, Route::ChildSafety, Route::Home]
        );
        assert_eq!(site.route(), Route::Home);
    }

    #[test]
    fn dropping_the_site_stops_notifications() {
        let history = MemoryHistory::new();
        let calls = Rc::new(RefCell::new(0));
        {
            let calls = calls.clone();
            let _site = Site::mount(history.clone(), move |_| *calls.borrow_mut() += 1);
            history.push("/terms-of-service");
        }
        history.push("/cookie-policy");

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn subscription_is_released_on_drop() {
        let history = MemoryHistory::new();
        let calls = Rc::new(RefCell::new(0));
        let subscription = {
            let calls = calls.clone();
            history.subscribe(Box::new(move || *calls.borrow_mut() += 1))
        };

        history.navigate("/privacy-policy");
        drop(subscription);
        history.navigate("/");

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(history.current_path(), "/");
    }

    #[test]
    fn terms_page_then_home() {
        let history = MemoryHistory::new();
        history.push("/terms-of-service");
        let site = Site::mount(history.clone(), |_| {});

        assert_eq!(site.route(), Route::Terms);

        site.go_home();
        assert_eq!(history.location().path(), "/");
        assert_eq!(site.route(), Route::Home);
    }
}
