//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::{Layout, ReportsView, WeatherSearch};
use crate::error::RouteError;

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Layout)]
    #[route("/", WeatherSearch)]
    Home {},
    #[route("/reports", ReportsView)]
    Reports {},
}

/// One row of the route table
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
}

/// Path and name of every route, matched top-down.
/// Components are bound to paths on the `Route` variants.
pub static ROUTE_TABLE: [RouteEntry; 2] = [
    RouteEntry {
        path: "/",
        name: "Home",
    },
    RouteEntry {
        path: "/reports",
        name: "Reports",
    },
];

impl Route {
    /// Table row describing this route
    pub fn entry(&self) -> &'static RouteEntry {
        match self {
            Route::Home {} => &ROUTE_TABLE[0],
            Route::Reports {} => &ROUTE_TABLE[1],
        }
    }

    pub fn name(&self) -> &'static str {
        self.entry().name
    }

    /// Look up a route by its symbolic name for programmatic navigation
    pub fn by_name(name: &str) -> Result<Route, RouteError> {
        let entry = ROUTE_TABLE
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| RouteError::UnknownName(name.to_string()))?;
        resolve(entry.path)
    }
}

/// Match a URL path against the route table
pub fn resolve(path: &str) -> Result<Route, RouteError> {
    path.parse::<Route>().map_err(|err| RouteError::Unmatched {
        path: path.to_string(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn root_resolves_to_home() {
        let route = resolve("/").unwrap();
        assert_eq!(route, Route::Home {});
        assert_eq!(route.name(), "Home");
    }

    #[test]
    fn reports_path_resolves_to_reports() {
        let route = resolve("/reports").unwrap();
        assert_eq!(route, Route::Reports {});
        assert_eq!(route.name(), "Reports");
    }

    #[test]
    fn table_has_two_unique_entries() {
        assert_eq!(ROUTE_TABLE.len(), 2);

        let paths: HashSet<_> = ROUTE_TABLE.iter().map(|e| e.path).collect();
        let names: HashSet<_> = ROUTE_TABLE.iter().map(|e| e.name).collect();
        assert_eq!(paths.len(), ROUTE_TABLE.len());
        assert_eq!(names.len(), ROUTE_TABLE.len());
    }

    #[test]
    fn table_agrees_with_router() {
        for entry in ROUTE_TABLE.iter() {
            let route = resolve(entry.path).unwrap();
            assert_eq!(route.entry(), entry);
            assert_eq!(route.to_string(), entry.path);
        }
    }

    #[test]
    fn navigate_by_name() {
        assert_eq!(Route::by_name("Home").unwrap(), Route::Home {});
        assert_eq!(Route::by_name("Reports").unwrap(), Route::Reports {});
        assert_eq!(
            Route::by_name("Settings"),
            Err(RouteError::UnknownName("Settings".to_string()))
        );
    }

    #[test]
    fn unknown_path_is_unmatched() {
        let err = resolve("/forecast").unwrap_err();
        assert!(matches!(err, RouteError::Unmatched { ref path, .. } if path == "/forecast"));
    }
}
