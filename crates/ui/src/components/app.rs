//! Main application component with routing

use dioxus::prelude::*;

use crate::routes::{resolve, Route, ROUTE_TABLE};
use crate::styles::CUSTOM_STYLES;

/// Main application component
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Layout component wrapping all routes
#[component]
pub fn Layout() -> Element {
    let route: Route = use_route();
    let tabs: Vec<Route> = ROUTE_TABLE
        .iter()
        .filter_map(|entry| resolve(entry.path).ok())
        .collect();

    tracing::debug!(path = %route, name = route.name(), "rendering route");

    rsx! {
        style { {CUSTOM_STYLES} }

        div {
            class: "main-container",

            div { class: "title-bar",
                span { class: "title-text", "⛅ Weather App" }
            }

            // Tab Navigation
            div { class: "tab-bar",
                for tab in tabs {
                    Link {
                        key: "{tab.name()}",
                        class: if tab == route { "tab-item tab-active" } else { "tab-item" },
                        to: tab.clone(),
                        "{tab.name()}"
                    }
                }
            }

            // Content Area with Router Outlet
            div { class: "content-area",
                Outlet::<Route> {}
            }
        }
    }
}
