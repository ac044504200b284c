//! Weather search page

use dioxus::prelude::*;

/// Home page view
#[component]
pub fn WeatherSearch() -> Element {
    rsx! {
        div { class: "page",
            h2 { class: "page-title", "Weather Search" }
        }
    }
}
