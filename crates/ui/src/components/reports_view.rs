//! Reports page

use dioxus::prelude::*;

#[component]
pub fn ReportsView() -> Element {
    rsx! {
        div { class: "page",
            h2 { class: "page-title", "Reports" }
        }
    }
}
