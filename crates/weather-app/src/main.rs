//! Weather App
//! A browser application built with Dioxus

use ui::App;

fn main() {
    dioxus::logger::initialize_default();

    // The web renderer installs browser history routing (clean URLs, no `#`)
    tracing::info!("launching weather app");

    dioxus::LaunchBuilder::web().launch(App);
}
