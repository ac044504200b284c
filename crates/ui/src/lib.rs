//! UI library for the Weather App
//! Contains the route table and Dioxus components with custom CSS (offline)

mod components;
mod error;
mod routes;
mod styles;

pub use components::{App, Layout, ReportsView, WeatherSearch};
pub use error::RouteError;
pub use routes::{resolve, Route, RouteEntry, ROUTE_TABLE};
pub use styles::CUSTOM_STYLES;
