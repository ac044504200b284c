//! UI Components

mod app;
mod reports_view;
mod weather_search;

pub use app::{App, Layout};
pub use reports_view::ReportsView;
pub use weather_search::WeatherSearch;
