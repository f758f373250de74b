//! weather-dash
//!
//! A lightweight Rust library for loading, filtering, smoothing, and
//! visualizing a small daily weather dataset. Pairs with the `weather-dash`
//! CLI and the `weather-dash-gui` dashboard.
//!
//! ### Features
//! - Load a weather CSV (`country,date,temp,min,max`)
//! - Per-country series selection with half-day bin boundaries
//! - Savitzky-Golay smoothing (window 51, order 3) for the "Smoothed" mode
//! - Incremental zoom-range state machine driven by a slider
//! - SVG/PNG quad charts and per-country summary statistics
//!
//! ### Example
//! ```no_run
//! use weather_dash::models::Distribution;
//! use weather_dash::{chart, dataset, viz};
//!
//! let records = dataset::load_csv("data/weather.csv")?;
//! let series = dataset::select_series(&records, "Indonesia", Distribution::Smoothed)?;
//! let spec = chart::chart_spec(&series, "Weather data for Indonesia", None);
//! viz::render_chart(&spec, "indonesia.svg", 1000, 600)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod chart;
pub mod dataset;
pub mod error;
pub mod models;
pub mod smooth;
pub mod stats;
pub mod storage;
pub mod viz;
pub mod zoom;

pub use error::WeatherError;
pub use models::{Distribution, Selection, SeriesBin, WeatherRecord};
pub use zoom::ZoomState;
