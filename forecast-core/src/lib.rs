//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Date range parsing and validation
//! - The forecast provider abstraction and its Visual Crossing implementation
//! - Table rendering of daily forecasts
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod date;
pub mod error;
pub mod model;
pub mod provider;
pub mod symbol;
pub mod table;
pub mod width;

pub use config::Config;
pub use date::{DateInterval, parse_date_range};
pub use error::{ForecastError, Result};
pub use model::{DailyForecast, ForecastRequest};
pub use provider::{ForecastProvider, VisualCrossingProvider};
pub use table::render_forecast_table;
