use crate::error::Result;
use crate::model::{DailyForecast, ForecastRequest};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod visual_crossing;

pub use visual_crossing::VisualCrossingProvider;

/// A remote service that answers day-granularity forecast lookups.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Fetch one record per calendar day in the requested interval.
    ///
    /// An empty vector is a valid "no data" outcome, distinct from an error.
    async fn daily_forecast(&self, request: &ForecastRequest) -> Result<Vec<DailyForecast>>;
}
