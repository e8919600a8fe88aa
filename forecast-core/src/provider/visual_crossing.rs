use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::error::{ForecastError, Result};
use crate::model::{DailyForecast, ForecastRequest};

use super::ForecastProvider;

const TIMELINE_BASE_URL: &str =
    "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline";

/// Client for the Visual Crossing Timeline API.
#[derive(Debug, Clone)]
pub struct VisualCrossingProvider {
    api_key: String,
    http: Client,
}

impl VisualCrossingProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    /// Timeline endpoint for one request: `{base}/{city},{nation}/{start}/{end}`.
    ///
    /// The location segment is percent-encoded so city names with spaces
    /// survive the path position.
    fn timeline_url(&self, request: &ForecastRequest) -> String {
        let location = request.location();
        format!(
            "{}/{}/{}/{}",
            TIMELINE_BASE_URL,
            urlencoding::encode(&location),
            request.interval.start(),
            request.interval.end(),
        )
    }

    async fn fetch_days(&self, request: &ForecastRequest) -> Result<Vec<DailyForecast>> {
        let res = self
            .http
            .get(self.timeline_url(request))
            .query(&[
                ("unitGroup", "metric"),
                ("key", self.api_key.as_str()),
                ("include", "days"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        parse_timeline_body(status, &body)
    }
}

/// Turn one HTTP exchange into forecast records.
///
/// Kept separate from the transport so decoding is testable with canned
/// bodies. A success response with no `days` array is valid and yields an
/// empty vector.
fn parse_timeline_body(status: StatusCode, body: &str) -> Result<Vec<DailyForecast>> {
    if !status.is_success() {
        return Err(ForecastError::Provider {
            status,
            body: truncate_body(body),
        });
    }

    let parsed: VcTimelineResponse = serde_json::from_str(body)?;

    Ok(parsed.days.into_iter().map(DailyForecast::from).collect())
}

#[derive(Debug, Deserialize)]
struct VcTimelineResponse {
    #[serde(default)]
    days: Vec<VcDay>,
}

#[derive(Debug, Deserialize)]
struct VcDay {
    datetime: NaiveDate,
    tempmax: Option<f64>,
    tempmin: Option<f64>,
    precipprob: Option<f64>,
    windspeed: Option<f64>,
    conditions: Option<String>,
}

impl From<VcDay> for DailyForecast {
    fn from(day: VcDay) -> Self {
        Self {
            date: day.datetime,
            max_temperature_c: day.tempmax,
            min_temperature_c: day.tempmin,
            precip_probability_pct: day.precipprob,
            wind_speed_kph: day.windspeed,
            condition: day.conditions.unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

#[async_trait]
impl ForecastProvider for VisualCrossingProvider {
    async fn daily_forecast(&self, request: &ForecastRequest) -> Result<Vec<DailyForecast>> {
        self.fetch_days(request).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let prefix: String = body.chars().take(MAX).collect();
        format!("{prefix}...")
    } else {
        body.to_string()
    }
}
