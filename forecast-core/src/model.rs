use chrono::NaiveDate;

use crate::date::DateInterval;

/// Location and date range for one forecast lookup.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub nation: String,
    pub city: String,
    pub interval: DateInterval,
}

impl ForecastRequest {
    /// Location identifier in the provider's `{city},{nation}` form.
    pub fn location(&self) -> String {
        format!("{},{}", self.city, self.nation)
    }
}

/// One calendar day of forecast data as reported by the provider.
///
/// Numeric fields are `None` when the provider left them out; `condition`
/// defaults to "Unknown".
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub max_temperature_c: Option<f64>,
    pub min_temperature_c: Option<f64>,
    pub precip_probability_pct: Option<f64>,
    pub wind_speed_kph: Option<f64>,
    pub condition: String,
}
