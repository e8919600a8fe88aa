use anyhow::Result;
use clap::Parser;

use forecast_core::{
    Config, ForecastProvider, ForecastRequest, VisualCrossingProvider, parse_date_range,
    render_forecast_table,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "forecast",
    version,
    about = "Display weather forecast for a given location and date interval"
)]
pub struct Cli {
    /// Nation or country code (e.g., US, UK)
    #[arg(short, long)]
    pub nation: String,

    /// City name
    #[arg(short, long)]
    pub city: String,

    /// Date or date range. For a single day use YYYY-MM-DD, or for a range use
    /// YYYY-MM-DD:YYYY-MM-DD
    #[arg(short, long)]
    pub date: String,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        // Dates are validated before anything touches the environment or the
        // network, so bad input fails fast.
        let interval = parse_date_range(&self.date)?;
        let config = Config::from_env()?;

        let provider = VisualCrossingProvider::new(config.api_key);
        let request = ForecastRequest {
            nation: self.nation.clone(),
            city: self.city.clone(),
            interval,
        };

        let days = provider.daily_forecast(&request).await?;

        println!();
        println!(
            "📍 {} ({}) — {} to {}",
            title_case(&self.city),
            self.nation.to_uppercase(),
            interval.start(),
            interval.end(),
        );
        println!();
        println!("{}", render_forecast_table(&days));

        Ok(())
    }
}

/// Capitalize each whitespace-separated word, lowercasing the rest.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
