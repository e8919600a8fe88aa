//! Fancy-grid rendering of daily forecasts.
//!
//! Cells are first padded to per-column target widths, then the grid is
//! framed around whatever width each column actually ended up with. Oversized
//! cells are never truncated; their column widens instead.

use crate::model::DailyForecast;
use crate::symbol::condition_symbol;
use crate::width::{display_width, pad_to_width};

const COLUMN_COUNT: usize = 5;

const COLUMN_HEADERS: [&str; COLUMN_COUNT] =
    ["Date", "Weather", "🌡️ Max/Min (°C)", "💧 Rain %", "💨 Wind (km/h)"];

/// Minimum display width each body cell is padded to.
const COLUMN_TARGET_WIDTHS: [usize; COLUMN_COUNT] = [10, 20, 15, 8, 12];

const NO_DATA_NOTICE: &str = "No weather data available for the specified period.";

/// Placeholder for numeric readings the provider did not report.
const UNAVAILABLE: &str = "N/A";

/// One forecast day formatted into its five padded cells.
#[derive(Debug)]
struct RenderedRow {
    cells: [String; COLUMN_COUNT],
}

impl RenderedRow {
    fn from_forecast(day: &DailyForecast) -> Self {
        let weather = format!("{} {}", condition_symbol(&day.condition), day.condition);
        let temperature = format!(
            "{}° / {}°",
            number_or_unavailable(day.max_temperature_c),
            number_or_unavailable(day.min_temperature_c),
        );
        let rain = format!("{}%", number_or_unavailable(day.precip_probability_pct));
        let wind = format!("{} km/h", number_or_unavailable(day.wind_speed_kph));

        let raw = [day.date.to_string(), weather, temperature, rain, wind];
        let cells =
            std::array::from_fn(|column| pad_to_width(&raw[column], COLUMN_TARGET_WIDTHS[column]));

        Self { cells }
    }

    fn cells(&self) -> &[String; COLUMN_COUNT] {
        &self.cells
    }
}

fn number_or_unavailable(value: Option<f64>) -> String {
    match value {
        Some(number) => number.to_string(),
        None => UNAVAILABLE.to_string(),
    }
}

/// Render forecasts as a box-drawn table, one row per day, in input order.
///
/// An empty slice renders as a plain notice instead of an empty grid.
/// The returned string carries no trailing newline.
pub fn render_forecast_table(days: &[DailyForecast]) -> String {
    if days.is_empty() {
        return NO_DATA_NOTICE.to_string();
    }

    let rows: Vec<RenderedRow> = days.iter().map(RenderedRow::from_forecast).collect();
    let widths = column_widths(&rows);

    let mut lines = Vec::new();
    lines.push(horizontal_rule(&widths, '╒', '═', '╤', '╕'));
    lines.push(grid_line(&COLUMN_HEADERS, &widths));
    lines.push(horizontal_rule(&widths, '╞', '═', '╪', '╡'));
    for (index, row) in rows.iter().enumerate() {
        if index > 0 {
            lines.push(horizontal_rule(&widths, '├', '─', '┼', '┤'));
        }
        lines.push(grid_line(row.cells(), &widths));
    }
    lines.push(horizontal_rule(&widths, '╘', '═', '╧', '╛'));

    lines.join("\n")
}

/// Final width of each column: the widest of its header and its padded cells.
fn column_widths(rows: &[RenderedRow]) -> [usize; COLUMN_COUNT] {
    let mut widths = std::array::from_fn(|column| display_width(COLUMN_HEADERS[column]));
    for row in rows {
        for (column, cell) in row.cells().iter().enumerate() {
            widths[column] = widths[column].max(display_width(cell));
        }
    }
    widths
}

/// A border line such as `╒════╤════╕`, with each segment two wider than its
/// column to cover the cell margins.
fn horizontal_rule(
    widths: &[usize; COLUMN_COUNT],
    left: char,
    fill: char,
    junction: char,
    right: char,
) -> String {
    let mut line = String::new();
    line.push(left);
    for (column, width) in widths.iter().enumerate() {
        if column > 0 {
            line.push(junction);
        }
        for _ in 0..width + 2 {
            line.push(fill);
        }
    }
    line.push(right);
    line
}

/// A content line such as `│ Date │ Weather │`, one space of margin per side.
fn grid_line<S: AsRef<str>>(cells: &[S; COLUMN_COUNT], widths: &[usize; COLUMN_COUNT]) -> String {
    let mut line = String::from("│");
    for (cell, width) in cells.iter().zip(widths) {
        line.push(' ');
        line.push_str(&pad_to_width(cell.as_ref(), *width));
        line.push_str(" │");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn sample_day() -> DailyForecast {
        DailyForecast {
            date: date(2024, 6, 1),
            max_temperature_c: Some(24.3),
            min_temperature_c: Some(15.1),
            precip_probability_pct: Some(35.2),
            wind_speed_kph: Some(19.6),
            condition: "Partly cloudy".to_string(),
        }
    }

    fn blank_day() -> DailyForecast {
        DailyForecast {
            date: date(2024, 6, 2),
            max_temperature_c: None,
            min_temperature_c: None,
            precip_probability_pct: None,
            wind_speed_kph: None,
            condition: "Unknown".to_string(),
        }
    }

    #[test]
    fn empty_input_renders_the_notice_instead_of_a_grid() {
        let output = render_forecast_table(&[]);
        assert_eq!(output, NO_DATA_NOTICE);
        assert!(!output.contains('╒'));
    }

    #[test]
    fn cells_are_padded_to_their_column_targets() {
        let row = RenderedRow::from_forecast(&sample_day());
        let cells = row.cells();

        // "2024-06-01" already fills its 10-column target exactly.
        assert_eq!(cells[0], "2024-06-01");
        // "⛅ Partly cloudy" measures 16 columns, padded out to 20.
        assert_eq!(cells[1], "⛅ Partly cloudy    ");
        assert_eq!(display_width(&cells[1]), 20);
        assert_eq!(cells[2], "24.3° / 15.1°  ");
        assert_eq!(cells[3], "35.2%   ");
        assert_eq!(cells[4], "19.6 km/h   ");
    }

    #[test]
    fn missing_readings_render_as_unavailable_markers() {
        let row = RenderedRow::from_forecast(&blank_day());
        let cells = row.cells();

        assert!(cells[2].starts_with("N/A° / N/A°"));
        assert!(cells[3].starts_with("N/A%"));
        assert!(cells[4].starts_with("N/A km/h"));
    }

    #[test]
    fn integral_readings_drop_the_decimal_point() {
        let mut day = sample_day();
        day.max_temperature_c = Some(24.0);
        day.precip_probability_pct = Some(35.0);

        let row = RenderedRow::from_forecast(&day);
        assert!(row.cells()[2].starts_with("24° / 15.1°"));
        assert!(row.cells()[3].starts_with("35%"));
    }

    #[test]
    fn grid_uses_fancy_borders_and_separates_rows() {
        let output = render_forecast_table(&[sample_day(), blank_day()]);
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines.first().expect("grid has lines").starts_with('╒'));
        assert!(lines.last().expect("grid has lines").starts_with('╘'));
        // Header separator is double-ruled, the row separator single-ruled.
        assert!(output.contains('╞'));
        assert!(output.contains('╪'));
        assert_eq!(output.matches('├').count(), 1);

        // chrome(3) + header + separator + two rows
        assert_eq!(lines.len(), 7);
        assert!(!output.ends_with('\n'));
    }

    #[test]
    fn single_row_grid_has_no_row_separator() {
        let output = render_forecast_table(&[sample_day()]);
        assert!(!output.contains('├'));
    }

    #[test]
    fn rows_keep_input_order() {
        let output = render_forecast_table(&[sample_day(), blank_day()]);
        let first = output.find("2024-06-01").expect("first date present");
        let second = output.find("2024-06-02").expect("second date present");
        assert!(first < second);
    }

    #[test]
    fn every_grid_line_has_the_same_display_width() {
        let output = render_forecast_table(&[sample_day(), blank_day()]);
        let mut line_widths = output.lines().map(display_width);
        let first = line_widths.next().expect("grid has lines");
        assert!(line_widths.all(|width| width == first));
    }

    #[test]
    fn oversized_cells_widen_their_column_without_truncation() {
        let mut day = sample_day();
        day.condition = "Rain with scattered thunderstorms late".to_string();

        let output = render_forecast_table(&[day, blank_day()]);

        assert!(output.contains("Rain with scattered thunderstorms late"));
        let mut line_widths = output.lines().map(display_width);
        let first = line_widths.next().expect("grid has lines");
        assert!(line_widths.all(|width| width == first));
    }
}
