//! Plain-text rendering of the two summary tables, for terminals and logs.

use crate::chart::layout::{CAPTION, DAILY_CHART_TITLE, WEATHER_CHART_TITLE};
use crate::types::totals::Aggregates;

const NO_RIDES: &str = "  (no rides in range)\n";

/// Formats both tables and the caption as aligned text.
///
/// An interval without records prints a short notice in place of each table.
pub fn render_text(aggregates: &Aggregates) -> String {
    let mut out = format!(
        "Time Range: {}\nTotal rides: {}\n\n",
        aggregates.interval,
        aggregates.total_rides()
    );

    out.push_str(DAILY_CHART_TITLE);
    out.push('\n');
    if aggregates.daily.is_empty() {
        out.push_str(NO_RIDES);
    }
    for day in &aggregates.daily {
        out.push_str(&format!("  {}  {:>10}\n", day.date, day.total_rides));
    }
    out.push('\n');

    out.push_str(WEATHER_CHART_TITLE);
    out.push('\n');
    if aggregates.weather.is_empty() {
        out.push_str(NO_RIDES);
    }
    let width = aggregates
        .weather
        .iter()
        .map(|w| w.label.len())
        .max()
        .unwrap_or(0);
    for weather in &aggregates.weather {
        out.push_str(&format!(
            "  {:<width$}  {:>10}\n",
            weather.label,
            weather.total_rides,
            width = width
        ));
    }
    out.push('\n');

    out.push_str(CAPTION);
    out
}
