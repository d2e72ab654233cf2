//! Draws the two dashboard charts with `plotlars`.
//!
//! Only compiled with the `plotting` feature:
//! `cargo run --features plotting -- --output-dir charts`

use crate::chart::frames::{
    daily_frame, weather_frame, COL_DATE, COL_TOTAL_RIDES, COL_WEATHER_CONDITION,
};
use crate::chart::layout::{DailyChartLayout, WeatherChartLayout};
use crate::error::DashboardError;
use crate::types::totals::{Aggregates, DailyTotal, WeatherTotal};
use log::info;
use plotlars::{Axis, BarPlot, Plot, Rgb, Shape, Text, TimeSeriesPlot};
use std::path::{Path, PathBuf};

const LINE_COLOR: Rgb = Rgb(144, 202, 249);
const BAR_COLORS: [Rgb; 5] = [
    Rgb(72, 120, 208),
    Rgb(238, 133, 74),
    Rgb(106, 204, 100),
    Rgb(214, 95, 95),
    Rgb(149, 108, 180),
];

/// Line/marker chart of rides per day.
pub fn daily_rides_plot(totals: &[DailyTotal]) -> Result<TimeSeriesPlot, DashboardError> {
    let layout = DailyChartLayout::from_totals(totals);
    let data = daily_frame(totals)?;

    let mut x_axis = Axis::new().show_grid(true);
    if let Some(range) = layout.x_axis_range() {
        x_axis = x_axis.value_range(range);
    }
    let y_axis = Axis::new()
        .value_range(layout.y_axis_range())
        .tick_values(layout.y_axis_ticks())
        .show_grid(true);

    Ok(TimeSeriesPlot::builder()
        .data(&data)
        .x(COL_DATE)
        .y(COL_TOTAL_RIDES)
        .colors(vec![LINE_COLOR])
        .with_shape(true)
        .shapes(vec![Shape::Circle])
        .plot_title(Text::from(layout.title).size(20))
        .x_title(Text::from(layout.x_title).size(16))
        .y_title(Text::from(layout.y_title).size(16))
        .x_axis(&x_axis)
        .y_axis(&y_axis)
        .build())
}

/// Bar chart of rides per weather condition.
pub fn weather_rides_plot(totals: &[WeatherTotal]) -> Result<BarPlot, DashboardError> {
    let layout = WeatherChartLayout::from_totals(totals);
    let data = weather_frame(totals)?;

    Ok(BarPlot::builder()
        .data(&data)
        .labels(COL_WEATHER_CONDITION)
        .values(COL_TOTAL_RIDES)
        .colors(BAR_COLORS.iter().take(totals.len().max(1)).cloned().collect())
        .plot_title(Text::from(layout.title).size(18))
        .x_title(Text::from(layout.x_title).size(15))
        .y_title(Text::from(layout.y_title).size(15))
        .y_axis(
            &Axis::new()
                .value_range(layout.y_axis_range())
                .show_grid(true),
        )
        .build())
}

/// Writes both charts as standalone HTML pages into `dir` and returns their paths.
pub fn write_charts(aggregates: &Aggregates, dir: &Path) -> Result<[PathBuf; 2], DashboardError> {
    let daily_path = dir.join("daily_rides.html");
    let weather_path = dir.join("weather_rides.html");

    daily_rides_plot(&aggregates.daily)?.write_html(daily_path.to_string_lossy().to_string());
    weather_rides_plot(&aggregates.weather)?.write_html(weather_path.to_string_lossy().to_string());

    info!(
        "Wrote charts for {} to {:?} and {:?}",
        aggregates.interval, daily_path, weather_path
    );
    Ok([daily_path, weather_path])
}

/// Opens both charts in the browser.
pub fn show_charts(aggregates: &Aggregates) -> Result<(), DashboardError> {
    daily_rides_plot(&aggregates.daily)?.plot();
    weather_rides_plot(&aggregates.weather)?.plot();
    Ok(())
}
