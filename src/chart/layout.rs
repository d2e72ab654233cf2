//! Axis and label settings for the two dashboard charts, computed from the
//! summary tables so that a renderer only has to apply them.

use crate::chart::frames::days_since_epoch;
use crate::types::totals::{DailyTotal, WeatherTotal};
use chrono::NaiveDate;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

pub const DAILY_CHART_TITLE: &str = "Daily Rides";
pub const WEATHER_CHART_TITLE: &str = "Rides by Weather Condition";
/// Attribution line shown under both charts.
pub const CAPTION: &str = "By Anas Banta Seutia - for Bangkit :)";

/// Spacing of the fixed y-axis ticks on the daily chart.
pub const DAILY_Y_TICK_STEP: u64 = 500;
/// Ticks are placed on `0..DAILY_Y_TICK_LIMIT` (exclusive).
pub const DAILY_Y_TICK_LIMIT: u64 = 10_000;
/// Space left above the tallest weather bar.
pub const WEATHER_Y_HEADROOM: u64 = 500_000;

/// Layout of the line/marker chart of daily totals.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyChartLayout {
    pub title: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    /// First and last plotted day; `None` when there is nothing to plot.
    pub x_range: Option<(NaiveDate, NaiveDate)>,
    pub y_ticks: Vec<u64>,
    /// `(0, top)`: floored at zero, tall enough for every tick and every point.
    pub y_range: (u64, u64),
}

impl DailyChartLayout {
    pub fn from_totals(totals: &[DailyTotal]) -> Self {
        // Totals are sorted by date, so the span is first..last.
        let x_range = totals
            .first()
            .zip(totals.last())
            .map(|(first, last)| (first.date, last.date));

        let y_ticks: Vec<u64> = (0..DAILY_Y_TICK_LIMIT)
            .step_by(DAILY_Y_TICK_STEP as usize)
            .collect();
        let tallest = totals.iter().map(|t| t.total_rides).max().unwrap_or(0);
        let top = tallest.max(y_ticks.last().copied().unwrap_or(0));

        Self {
            title: DAILY_CHART_TITLE,
            x_title: "Date",
            y_title: "Total Rides",
            x_range,
            y_ticks,
            y_range: (0, top),
        }
    }

    /// The x span as epoch milliseconds, the unit plotly uses for date axes.
    pub fn x_axis_range(&self) -> Option<Vec<f64>> {
        self.x_range.map(|(first, last)| {
            vec![
                days_since_epoch(first) as f64 * MILLIS_PER_DAY,
                days_since_epoch(last) as f64 * MILLIS_PER_DAY,
            ]
        })
    }

    pub fn y_axis_range(&self) -> Vec<f64> {
        vec![self.y_range.0 as f64, self.y_range.1 as f64]
    }

    pub fn y_axis_ticks(&self) -> Vec<f64> {
        self.y_ticks.iter().map(|&tick| tick as f64).collect()
    }
}

/// Layout of the bar chart of per-weather totals.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherChartLayout {
    pub title: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    /// `(0, tallest bar + headroom)`.
    pub y_range: (u64, u64),
}

impl WeatherChartLayout {
    pub fn from_totals(totals: &[WeatherTotal]) -> Self {
        let tallest = totals.iter().map(|t| t.total_rides).max().unwrap_or(0);
        Self {
            title: WEATHER_CHART_TITLE,
            x_title: "Weather Condition",
            y_title: "Total Rides",
            y_range: (0, tallest.saturating_add(WEATHER_Y_HEADROOM)),
        }
    }

    pub fn y_axis_range(&self) -> Vec<f64> {
        vec![self.y_range.0 as f64, self.y_range.1 as f64]
    }
}
