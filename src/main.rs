//! CLI front end of the bike-sharing dashboard.
//!
//! Loads the rental CSV once, applies the selected time range and prints the
//! daily and per-weather ride totals. With the `plotting` feature the two
//! charts are also written as HTML or opened in the browser.

use bikeshare_dashboard::{
    render_text, Dashboard, DateInterval, IntoDateInterval, DEFAULT_DATA_PATH,
};
use chrono::NaiveDate;
use clap::Parser;
use log::{info, warn};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bikeshare-dashboard")]
#[command(about = "Summarise bike-sharing rentals per day and per weather condition", long_about = None)]
struct Cli {
    /// CSV file with the rental data
    #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// First day of the time range (defaults to the earliest date in the data)
    #[arg(long, value_name = "YYYY-MM-DD")]
    start: Option<NaiveDate>,

    /// Last day of the time range (defaults to the latest date in the data)
    #[arg(long, value_name = "YYYY-MM-DD")]
    end: Option<NaiveDate>,

    /// Time range as a period: 2011, 2011-03, 2011-03-05 or 2011-03-01..2011-03-15
    #[arg(short, long, conflicts_with_all = ["start", "end"])]
    period: Option<String>,

    /// Print the aggregates as JSON instead of text tables
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Directory to write daily_rides.html and weather_rides.html into
    #[cfg(feature = "plotting")]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Open both charts in the browser
    #[cfg(feature = "plotting")]
    #[arg(long, default_value_t = false)]
    open: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Reads RUST_LOG
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let dashboard = Dashboard::open().data_path(cli.data.clone()).call()?;

    let requested = match &cli.period {
        Some(period) => period.as_str().into_date_interval()?,
        None => dashboard.select_interval(cli.start, cli.end)?,
    };
    let interval = restrict_to_data(requested, &dashboard);
    let aggregates = dashboard.compute_aggregates(&interval);
    info!(
        "Selected {}: {} days, {} rides",
        interval,
        aggregates.daily.len(),
        aggregates.total_rides()
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&aggregates)?);
    } else {
        println!("{}", render_text(&aggregates));
    }

    #[cfg(feature = "plotting")]
    {
        if let Some(dir) = &cli.output_dir {
            std::fs::create_dir_all(dir)?;
            bikeshare_dashboard::write_charts(&aggregates, dir)?;
        }
        if cli.open {
            bikeshare_dashboard::show_charts(&aggregates)?;
        }
    }

    Ok(())
}

/// Keeps the selection inside the data span, like a date picker bounded by min/max.
fn restrict_to_data(requested: DateInterval, dashboard: &Dashboard) -> DateInterval {
    match requested.clamp_to(&dashboard.bounds()) {
        Some(interval) => interval,
        None => {
            warn!(
                "Requested range {} lies outside the data ({}); no rides will be shown",
                requested,
                dashboard.bounds()
            );
            requested
        }
    }
}
