//! Defines the `WeatherCondition` enum, mapping the dataset's numeric `weathersit` codes
//! to descriptive variants and chart labels.

use serde::Serialize;
use std::fmt;

/// Label used for codes outside the documented `1..=4` range.
pub const UNKNOWN_WEATHER_LABEL: &str = "Unknown";

/// Represents the weather situation recorded for a rental observation.
///
/// The bike-sharing dataset encodes the weather in the `weathersit` column as a
/// small integer. Only the four documented codes map to a variant; use
/// [`WeatherCondition::from_i64`] to convert a raw code and [`label_for_code`] when a
/// label is needed for any code, known or not.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize)]
pub enum WeatherCondition {
    /// Code 1: Clear, few clouds, partly cloudy.
    Clear = 1,
    /// Code 2: Mist combined with clouds.
    MistCloudy = 2,
    /// Code 3: Light snow, light rain, scattered clouds.
    LightSnowRain = 3,
    /// Code 4: Heavy rain, ice pellets, snow and fog.
    HeavyRainSnow = 4,
}

impl WeatherCondition {
    /// All known conditions in ascending code order.
    pub const ALL: [WeatherCondition; 4] = [
        WeatherCondition::Clear,
        WeatherCondition::MistCloudy,
        WeatherCondition::LightSnowRain,
        WeatherCondition::HeavyRainSnow,
    ];

    /// Attempts to convert a `weathersit` code into a `WeatherCondition` variant.
    ///
    /// # Returns
    ///
    /// * `Some(WeatherCondition)` for codes 1 through 4.
    /// * `None` for any other value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bikeshare_dashboard::WeatherCondition;
    ///
    /// assert_eq!(WeatherCondition::from_i64(2), Some(WeatherCondition::MistCloudy));
    /// assert_eq!(WeatherCondition::from_i64(0), None);
    /// ```
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            1 => Some(WeatherCondition::Clear),
            2 => Some(WeatherCondition::MistCloudy),
            3 => Some(WeatherCondition::LightSnowRain),
            4 => Some(WeatherCondition::HeavyRainSnow),
            _ => None,
        }
    }

    /// The numeric code as stored in the dataset.
    pub fn code(self) -> i64 {
        self as i64
    }

    /// The human-readable label shown on the weather chart.
    pub fn label(self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::MistCloudy => "Mist + Cloudy",
            WeatherCondition::LightSnowRain => "Light Snow/Rain",
            WeatherCondition::HeavyRainSnow => "Heavy Rain/Snow",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the chart label for any raw code, falling back to [`UNKNOWN_WEATHER_LABEL`].
pub fn label_for_code(code: i64) -> &'static str {
    WeatherCondition::from_i64(code)
        .map(WeatherCondition::label)
        .unwrap_or(UNKNOWN_WEATHER_LABEL)
}
