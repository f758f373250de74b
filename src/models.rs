use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One row of the input CSV (one country, one day). Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherRecord {
    pub country: String,
    pub date: NaiveDate,
    /// Daily average temperature (F).
    pub temp: f64,
    /// Daily minimum temperature (F).
    pub min: f64,
    /// Daily maximum temperature (F).
    pub max: f64,
}

/// One bar of the filtered per-country view.
///
/// `left` and `right` pad the date by half a day in each direction, so every
/// day renders as a one-day-wide quad centered on its midnight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesBin {
    pub date: NaiveDate,
    pub left: NaiveDateTime,
    pub right: NaiveDateTime,
    pub temp: f64,
    pub min: f64,
    pub max: f64,
}

impl SeriesBin {
    pub fn from_record(r: &WeatherRecord) -> Self {
        let midnight = r.date.and_time(NaiveTime::MIN);
        Self {
            date: r.date,
            left: midnight - Duration::hours(12),
            right: midnight + Duration::hours(12),
            temp: r.temp,
            min: r.min,
            max: r.max,
        }
    }
}

/// Whether the displayed series is raw ("Discrete") or Savitzky-Golay
/// smoothed ("Smoothed").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Distribution {
    #[default]
    Discrete,
    Smoothed,
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distribution::Discrete => write!(f, "Discrete"),
            Distribution::Smoothed => write!(f, "Smoothed"),
        }
    }
}

/// The active dashboard selection. Replaces the module-level globals of the
/// original dashboard: the event-handling layer owns one of these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Selection {
    pub country: String,
    pub distribution: Distribution,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bin_pads_half_day_each_side() {
        let rec = WeatherRecord {
            country: "Indonesia".into(),
            date: NaiveDate::from_ymd_opt(2020, 3, 15).unwrap(),
            temp: 80.0,
            min: 75.0,
            max: 86.0,
        };
        let bin = SeriesBin::from_record(&rec);
        assert_eq!(bin.right - bin.left, Duration::days(1));
        assert_eq!(bin.left + Duration::hours(12), bin.date.and_time(NaiveTime::MIN));
        assert_eq!(bin.right - Duration::hours(12), bin.date.and_time(NaiveTime::MIN));
    }
}
