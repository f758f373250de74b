//! Dataset loading and the Dataset Selector.

use crate::error::WeatherError;
use crate::models::{Distribution, SeriesBin, WeatherRecord};
use crate::smooth::{SAVGOL_ORDER, SAVGOL_WINDOW, savgol_filter};
use std::collections::BTreeSet;
use std::path::Path;

/// Load the weather CSV. One-time synchronous load at startup; a missing or
/// malformed file is fatal for the callers.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<WeatherRecord>, WeatherError> {
    let path = path.as_ref();
    let wrap = |source: csv::Error| WeatherError::DatasetLoad {
        path: path.to_path_buf(),
        source,
    };
    let mut rdr = csv::Reader::from_path(path).map_err(wrap)?;
    let mut out = Vec::new();
    for row in rdr.deserialize() {
        let rec: WeatherRecord = row.map_err(wrap)?;
        out.push(rec);
    }
    Ok(out)
}

/// Sorted, deduplicated list of countries present in the dataset.
/// Drives the dropdown options.
pub fn countries(records: &[WeatherRecord]) -> Vec<String> {
    let set: BTreeSet<&str> = records.iter().map(|r| r.country.as_str()).collect();
    set.into_iter().map(str::to_string).collect()
}

/// Filter `records` to `country`, compute half-day bin boundaries, sort by
/// date ascending, and optionally smooth the three numeric series.
///
/// Pure function of its inputs: `records` is never mutated and re-selecting
/// the same country and mode yields a structurally identical result. An
/// unknown country returns an empty series, never an error. Requesting
/// [`Distribution::Smoothed`] on fewer rows than the smoothing window fails
/// with [`WeatherError::InsufficientData`].
pub fn select_series(
    records: &[WeatherRecord],
    country: &str,
    distribution: Distribution,
) -> Result<Vec<SeriesBin>, WeatherError> {
    let mut bins: Vec<SeriesBin> = records
        .iter()
        .filter(|r| r.country == country)
        .map(SeriesBin::from_record)
        .collect();
    // Stable sort: ties keep their original order.
    bins.sort_by_key(|b| b.date);

    if distribution == Distribution::Smoothed && !bins.is_empty() {
        let smoothed_col = |col: fn(&SeriesBin) -> f64| {
            let values: Vec<f64> = bins.iter().map(col).collect();
            savgol_filter(&values, SAVGOL_WINDOW, SAVGOL_ORDER)
        };
        // Column order matters only for reproducibility: temp, min, max.
        let temp = smoothed_col(|b| b.temp)?;
        let min = smoothed_col(|b| b.min)?;
        let max = smoothed_col(|b| b.max)?;
        for (i, bin) in bins.iter_mut().enumerate() {
            bin.temp = temp[i];
            bin.min = min[i];
            bin.max = max[i];
        }
    }

    Ok(bins)
}

/// Dashboard-facing wrapper: on a too-short series, fall back to the raw
/// distribution and log a warning instead of taking the whole UI down.
pub fn select_series_lenient(
    records: &[WeatherRecord],
    country: &str,
    distribution: Distribution,
) -> Vec<SeriesBin> {
    match select_series(records, country, distribution) {
        Ok(bins) => bins,
        Err(err) => {
            log::warn!("falling back to discrete series for {country}: {err}");
            select_series(records, country, Distribution::Discrete).unwrap_or_default()
        }
    }
}
