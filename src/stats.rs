use crate::models::WeatherRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary statistics for one country.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub country: String,
    pub count: usize,
    pub temp_mean: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    /// Lowest daily minimum.
    pub coldest: Option<f64>,
    /// Highest daily maximum.
    pub hottest: Option<f64>,
}

/// Compute per-country statistics, in country order.
pub fn country_summary(records: &[WeatherRecord]) -> Vec<Summary> {
    let mut groups: BTreeMap<&str, Vec<&WeatherRecord>> = BTreeMap::new();
    for r in records {
        groups.entry(r.country.as_str()).or_default().push(r);
    }

    let mut out = Vec::new();
    for (country, rows) in groups {
        let count = rows.len();
        let mut temps: Vec<f64> = rows.iter().map(|r| r.temp).collect();
        temps.sort_by(|a, b| a.total_cmp(b));
        let temp_min = temps.first().cloned();
        let temp_max = temps.last().cloned();
        let temp_mean = if count > 0 {
            Some(temps.iter().sum::<f64>() / count as f64)
        } else {
            None
        };
        let coldest = rows.iter().map(|r| r.min).min_by(|a, b| a.total_cmp(b));
        let hottest = rows.iter().map(|r| r.max).max_by(|a, b| a.total_cmp(b));
        out.push(Summary {
            country: country.to_string(),
            count,
            temp_mean,
            temp_min,
            temp_max,
            coldest,
            hottest,
        });
    }
    out
}
