/*!
 * Tests for the GUI dashboard logic.
 *
 * These verify the event-handling contract without requiring a display: the
 * same selection/zoom flow the GUI runs in `update`, driven directly.
 */

use chrono::{Duration, NaiveDate};
use weather_dash::models::{Distribution, Selection, WeatherRecord};
use weather_dash::{chart, dataset};

fn dataset_rows() -> Vec<WeatherRecord> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let mut rows = Vec::new();
    for country in ["Indonesia", "US"] {
        for i in 0..60 {
            rows.push(WeatherRecord {
                country: country.into(),
                date: start + Duration::days(i),
                temp: 70.0 + (i as f64 * 0.2).cos() * 10.0,
                min: 62.0,
                max: 78.0,
            });
        }
    }
    rows
}

/// Country change: reselect series, retitle, zoom state untouched.
#[test]
fn country_change_replaces_series_but_keeps_zoom() {
    let rows = dataset_rows();
    let mut selection = Selection {
        country: "Indonesia".into(),
        distribution: Distribution::Discrete,
    };
    let series = dataset::select_series_lenient(&rows, &selection.country, selection.distribution);
    let mut zoom = chart::initial_zoom(&series);

    // Slider events arrive before the country switch.
    zoom.on_slider_change(1.0);
    zoom.on_slider_change(3.0);
    let ranges_before = (zoom.x_start, zoom.x_end, zoom.y_start, zoom.y_end);

    selection.country = "US".into();
    let series = dataset::select_series_lenient(&rows, &selection.country, selection.distribution);

    assert_eq!(series.len(), 60);
    let ranges_after = (zoom.x_start, zoom.x_end, zoom.y_start, zoom.y_end);
    assert_eq!(ranges_before, ranges_after);
}

/// Distribution change on a series longer than the window smooths in place;
/// shorter than the window falls back without panicking.
#[test]
fn distribution_change_is_safe_for_any_series_length() {
    let rows = dataset_rows();
    let smoothed = dataset::select_series_lenient(&rows, "Indonesia", Distribution::Smoothed);
    assert_eq!(smoothed.len(), 60);

    let short: Vec<WeatherRecord> = rows.into_iter().take(10).collect();
    let fallback = dataset::select_series_lenient(&short, "Indonesia", Distribution::Smoothed);
    assert_eq!(fallback.len(), 10);
}

/// The slider flow the GUI runs: baseline on the first event, adjustment on
/// the following ones, bounds handed to the plot each frame.
#[test]
fn slider_flow_adjusts_plot_bounds() {
    let rows = dataset_rows();
    let series = dataset::select_series_lenient(&rows, "Indonesia", Distribution::Discrete);
    let mut zoom = chart::initial_zoom(&series);
    let spec = chart::chart_spec(&series, "Weather data for Indonesia", Some(&zoom));
    let full_span = spec.x_range;

    zoom.on_slider_change(2.0);
    let spec = chart::chart_spec(&series, "Weather data for Indonesia", Some(&zoom));
    assert_eq!(spec.x_range, full_span, "first event is a no-op on ranges");

    zoom.on_slider_change(4.0);
    let spec = chart::chart_spec(&series, "Weather data for Indonesia", Some(&zoom));
    assert_eq!(spec.x_range.0, full_span.0 + 4.0);
    assert_eq!(spec.x_range.1, full_span.1 - 4.0);
    assert_eq!(spec.y_range, (4.0, 96.0));
}
