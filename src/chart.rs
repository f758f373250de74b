//! Chart render description.
//!
//! The renderers (plotters backend, GUI plot) consume a [`ChartSpec`] built
//! here; authoritative range state lives in [`ZoomState`], never in a
//! rendering handle.

use crate::models::SeriesBin;
use crate::zoom::ZoomState;
use chrono::NaiveDateTime;

/// Fill colors for the three temperature layers, in draw order
/// (max behind, then average, then min on top).
pub const LAYER_COLORS: [(u8, u8, u8); 3] = [
    (0xFF, 0xB0, 0x61), // max
    (0xFD, 0xE5, 0xA9), // average
    (0xC6, 0x94, 0x6F), // min
];

/// Initial Y range of the chart (degrees F).
pub const Y_RANGE_DEFAULT: (f64, f64) = (0.0, 100.0);

/// One bar: `left..right` on the X axis, `0..top` on the Y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub left: f64,
    pub right: f64,
    pub top: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuadLayer {
    pub label: String,
    pub color: (u8, u8, u8),
    pub quads: Vec<Quad>,
}

/// Everything a renderer needs to paint the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub layers: Vec<QuadLayer>,
}

/// X coordinate in fractional days since the Unix epoch. Half-day bin edges
/// land on `.5` values.
pub fn day_coord(dt: NaiveDateTime) -> f64 {
    dt.and_utc().timestamp() as f64 / 86_400.0
}

/// Full X span of a series with zero padding, or a one-day placeholder for
/// an empty series so a blank chart still renders.
pub fn x_span(series: &[SeriesBin]) -> (f64, f64) {
    match (series.first(), series.last()) {
        (Some(first), Some(last)) => (day_coord(first.left), day_coord(last.right)),
        _ => (0.0, 1.0),
    }
}

/// Zoom state at chart creation: X covers the full date range, Y is [0, 100].
pub fn initial_zoom(series: &[SeriesBin]) -> ZoomState {
    let (x_start, x_end) = x_span(series);
    ZoomState::new(x_start, x_end, Y_RANGE_DEFAULT.0, Y_RANGE_DEFAULT.1)
}

/// Build the render description for a filtered series.
///
/// When `zoom` is supplied its ranges are used verbatim; otherwise the spec
/// covers the full date range with the default Y range.
pub fn chart_spec(series: &[SeriesBin], title: &str, zoom: Option<&ZoomState>) -> ChartSpec {
    let (x_range, y_range) = match zoom {
        Some(z) => ((z.x_start, z.x_end), (z.y_start, z.y_end)),
        None => (x_span(series), Y_RANGE_DEFAULT),
    };

    let layer = |label: &str, color: (u8, u8, u8), top: fn(&SeriesBin) -> f64| QuadLayer {
        label: label.to_string(),
        color,
        quads: series
            .iter()
            .map(|b| Quad {
                left: day_coord(b.left),
                right: day_coord(b.right),
                top: top(b),
            })
            .collect(),
    };

    ChartSpec {
        title: title.to_string(),
        x_label: "Date".to_string(),
        y_label: "Temperature (F)".to_string(),
        x_range,
        y_range,
        layers: vec![
            layer("Maximum", LAYER_COLORS[0], |b| b.max),
            layer("Average", LAYER_COLORS[1], |b| b.temp),
            layer("Minimum", LAYER_COLORS[2], |b| b.min),
        ],
    }
}
