//! Render a [`ChartSpec`](crate::chart::ChartSpec) to **SVG** or **PNG**.
//!
//! - Three overlapping quad series (max, average, min) on a datetime X axis
//! - Grid lines at 50% alpha, legend panel with color swatches
//! - Output backend chosen by file extension

use crate::chart::ChartSpec;
use anyhow::Result;
use chrono::DateTime;
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::Path;
use std::sync::Once;

/// One-time registration for a fallback "sans-serif" font when using the
/// `ab_glyph` text path. Required because `ab_glyph` doesn't discover OS
/// fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    // Safe to call many times; only runs once.
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../assets/DejaVuSans.ttf"),
        );
    });
}

/// Render `spec` to `out_path`. `.svg` uses the SVG backend, anything else
/// the bitmap backend.
pub fn render_chart<P: AsRef<Path>>(
    spec: &ChartSpec,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, spec)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, spec)?;
    }
    Ok(())
}

fn draw_chart<DB>(root: DrawingArea<DB, Shift>, spec: &ChartSpec) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Plotters panics on degenerate ranges; nudge them open instead.
    let open = |(start, end): (f64, f64)| {
        if end - start > f64::EPSILON {
            (start, end)
        } else {
            (start - 0.5, start + 0.5)
        }
    };
    let (x_min, x_max) = open(spec.x_range);
    let (y_min, y_max) = open(spec.y_range);

    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .caption(&spec.title, (FontFamily::SansSerif, 20))
        .x_label_area_size(40)
        .y_label_area_size(52)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    chart
        .configure_mesh()
        .x_desc(&spec.x_label)
        .y_desc(&spec.y_label)
        .axis_desc_style((FontFamily::SansSerif, 14))
        .label_style((FontFamily::SansSerif, 12))
        .x_label_formatter(&|d| format_day(*d))
        .light_line_style(BLACK.mix(0.1))
        .bold_line_style(BLACK.mix(0.5))
        .draw()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    for layer in &spec.layers {
        let color = RGBColor(layer.color.0, layer.color.1, layer.color.2);
        chart
            .draw_series(layer.quads.iter().map(|q| {
                Rectangle::new([(q.left, 0.0), (q.right, q.top)], color.filled())
            }))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .label(layer.label.clone())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .label_font((FontFamily::SansSerif, 12))
        .border_style(BLACK.mix(0.4))
        .background_style(WHITE.mix(0.9))
        .draw()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

/// Tick label for an X coordinate in days since the Unix epoch.
fn format_day(day: f64) -> String {
    match DateTime::from_timestamp((day * 86_400.0) as i64, 0) {
        Some(ts) => ts.format("%b %d").to_string(),
        None => format!("{day:.0}"),
    }
}
