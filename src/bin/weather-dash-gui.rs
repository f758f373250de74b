/*!
 * GUI dashboard for weather-dash.
 *
 * A desktop dashboard showing daily min/avg/max temperature for a selected
 * country, with:
 * - a country dropdown,
 * - a distribution dropdown (Discrete / Smoothed),
 * - a zoom slider driving the incremental range-adjustment state machine.
 *
 * All event handling runs synchronously inside `update`; the app struct owns
 * the selection and zoom state (no module-level globals).
 */

use anyhow::Result;
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot, PlotBounds};
use std::path::PathBuf;
use weather_dash::models::{Distribution, Selection, SeriesBin};
use weather_dash::zoom::ZoomState;
use weather_dash::{chart, dataset};

const DEFAULT_DATA_PATH: &str = "data/weather.csv";
const DEFAULT_COUNTRY: &str = "Indonesia";

fn main() -> Result<()> {
    env_logger::init();

    // One-time synchronous dataset load. A missing or malformed file is a
    // fatal startup error: no partial UI.
    let data_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());
    let records = dataset::load_csv(&data_path)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 620.0])
            .with_min_inner_size([700.0, 420.0])
            .with_title("Weather Data 2020"),
        ..Default::default()
    };

    eframe::run_native(
        "Weather Data 2020",
        options,
        Box::new(move |_cc| Ok(Box::new(DashApp::new(data_path, records)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start GUI: {e}"))
}

/// Main application state.
struct DashApp {
    data_path: String,
    records: Vec<weather_dash::WeatherRecord>,
    countries: Vec<String>,

    selection: Selection,
    series: Vec<SeriesBin>,
    title: String,

    zoom: ZoomState,
    slider_value: f64,

    error_message: String,
}

impl DashApp {
    fn new(data_path: String, records: Vec<weather_dash::WeatherRecord>) -> Self {
        let countries = dataset::countries(&records);
        let country = if countries.iter().any(|c| c == DEFAULT_COUNTRY) {
            DEFAULT_COUNTRY.to_string()
        } else {
            countries.first().cloned().unwrap_or_default()
        };
        let selection = Selection {
            country,
            distribution: Distribution::Discrete,
        };
        let series = dataset::select_series_lenient(
            &records,
            &selection.country,
            selection.distribution,
        );
        let title = plot_title(&selection.country);
        let zoom = chart::initial_zoom(&series);

        Self {
            data_path,
            records,
            countries,
            selection,
            series,
            title,
            zoom,
            slider_value: 0.0,
            error_message: String::new(),
        }
    }

    /// Recompute the filtered series and title from the current selection.
    fn reselect(&mut self) {
        self.series = dataset::select_series_lenient(
            &self.records,
            &self.selection.country,
            self.selection.distribution,
        );
        self.title = plot_title(&self.selection.country);
    }

    /// Replace the dataset with the contents of `path`. Mid-session load
    /// failures are shown, not fatal.
    fn load_dataset(&mut self, path: PathBuf) {
        match dataset::load_csv(&path) {
            Ok(records) => {
                self.records = records;
                self.countries = dataset::countries(&self.records);
                if !self.countries.iter().any(|c| *c == self.selection.country) {
                    self.selection.country = self.countries.first().cloned().unwrap_or_default();
                }
                self.data_path = path.to_string_lossy().into_owned();
                self.error_message.clear();
                self.reselect();
                // New chart, new zoom baseline.
                self.zoom = chart::initial_zoom(&self.series);
                self.slider_value = 0.0;
            }
            Err(err) => {
                self.error_message = format!("Failed to load dataset: {err}");
            }
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.label("Controls");
        ui.add_space(5.0);

        let countries = self.countries.clone();
        let mut reselect = false;

        egui::ComboBox::from_label("Country")
            .selected_text(self.selection.country.clone())
            .show_ui(ui, |ui| {
                for c in &countries {
                    if ui
                        .selectable_value(&mut self.selection.country, c.clone(), c)
                        .changed()
                    {
                        reselect = true;
                    }
                }
            });

        egui::ComboBox::from_label("Distribution")
            .selected_text(self.selection.distribution.to_string())
            .show_ui(ui, |ui| {
                for mode in [Distribution::Discrete, Distribution::Smoothed] {
                    if ui
                        .selectable_value(
                            &mut self.selection.distribution,
                            mode,
                            mode.to_string(),
                        )
                        .changed()
                    {
                        reselect = true;
                    }
                }
            });

        if reselect {
            self.reselect();
        }

        ui.add_space(10.0);
        let response = ui.add(
            egui::Slider::new(&mut self.slider_value, -12.0..=8.0)
                .step_by(1.0)
                .text("Zoom"),
        );
        if response.changed() {
            self.zoom.on_slider_change(self.slider_value);
        }

        ui.add_space(15.0);
        ui.horizontal(|ui| {
            ui.label("Dataset:");
            ui.monospace(&self.data_path);
        });
        if ui.button("Browse").clicked()
            && let Some(path) = rfd::FileDialog::new()
                .add_filter("CSV", &["csv"])
                .set_directory(dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
                .pick_file()
        {
            self.load_dataset(path);
        }

        if !self.error_message.is_empty() {
            ui.add_space(10.0);
            ui.colored_label(egui::Color32::RED, &self.error_message);
        }
    }

    fn chart_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading(&self.title);

        let spec = chart::chart_spec(&self.series, &self.title, Some(&self.zoom));

        let charts: Vec<BarChart> = spec
            .layers
            .iter()
            .map(|layer| {
                let bars: Vec<Bar> = layer
                    .quads
                    .iter()
                    .map(|q| {
                        Bar::new((q.left + q.right) / 2.0, q.top).width(q.right - q.left)
                    })
                    .collect();
                BarChart::new(bars)
                    .name(layer.label.clone())
                    .color(egui::Color32::from_rgb(
                        layer.color.0,
                        layer.color.1,
                        layer.color.2,
                    ))
            })
            .collect();

        let (x_range, y_range) = (spec.x_range, spec.y_range);
        Plot::new("weather_chart")
            .legend(egui_plot::Legend::default())
            .x_axis_label(spec.x_label.clone())
            .y_axis_label(spec.y_label.clone())
            .x_axis_formatter(|mark, _range| format_day(mark.value))
            .show(ui, |plot_ui| {
                // The zoom state is authoritative; the plot only paints it.
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [x_range.0, y_range.0],
                    [x_range.1, y_range.1],
                ));
                for chart in charts {
                    plot_ui.bar_chart(chart);
                }
            });
    }
}

impl eframe::App for DashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("controls")
            .min_width(230.0)
            .show(ctx, |ui| self.controls(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.chart_panel(ui));
    }
}

/// Chart title for a country, with the continent where we know it.
fn plot_title(country: &str) -> String {
    let display = match country {
        "Central African Republic" => "Central African Republic, Africa",
        "US" => "United States, Americas",
        "China" => "China, Asia",
        "Indonesia" => "Indonesia, Asia",
        "United Kingdom" => "United Kingdom, Europe",
        other => other,
    };
    format!("Weather data for {display}")
}

/// Tick label for an X coordinate in days since the Unix epoch.
fn format_day(day: f64) -> String {
    match chrono::DateTime::from_timestamp((day * 86_400.0) as i64, 0) {
        Some(ts) => ts.format("%b %d").to_string(),
        None => format!("{day:.0}"),
    }
}
