use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use weather_dash::models::Distribution;
use weather_dash::{chart, dataset, stats, storage, viz};

#[derive(Parser, Debug)]
#[command(
    name = "weather-dash",
    version,
    about = "Load, smooth, visualize & summarize daily weather data"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a chart for one country (and optionally export the series).
    Render(RenderArgs),
    /// Print per-country summary statistics.
    Stats(StatsArgs),
    /// List the countries present in the dataset.
    Countries(CountriesArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Path to the weather CSV (columns: country,date,temp,min,max).
    #[arg(short = 'D', long, default_value = "data/weather.csv")]
    data: PathBuf,
    /// Country to select (case-sensitive exact match).
    #[arg(short, long)]
    country: String,
    /// Distribution mode.
    #[arg(short = 'm', long, value_enum, default_value_t = Distribution::Discrete)]
    distribution: Distribution,
    /// Write the chart to the given path (.svg or .png).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Width of the chart (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the chart (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Export the filtered series to file (format inferred by --format or extension).
    #[arg(long)]
    export: Option<PathBuf>,
    /// Export format (csv or json). If omitted, inferred from --export extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

#[derive(Args, Debug)]
struct StatsArgs {
    /// Path to the weather CSV.
    #[arg(short = 'D', long, default_value = "data/weather.csv")]
    data: PathBuf,
}

#[derive(Args, Debug)]
struct CountriesArgs {
    /// Path to the weather CSV.
    #[arg(short = 'D', long, default_value = "data/weather.csv")]
    data: PathBuf,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => format!("{:.1}", x),
        _ => "NA".to_string(),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Stats(args) => cmd_stats(args),
        Command::Countries(args) => cmd_countries(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let records = dataset::load_csv(&args.data)?;
    let series = dataset::select_series(&records, &args.country, args.distribution)?;
    if series.is_empty() {
        eprintln!("warning: no rows for country {:?}", args.country);
    }

    if let Some(path) = args.export.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&series, path)?,
            "json" => storage::save_json(&series, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} rows to {}", series.len(), path.display());
    }

    if let Some(out) = args.out.as_ref() {
        let title = format!("Weather data for {}", args.country);
        let spec = chart::chart_spec(&series, &title, None);
        viz::render_chart(&spec, out, args.width, args.height)?;
        eprintln!("Wrote chart to {}", out.display());
    }

    Ok(())
}

fn cmd_stats(args: StatsArgs) -> Result<()> {
    let records = dataset::load_csv(&args.data)?;
    for s in stats::country_summary(&records) {
        println!(
            "{}  count={}  temp mean={} min={} max={}  coldest={} hottest={}",
            s.country,
            s.count,
            fmt_opt(s.temp_mean),
            fmt_opt(s.temp_min),
            fmt_opt(s.temp_max),
            fmt_opt(s.coldest),
            fmt_opt(s.hottest)
        );
    }
    Ok(())
}

fn cmd_countries(args: CountriesArgs) -> Result<()> {
    let records = dataset::load_csv(&args.data)?;
    for c in dataset::countries(&records) {
        println!("{c}");
    }
    Ok(())
}
