//! Command-line front end: read sales, filter, average, project, report.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use demand_forecast::core::total_demand;
use demand_forecast::detection::{OutlierConfig, DEFAULT_MULTIPLIER};
use demand_forecast::io::{
    prompt_days, read_sales, save_report, write_filter_stats, write_report, ReaderConfig,
};
use demand_forecast::models::{AverageDemand, DemandForecaster, Forecaster};

#[derive(Parser)]
#[command(name = "demand-forecast")]
#[command(about = "Project per-product demand from historical sales", long_about = None)]
struct Cli {
    /// Sales file with `product;date;quantity` rows
    #[arg(short, long)]
    input: PathBuf,

    /// Number of days to forecast (asked interactively when omitted)
    #[arg(short, long, value_parser = clap::value_parser!(i64).range(1..))]
    days: Option<i64>,

    /// Write the report to this file as well
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only forecast these products (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    products: Vec<String>,

    /// Dispersion multiplier for the outlier bounds
    #[arg(short, long, default_value_t = DEFAULT_MULTIPLIER)]
    multiplier: f64,

    /// Field delimiter of the sales file
    #[arg(long, default_value_t = ';')]
    delimiter: char,

    /// Treat the first row of the sales file as a header
    #[arg(long)]
    headers: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "demand_forecast=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if !cli.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character");
    }
    let reader_config = ReaderConfig::default()
        .with_delimiter(cli.delimiter as u8)
        .with_headers(cli.headers);

    let records = read_sales(&cli.input, &reader_config)
        .with_context(|| format!("reading sales from {}", cli.input.display()))?;
    if records.is_empty() {
        bail!("no sale records found in {}", cli.input.display());
    }

    let forecaster = if cli.products.is_empty() {
        DemandForecaster::new()
    } else {
        DemandForecaster::with_products(cli.products.iter().map(|p| p.trim()))
    };
    let mut model = AverageDemand::new()
        .with_config(OutlierConfig::new(cli.multiplier)?)
        .with_forecaster(forecaster);
    model.fit(&records)?;

    if let Some(stats) = model.filter_stats() {
        let kept: usize = stats.values().map(|s| s.after).sum();
        info!(
            records = records.len(),
            kept,
            products = stats.len(),
            "filtered outliers"
        );
        let mut stdout = io::stdout().lock();
        write_filter_stats(&mut stdout, stats)?;
        stdout.flush()?;
    }

    let days = match cli.days {
        Some(days) => days,
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            prompt_days(&mut stdin.lock(), &mut stdout)?
        }
    };

    let forecast = model.predict(days)?;
    info!(
        days,
        products = forecast.len(),
        total = total_demand(&forecast),
        "forecast ready"
    );

    let generated_at = chrono::Local::now().naive_local();
    let mut stdout = BufWriter::new(io::stdout().lock());
    write_report(&mut stdout, &forecast, generated_at)?;
    stdout.flush()?;

    if let Some(path) = &cli.output {
        save_report(path, &forecast, generated_at)
            .with_context(|| format!("saving report to {}", path.display()))?;
    }

    Ok(())
}
