use clap::{Parser, Subcommand};
use dashboard_views::error::Result;
use dashboard_views::{render_json, render_text, PageContent, PageRequest};
use forecast_data::logging::init_logging;
use forecast_data::{Asset, BundleCache, DashboardConfig, Model};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "crypto_dashboard")]
#[command(about = "Cryptocurrency analysis and forecast dashboard", long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the CSV sources
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Print the page as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log level filter, e.g. `debug`
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    page: PageCommand,
}

#[derive(Subcommand)]
enum PageCommand {
    /// Project overview
    Overview,
    /// First rows of a price history
    DataView {
        #[arg(long, default_value = "BTC")]
        coin: Asset,
    },
    /// Exploratory analysis of a price history
    Eda {
        #[arg(long, default_value = "BTC")]
        coin: Asset,
    },
    /// Forecast of one model for one coin
    Forecasts {
        #[arg(long, default_value = "BTC")]
        coin: Asset,
        #[arg(long, default_value = "ARIMA")]
        model: Model,
    },
    /// Model evaluation summary
    Evaluation,
}

impl PageCommand {
    fn request(&self) -> PageRequest {
        match *self {
            PageCommand::Overview => PageRequest::Overview,
            PageCommand::DataView { coin } => PageRequest::DataView(coin),
            PageCommand::Eda { coin } => PageRequest::Eda(coin),
            PageCommand::Forecasts { coin, model } => PageRequest::Forecasts(coin, model),
            PageCommand::Evaluation => PageRequest::ModelEvaluation,
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_json_file(path)?,
        None => DashboardConfig::default(),
    }
    .with_env_overrides();
    if let Some(dir) = cli.data_dir {
        config.sources.data_dir = dir;
    }
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }
    init_logging(&config.log)?;

    // every page assumes the whole bundle is present
    let cache = BundleCache::new(config.sources);
    let bundle = cache.get()?;

    let request = cli.page.request();
    info!(page = %request.page(), "Rendering page");
    let content = PageContent::build(bundle, request);

    if cli.json {
        render_json(&content)
    } else {
        render_text(&content)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Dashboard failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
