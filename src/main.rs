//! CLI entry point for the case dashboard.
//!
//! Runs the chart pipeline, the map pipeline, or both, and writes their
//! output to stdout for a renderer to pick up.

use anyhow::Result;
use case_dashboard::analyzers::types::{ChartData, MapData};
use case_dashboard::config::Config;
use case_dashboard::infra::case_api::client::CaseApiClient;
use case_dashboard::output::{print_pretty, write_date_csv, write_json, write_region_csv};
use case_dashboard::pipeline::{chart_pipeline, map_pipeline};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::ffi::OsStr;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "case_dashboard")]
#[command(about = "Aggregates case data for the dashboard charts and map", long_about = None)]
struct Cli {
    /// Case API URL or local JSON file (overrides CASES_API_URL)
    #[arg(long, global = true)]
    cases_url: Option<String>,

    /// Boundary GeoJSON URL or local file (overrides BOUNDARIES_URL)
    #[arg(long, global = true)]
    boundaries_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the per-date and per-region chart series
    Charts {
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Build the region counts and styled boundaries for the map
    Map {
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Run both pipelines, each with its own fetch
    Dashboard {
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Csv,
    Pretty,
}

#[derive(Serialize)]
struct Dashboard {
    charts: Option<ChartData>,
    map: Option<MapData>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/case_dashboard.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("case_dashboard.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().with_overrides(cli.cases_url, cli.boundaries_url);
    info!(cases = %config.cases_url, boundaries = %config.boundaries_url, "Sources configured");

    let source = CaseApiClient::new(config);
    let stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Charts { format } => {
            let Some(chart) = chart_pipeline(&source).await else {
                return Ok(());
            };
            match format {
                Format::Json => write_json(stdout, &chart)?,
                Format::Csv => write_date_csv(stdout, &chart)?,
                Format::Pretty => print_pretty(&chart),
            }
        }
        Commands::Map { format } => {
            let Some(map) = map_pipeline(&source).await else {
                return Ok(());
            };
            match format {
                Format::Json => write_json(stdout, &map)?,
                Format::Csv => write_region_csv(stdout, &map)?,
                Format::Pretty => print_pretty(&map),
            }
        }
        Commands::Dashboard { format } => {
            let (charts, map) = tokio::join!(chart_pipeline(&source), map_pipeline(&source));
            let dashboard = Dashboard { charts, map };
            match format {
                Format::Json => write_json(stdout, &dashboard)?,
                Format::Pretty => {
                    print_pretty(&dashboard.charts);
                    print_pretty(&dashboard.map);
                }
                Format::Csv => {
                    warn!("CSV output holds one table; use the charts or map command");
                }
            }
        }
    }

    Ok(())
}
