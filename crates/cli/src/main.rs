//! Entry point for the `planner` binary.
//!
//! Replays every shipped route and writes the HTML report pages plus the
//! index that links them. Logging goes to stderr so redirected output and
//! the generated files never mix.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use planner_cli::{ReportOptions, write_reports};
use route_report::Style;

/// Render the shipped SL1 routes to HTML reports
#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Render the shipped SL1 routes to HTML reports", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory the pages are written to
    #[arg(long, default_value = "docs")]
    out: PathBuf,

    /// Color scheme for the generated pages
    #[arg(long, value_enum, default_value = "light")]
    style: StyleArg,

    /// Also export each route's replay trace as JSON
    #[arg(long)]
    emit_json: bool,
}

/// Command-line counterpart of [`Style`].
#[derive(Clone, Copy, clap::ValueEnum)]
enum StyleArg {
    Light,
    Dark,
}

impl From<StyleArg> for Style {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Light => Style::Light,
            StyleArg::Dark => Style::Dark,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let routes = route_content::all_routes()?;
    tracing::info!("Replaying {} routes", routes.len());

    let options = ReportOptions {
        out_dir: cli.out,
        style: cli.style.into(),
        emit_json: cli.emit_json,
    };
    let written = write_reports(&routes, &options)?;
    tracing::info!(
        "Wrote {} files to {}",
        written.len(),
        options.out_dir.display()
    );
    Ok(())
}
