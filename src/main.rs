//! dupemap - report duplicate files from a checksum manifest.
//!
//! Usage:
//!   dupemap MANIFEST             Report duplicate groups, previewing each file
//!   dupemap MANIFEST --no-view   Report without invoking the viewer
//!   dupemap MANIFEST -f json     Emit the report as JSON
//!   dupemap --help               Show help

mod viewer;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};

use dupemap_core::{DuplicateReport, NoopViewer, ReportConfig, Viewer, load_path};
use viewer::CommandViewer;

#[derive(Parser)]
#[command(
    name = "dupemap",
    version,
    about = "Report duplicate files from a checksum manifest",
    long_about = "dupemap reads a manifest of `<checksum>\\t<filename>` lines, groups \
                  filenames sharing a checksum, and prints every group with two or \
                  more members: the checksum on its own line, then each member \
                  indented. Each reported file is also handed to an external viewer \
                  command for preview."
)]
struct Cli {
    /// Path to the checksum manifest
    manifest: PathBuf,

    /// Viewer command invoked with each reported filename
    #[arg(long, default_value = "display")]
    viewer: String,

    /// Skip invoking the viewer
    #[arg(long)]
    no_view: bool,

    /// Maximum number of duplicate groups to report (0 = all)
    #[arg(short = 'n', long, default_value = "0")]
    top: usize,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let table = load_path(&cli.manifest)
        .context(format!("Failed to load manifest {}", cli.manifest.display()))?;

    let config = ReportConfig::builder().max_groups(cli.top).build()?;
    let report = table.into_report(&config);

    let viewer: Box<dyn Viewer> = if cli.no_view {
        Box::new(NoopViewer)
    } else {
        Box::new(CommandViewer::new(cli.viewer.clone()))
    };

    emit(&report, cli.format, viewer.as_ref())
}

/// Write the report in the selected format. The viewer runs per reported
/// filename in both formats.
fn emit(report: &DuplicateReport, format: OutputFormat, viewer: &dyn Viewer) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            dupemap_core::write_text_report(report, &mut out, viewer)?;
            out.flush()?;
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
            dupemap_core::view_report(report, viewer);
        }
    }

    Ok(())
}
