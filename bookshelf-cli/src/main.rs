#![deny(missing_docs)]
//! Bookshelf command-line interface.
//!
//! Computes quality metrics for mkdocs-based textbook checkouts and runs
//! catalog-wide site utilities: HTTP convention checks, live-site counting,
//! CSV export, and glossary sorting.

mod checks;

use bookshelf_core::{
    MetricsReport, SiteRecord, StdFileSystem, TextbookAnalyzer, glossary, parse_catalog,
    render_json, render_text,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

pub(crate) type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(
    name = "bookshelf",
    version,
    about = "Reporting utilities for mkdocs textbook sites"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute quality metrics for a textbook checkout.
    Metrics {
        /// Path to the repository root.
        repo_root: PathBuf,
        /// Output format for the report.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Probe site conventions over HTTP for every catalog entry.
    Check {
        /// Path to the catalog JSON file.
        #[arg(long, env = "BOOKSHELF_CATALOG", default_value = "sites.json")]
        catalog: PathBuf,
        /// Branch probed on the raw-content host.
        #[arg(long, default_value = "main")]
        branch: String,
    },
    /// Count catalog sites whose repositories respond over HTTP.
    Count {
        /// Path to the catalog JSON file.
        #[arg(long, env = "BOOKSHELF_CATALOG", default_value = "sites.json")]
        catalog: PathBuf,
    },
    /// Convert a catalog JSON file to CSV.
    Convert {
        /// Input JSON file path.
        input: PathBuf,
        /// Output CSV file path.
        output: PathBuf,
    },
    /// Sort a glossary file alphabetically by term.
    SortGlossary {
        /// Glossary file to sort.
        input: PathBuf,
        /// Output path; defaults to glossary-sorted.md beside the input.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[cfg(not(test))]
#[tokio::main]
async fn main() -> CliResult<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Metrics { repo_root, format } => run_metrics(&repo_root, format),
        Commands::Check { catalog, branch } => checks::run_checks(&catalog, &branch).await,
        Commands::Count { catalog } => checks::run_count(&catalog).await,
        Commands::Convert { input, output } => run_convert(&input, &output).await,
        Commands::SortGlossary { input, output } => run_sort_glossary(&input, output).await,
    }
}

#[cfg(test)]
fn main() {}

#[cfg(not(test))]
fn init_logging() {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "warn");
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .init();
}

fn metrics_report(repo_root: &Path) -> MetricsReport {
    TextbookAnalyzer::new(StdFileSystem::new(), repo_root).analyze()
}

fn format_report(report: &MetricsReport, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => {
            let mut contents = render_json(report)?;
            contents.push('\n');
            Ok(contents)
        }
    }
}

fn run_metrics(repo_root: &Path, format: OutputFormat) -> CliResult<()> {
    let report = metrics_report(repo_root);
    let contents = format_report(&report, format)?;
    print!("{contents}");
    Ok(())
}

pub(crate) async fn load_catalog(path: &Path) -> CliResult<Vec<SiteRecord>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| format!("could not read catalog {}: {err}", path.display()))?;
    let records = parse_catalog(&contents)
        .map_err(|err| format!("invalid catalog JSON in {}: {err}", path.display()))?;
    Ok(records)
}

async fn run_convert(input: &Path, output: &Path) -> CliResult<()> {
    let records = load_catalog(input).await?;

    let mut writer = csv::Writer::from_path(output)
        .map_err(|err| format!("could not create {}: {err}", output.display()))?;
    for record in &records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    println!("Converted {} to {}", input.display(), output.display());
    println!("Processed {} sites", records.len());
    Ok(())
}

async fn run_sort_glossary(input: &Path, output: Option<PathBuf>) -> CliResult<()> {
    let contents = tokio::fs::read_to_string(input)
        .await
        .map_err(|err| format!("could not read glossary {}: {err}", input.display()))?;
    let sorted = glossary::sort_terms(&contents);

    let output = output.unwrap_or_else(|| input.with_file_name("glossary-sorted.md"));
    tokio::fs::write(&output, sorted).await?;

    println!("Sorted glossary written to {}", output.display());
    Ok(())
}
