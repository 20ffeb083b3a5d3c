//! coursite - Turn a tree of course materials into a static site
//!
//! Reads `<base>/src` and `<base>/config`, writes `<base>/dist`.

use coursite::{BuildOptions, BuildReport, Layout, build_site};
use eyre::{Result, WrapErr};
use figue as args;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Debug, facet::Facet)]
struct Args {
    /// Project directory containing src/ and config/
    #[facet(args::positional)]
    base_dir: PathBuf,

    /// Output directory (default: <base-dir>/dist)
    #[facet(args::named, args::short = 'o', default)]
    output: Option<PathBuf>,

    /// Remove the output directory before building
    #[facet(args::named, default)]
    clean: bool,

    /// Log every processed file
    #[facet(args::named, args::short = 'v', default)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args: Args = figue::from_std_args().wrap_err("Failed to parse command line arguments")?;

    init_logging(args.verbose);

    if !args.base_dir.is_dir() {
        eyre::bail!("{} is not a directory", args.base_dir.display());
    }

    let mut layout = Layout::new(&args.base_dir);
    if let Some(output) = args.output {
        layout = layout.with_dist_dir(output);
    }
    let dist_dir = layout.dist_dir().to_path_buf();

    eprintln!(
        "{} Building {} into {}",
        "->".blue().bold(),
        args.base_dir.display(),
        dist_dir.display()
    );

    let report = build_site(layout, &BuildOptions { clean: args.clean })?;
    print_summary(&report);

    if !report.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(report: &BuildReport) {
    for (kind, count) in &report.counts {
        eprintln!("   {:>14}: {}", kind.to_string(), count.to_string().green());
    }

    if report.is_success() {
        eprintln!(
            "\n{} Processed {} files, wrote {}",
            "OK".green().bold(),
            report.processed(),
            report.written.len()
        );
        return;
    }

    eprintln!(
        "\n{} {} file(s) failed:",
        "!".yellow().bold(),
        report.failures.len()
    );
    for failure in &report.failures {
        eprintln!("   {}: {}", failure.path.display().red(), failure.error);
    }
}
