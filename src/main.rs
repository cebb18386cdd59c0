//! path-hours main entry point
//!
//! Run without arguments to crawl the built-in catalog and print its total
//! watch time.

use clap::Parser;
use path_hours::config::{load_config, Config};
use path_hours::crawler::crawl;
use path_hours::output::summary_line;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// path-hours: total watch time of a learning-path catalog
///
/// Crawls the catalog's learning-path index, follows every learning path
/// and adds up the duration of each course.
#[derive(Parser, Debug)]
#[command(name = "path-hours")]
#[command(version)]
#[command(about = "Total watch time of a learning-path catalog", long_about = None)]
struct Cli {
    /// Optional TOML file overriding the built-in catalog settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config(&path) {
                Ok(config) => config,
                Err(e) => return fail(&e),
            }
        }
        None => Config::default(),
    };

    match crawl(&config).await {
        Ok(report) => {
            println!("{}", summary_line(&config.site.catalog_name, &report));
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

/// Reports a fatal error and picks the failing exit status
fn fail(error: &dyn std::error::Error) -> ExitCode {
    tracing::error!("Crawl failed: {}", error);
    eprintln!("Could not get the path duration: {}", error);
    ExitCode::FAILURE
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout only carries the summary line.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("path_hours=warn,warn"),
            1 => EnvFilter::new("path_hours=info,warn"),
            2 => EnvFilter::new("path_hours=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
