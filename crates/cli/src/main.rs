use clap::Parser;
use outcome_core::match_outcome;
use std::path::PathBuf;
use tracing::{debug, error, info, Level};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod reader;

#[derive(Parser)]
#[command(name = "outcome")]
#[command(about = "Read a file and report the outcome", long_about = None)]
#[command(version)]
struct Cli {
    /// Path of the file to read
    path: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: Level,
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            cli.log_level,
        ))
        .init();

    info!("reading {}", cli.path.display());

    let outcome = reader::read_file(&cli.path)
        .inspect(|contents| debug!(bytes = contents.len(), "file read"))
        .inspect_err(|e| error!("{e}"));

    match_outcome(
        outcome,
        |contents| {
            print!("{contents}");
            Ok(())
        },
        |e| Err(eyre::Report::new(e)),
    )
}
