//! Fragment Locator CLI
//!
//! Reads a code-search JSON document from stdin and prints where each
//! fragment sits in its file.

use std::backtrace::Backtrace;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fragment_locator::commands;
use fragment_locator::config::{self, ConfigUpdate};
use fragment_locator::errors::{LocatorError, Result};
use fragment_locator::readers::{read_stdin, SearchResponse};

#[derive(Parser, Debug)]
#[command(name = "fragment-locator")]
#[command(
    author,
    version,
    about = "Locate code-search fragments at line numbers in their files",
    long_about = None,
    after_help = "Usage: gh api graphql -f query='...' | fragment-locator"
)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Candidates shown per fragment
    #[arg(short = 'n', long, value_name = "N")]
    top: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging; stdout is reserved for the report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    std::panic::set_hook(Box::new(|info| {
        let backtrace = Backtrace::force_capture();
        eprintln!("{}\n{}", info, backtrace);
    }));

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error initializing: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(run_until_interrupted(cli));
    // The blocking reader may still be parked on stdin after an interrupt.
    runtime.shutdown_background();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Runs the pipeline on a blocking thread, racing it against Ctrl-C.
async fn run_until_interrupted(cli: Cli) -> Result<()> {
    let task = tokio::task::spawn_blocking(move || run(cli));

    tokio::select! {
        joined = task => match joined {
            Ok(result) => result,
            Err(e) => Err(LocatorError::Unexpected(e.to_string())),
        },
        signal = tokio::signal::ctrl_c() => {
            signal?;
            Err(LocatorError::Interrupted)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = config::read_config_or_default(cli.config.as_deref())?;
    if cli.top.is_some() {
        let update = ConfigUpdate {
            top: cli.top,
            ..Default::default()
        };
        config = update.merge_into(&config);
        config.validate()?;
    }

    let raw = read_stdin()?;
    let response = SearchResponse::from_json(&raw)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::locate(&response, &config, &mut out)?;
    out.flush()?;

    Ok(())
}

fn print_error(error: &LocatorError) {
    match error {
        LocatorError::JsonParse(_) | LocatorError::Unexpected(_) => eprintln!("{}", error),
        LocatorError::Interrupted => eprintln!("\n\n{}", error),
        _ => eprintln!("Error: {}", error),
    }
    if let Some(hint) = error.hint() {
        eprintln!("{}", hint);
    }
}
