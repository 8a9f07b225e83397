use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dnalign_core::ErrorPolicy;
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use commands::align::InputSource;
use config::Config;
use error::CliError;

#[derive(Parser)]
#[command(name = "dnalign")]
#[command(about = "dnalign - anchored brute-force DNA alignment scoring")]
#[command(version)]
#[command(long_about = "
dnalign places a partial sequence inside a reference sequence with both ends
anchored, tries every order-preserving placement of the interior symbols and
reports the best affine-gap score for each 'REFERENCE | PARTIAL' line.

Examples:
  dnalign align pairs.txt
  cat pairs.txt | dnalign align --on-error skip
  dnalign align --text 'GAAAAAAT | GAAT' --show-alignment
  dnalign combos 5 3
  dnalign score GAAAAAAT GAA----T
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of threads to use
    #[arg(short, long, global = true)]
    pub threads: Option<usize>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Best anchored alignment score for every 'REFERENCE | PARTIAL' line
    Align {
        /// Input file ('-' or omitted reads stdin)
        input: Option<PathBuf>,

        /// Use this text as the input instead of a file
        #[arg(long, conflicts_with = "input")]
        text: Option<String>,

        /// What to do with lines that fail
        #[arg(long)]
        on_error: Option<OnError>,

        /// Maximum candidates per line (0 disables the limit)
        #[arg(long)]
        max_candidates: Option<u64>,

        /// Score candidates on a single thread
        #[arg(long)]
        serial: bool,

        /// Print the winning candidate next to each score
        #[arg(long)]
        show_alignment: bool,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// List every index combination of K out of N
    Combos {
        /// Number of slots
        n: usize,

        /// Number of indices to choose
        k: usize,

        /// Allow an index to repeat
        #[arg(long)]
        with_replacement: bool,
    },

    /// Score one explicit candidate against a reference
    Score {
        /// Reference sequence
        reference: String,

        /// Candidate of the same length, '-' marks gaps
        candidate: String,
    },

    /// Configuration helpers
    Config {
        /// Print an example dnalign.toml
        #[arg(long)]
        example: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OnError {
    Halt,
    Skip,
}

impl From<OnError> for ErrorPolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Halt => ErrorPolicy::Halt,
            OnError::Skip => ErrorPolicy::Skip,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    Text,
    Json,
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(cli) {
        match err.downcast_ref::<CliError>() {
            Some(cli_err) => error::print_error_and_exit(cli_err),
            None => {
                eprintln!("Error: {:#}", err);
                std::process::exit(1);
            }
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let threads = cli.threads.unwrap_or(config.general.threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("Failed to set thread count")?;
    log::debug!("Using {} threads", threads);

    match cli.command {
        Commands::Align {
            input,
            text,
            on_error,
            max_candidates,
            serial,
            show_alignment,
            format,
        } => {
            commands::align::execute(
                &config,
                InputSource::from_args(input, text),
                on_error,
                max_candidates,
                serial,
                show_alignment,
                format,
            )?;
        }

        Commands::Combos {
            n,
            k,
            with_replacement,
        } => {
            commands::combos::execute(n, k, with_replacement)?;
        }

        Commands::Score {
            reference,
            candidate,
        } => {
            commands::score::execute(&reference, &candidate)?;
        }

        Commands::Config { example } => {
            if example {
                print!("{}", Config::example_toml()?);
            } else {
                print!("{}", toml::to_string_pretty(&config).context("Failed to serialize configuration")?);
            }
        }
    }

    Ok(())
}
