mod platform;

use std::path::PathBuf;
use std::process::ExitCode;

use advisor_logging::advisor_warn;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use platform::config::{load_config, AdvisorConfig};
use platform::headless::{run_analyze, HeadlessForm};
use platform::logging::{self, LogDestination};

#[derive(Parser)]
#[command(name = "advisor_app")]
#[command(about = "AI Career Path Advisor - submit a transcript and resume for analysis", long_about = None)]
struct Cli {
    /// Config file (RON); defaults to ./advisor.ron when present
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Base URL of the analysis service
    #[arg(short, long, global = true)]
    endpoint: Option<String>,
    /// Overall request timeout in seconds
    #[arg(short, long, global = true)]
    timeout: Option<u64>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive form (default)
    Tui,
    /// Submit once without the interactive form and print the results
    Analyze(AnalyzeArgs),
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Desired job position
    #[arg(short, long)]
    position: String,
    /// Transcript PDF
    #[arg(long)]
    transcript: PathBuf,
    /// Resume PDF
    #[arg(long)]
    resume: PathBuf,
    /// GitHub profile URL
    #[arg(short, long)]
    github_profile: Option<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let (mut config, config_error) = match load_config(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (AdvisorConfig::default(), Some(err)),
    };
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(timeout) = cli.timeout {
        config.request_timeout_secs = Some(timeout);
    }

    let destination = match cli.command {
        // The interactive form owns the terminal.
        None | Some(Commands::Tui) => LogDestination::File,
        Some(Commands::Analyze(_)) => config.log_destination,
    };
    logging::initialize(destination, advisor_logging::default_level());
    if let Some(err) = config_error {
        advisor_warn!("{}; using defaults", err);
    }

    match cli.command {
        None | Some(Commands::Tui) => {
            platform::app::run_tui(config.client_settings())?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Analyze(args)) => {
            let form = HeadlessForm {
                position: args.position,
                transcript: args.transcript,
                resume: args.resume,
                github_profile: args.github_profile,
            };
            let (output, succeeded) = run_analyze(&form, config.client_settings())?;
            print!("{output}");
            Ok(if succeeded {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
