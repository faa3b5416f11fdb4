//! Wellscope - digital wellbeing report client
//!
//! Main entry point for the command-line application.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use wellscope_infra::config;
use wellscope_lib::commands::{analyze, health, sample};
use wellscope_lib::utils::logging::init_tracing;
use wellscope_lib::{AppContext, ReportSource};

#[derive(Parser)]
#[command(name = "wellscope")]
#[command(about = "Submit a daily usage report for wellbeing analysis", long_about = None)]
struct Cli {
    /// Base URL of the analysis service (overrides configuration)
    #[arg(long, global = true, value_name = "URL")]
    service_url: Option<String>,

    /// Write the final score at once instead of counting up
    #[arg(long, global = true)]
    no_animation: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a usage report and draw the results
    Analyze {
        #[arg(help = "Report JSON file; `-` or nothing reads stdin")]
        file: Option<PathBuf>,

        #[arg(long, help = "Analyze the built-in sample report")]
        sample: bool,
    },

    /// Print the sample usage report
    Sample,

    /// Check that the analysis service is up
    Health,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    init_tracing()?;

    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(e) => debug!(error = %e, "no .env file loaded"),
    }

    let cli = Cli::parse();

    if let Commands::Sample = cli.command {
        sample::print(&mut std::io::stdout().lock()).context("failed to write sample report")?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = config::load().context("failed to load configuration")?;
    if let Some(url) = cli.service_url {
        config.service.base_url = url;
    }
    if cli.no_animation {
        config.display.animate = false;
    }

    let stdout = std::io::stdout();
    let color = stdout.is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let context = AppContext::new(config, stdout, color).context("failed to initialize")?;
    info!(service = %context.config.service.base_url, "wellscope starting");

    let code = match cli.command {
        Commands::Analyze { file, sample } => {
            analyze::load_input(&context, &ReportSource::from_arg(file, sample))?;
            // The error banner is already on screen.
            match analyze::run(&context).await {
                Ok(_) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            }
        }
        Commands::Health => {
            if health::check(&context).await? {
                println!("Analysis service at {} is healthy", context.config.service.base_url);
                ExitCode::SUCCESS
            } else {
                println!("Analysis service at {} is unhealthy", context.config.service.base_url);
                ExitCode::FAILURE
            }
        }
        Commands::Sample => ExitCode::SUCCESS,
    };

    Ok(code)
}
