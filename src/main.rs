//! Interval Timer CLI - a workout timer for the terminal
//!
//! Counts through a workout made of:
//! - a 3 second get-ready countdown
//! - alternating work and rest phases, repeated for each interval
//! - a beep on each of the last 3 seconds of every phase

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tokio::io::BufReader;

use interval_timer::cli::{run_interactive, run_workout, Cli, Commands, Display};
use interval_timer::types::SettingPolicy;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// `RUST_LOG` wins over `--verbose`. Logs go to stderr so stdout stays
/// clean for timer output.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Run(args)) => {
            run_workout(&args).await?;
        }
        Some(Commands::Interactive(args)) => {
            let policy = if args.strict {
                SettingPolicy::Strict
            } else {
                SettingPolicy::Lenient
            };
            if !args.workout.json {
                println!("Interval timer ready. Type 'help' for commands.");
            }
            let stdin = BufReader::new(tokio::io::stdin());
            run_interactive(&args.workout, policy, stdin).await?;
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["interval-timer"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_run() {
        let cli = Cli::parse_from(["interval-timer", "run"]);
        assert!(matches!(cli.command, Some(Commands::Run(_))));
    }

    #[test]
    fn test_cli_parse_interactive() {
        let cli = Cli::parse_from(["interval-timer", "interactive", "--no-sound"]);
        match cli.command {
            Some(Commands::Interactive(args)) => {
                assert!(args.workout.no_sound);
                assert!(!args.strict);
            }
            _ => panic!("Expected Interactive command"),
        }
    }

    #[test]
    fn test_cli_command_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::parse_from(["interval-timer", "--verbose", "run"]);
        assert!(cli.verbose);
    }
}
