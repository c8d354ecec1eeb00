use anyhow::{Context, Result};
use artifact_forge::cli::{self, Commands, LogTarget};
use artifact_forge::config;

fn main() -> Result<()> {
    let cli = cli::parse_args();
    let command = cli.command.unwrap_or(Commands::Tui { url: None });

    // The TUI owns the terminal, so its logs go to a file.
    let target = match command {
        Commands::Tui { .. } => LogTarget::File(cli::default_log_file()),
        _ => LogTarget::Stderr,
    };
    cli::init_logging(cli.verbose, target)?;

    let config = config::load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    cli::dispatch(command, &config)
}
