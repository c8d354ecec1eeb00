//! CLI module for artifact-forge
//!
//! - Argument parsing (`args`)
//! - Command handlers (`commands`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod commands;
pub mod setup;

pub use args::{Cli, Commands, KindArg, OutputFormat};
pub use commands::{
    dispatch, handle_generate_command, handle_init_command, handle_show_command,
    handle_validate_command, run_to_completion, GenerateOptions,
};
pub use setup::{default_log_file, init_logging, level_for_verbosity, LogTarget};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
