use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::artifact::ArtifactKind;

#[derive(Parser, Debug)]
#[command(name = "artifact-forge")]
#[command(about = "Turn a GitHub repository URL into ready-made project artifacts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to the nearest .artifact-forge.toml)
    #[arg(long, global = true, env = "ARTIFACT_FORGE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive terminal UI (default)
    Tui {
        /// Pre-fill the repository URL
        #[arg(long)]
        url: Option<String>,
    },

    /// Generate artifacts without the UI and save them to a directory
    Generate {
        /// GitHub repository URL
        url: String,

        /// Output directory (defaults to the configured download directory)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Only save these artifacts (repeatable)
        #[arg(long, value_enum)]
        only: Vec<KindArg>,

        /// Override the simulated analysis time
        #[arg(long = "delay-ms")]
        delay_ms: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Hide the progress spinner
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print one artifact to stdout
    Show {
        /// GitHub repository URL
        url: String,

        /// Artifact to print
        #[arg(value_enum)]
        kind: KindArg,
    },

    /// Check a repository URL
    Validate {
        /// GitHub repository URL
        url: String,
    },

    /// Write a default .artifact-forge.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Readme,
    Openapi,
    Tests,
    Dockerfile,
    Audit,
}

impl From<KindArg> for ArtifactKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Readme => ArtifactKind::Readme,
            KindArg::Openapi => ArtifactKind::Openapi,
            KindArg::Tests => ArtifactKind::Tests,
            KindArg::Dockerfile => ArtifactKind::Dockerfile,
            KindArg::Audit => ArtifactKind::Audit,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
