//! Command handlers. Each returns `anyhow::Result` so `main` can report
//! failures with context and a non-zero exit code.

use anyhow::{anyhow, bail, Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::args::{Commands, KindArg, OutputFormat};
use crate::analyzer::{Analyzer, TemplateAnalyzer};
use crate::artifact::{Artifact, ArtifactKind};
use crate::config::{self, ForgeConfig};
use crate::export::{download_all, DirectoryTarget, DownloadReport};
use crate::progress::{LoadingSpinner, ProgressConfig};
use crate::state_machine::{AppState, Session};
use crate::url::{validate, ValidUrl};

/// How often the spinner message is refreshed while waiting.
const SPINNER_REFRESH: Duration = Duration::from_millis(250);

pub fn dispatch(command: Commands, config: &ForgeConfig) -> Result<()> {
    match command {
        Commands::Tui { url } => crate::tui::run(config, url),
        Commands::Generate {
            url,
            out,
            only,
            delay_ms,
            format,
            quiet,
        } => handle_generate_command(
            config,
            GenerateOptions {
                url,
                out,
                only: only.into_iter().map(ArtifactKind::from).collect(),
                delay: delay_ms.map(Duration::from_millis),
                format,
                quiet,
            },
        ),
        Commands::Show { url, kind } => handle_show_command(config, &url, kind),
        Commands::Validate { url } => handle_validate_command(&url),
        Commands::Init { force } => handle_init_command(force),
    }
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub url: String,
    pub out: Option<PathBuf>,
    pub only: Vec<ArtifactKind>,
    pub delay: Option<Duration>,
    pub format: OutputFormat,
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
struct GenerateSummary<'a> {
    url: &'a str,
    repository: String,
    directory: &'a Path,
    report: &'a DownloadReport,
}

pub fn handle_generate_command(config: &ForgeConfig, options: GenerateOptions) -> Result<()> {
    let templates = config::load_templates(config).context("Failed to load templates")?;
    let delay = options.delay.unwrap_or_else(|| config.analysis_delay());
    let mut session = Session::new(TemplateAnalyzer::new(templates), delay);

    let spinner = LoadingSpinner::start(
        &ProgressConfig::from_env(options.quiet || options.format == OutputFormat::Json),
        &options.url,
    );
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start timer runtime")?;
    let outcome = runtime.block_on(run_to_completion(&mut session, &options.url, &spinner));

    let (url, artifacts) = match (outcome, session.state()) {
        (Ok(()), AppState::Results { url, artifacts }) => {
            spinner.finish(format!("Forged {} artifacts for {}", artifacts.len(), url.label()));
            (url.clone(), artifacts.clone())
        }
        (Ok(()), AppState::Failed { error, .. }) => {
            spinner.abandon("Analysis failed");
            return Err(anyhow!(error.clone()));
        }
        (Ok(()), state) => {
            spinner.abandon("Analysis did not finish");
            bail!("analysis ended in unexpected phase {:?}", state.phase());
        }
        (Err(e), _) => {
            spinner.abandon("Analysis not started");
            return Err(e);
        }
    };

    let selected: Vec<&Artifact> = artifacts
        .iter()
        .filter(|a| options.only.is_empty() || options.only.contains(&a.kind))
        .collect();

    let dir = options.out.unwrap_or_else(|| config.download_dir());
    let mut target = DirectoryTarget::create(&dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let report = download_all(&mut target, selected);

    match options.format {
        OutputFormat::Json => {
            let summary = GenerateSummary {
                url: url.as_str(),
                repository: url.label(),
                directory: &dir,
                report: &report,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => print_report_table(&url, &dir, &report),
    }

    if !report.all_succeeded() {
        bail!(
            "{} of {} artifacts could not be saved",
            report.failure_count(),
            report.attempted()
        );
    }
    Ok(())
}

/// Submit `raw` and wait on the timer until the session leaves `Loading`.
pub async fn run_to_completion<A: Analyzer>(
    session: &mut Session<A>,
    raw: &str,
    spinner: &LoadingSpinner,
) -> Result<()> {
    session.submit(raw, Instant::now())?;
    let label = session.state().url().to_string();

    while let Some(deadline) = session.next_deadline() {
        let wake = deadline.min(Instant::now() + SPINNER_REFRESH);
        tokio::time::sleep_until(tokio::time::Instant::from_std(wake)).await;

        let now = Instant::now();
        if let Some(elapsed) = session.loading_elapsed(now) {
            spinner.update(&label, elapsed);
        }
        session.poll(now);
    }
    Ok(())
}

fn print_report_table(url: &ValidUrl, dir: &Path, report: &DownloadReport) {
    println!(
        "{} {}",
        "Artifacts Generated for".bold(),
        url.label().cyan().bold()
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Artifact", "File", "Status"]);

    for outcome in &report.outcomes {
        let status = match &outcome.error {
            None => Cell::new("saved").fg(Color::Green),
            Some(e) => Cell::new(format!("failed: {}", e)).fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(outcome.kind.as_str()),
            Cell::new(&outcome.filename),
            status,
        ]);
    }
    println!("{table}");
    println!("Saved to {}", dir.display().to_string().dimmed());
}

pub fn handle_show_command(config: &ForgeConfig, raw: &str, kind: KindArg) -> Result<()> {
    let url = validate(raw)?;
    let templates = config::load_templates(config).context("Failed to load templates")?;
    let artifacts = TemplateAnalyzer::new(templates).analyze(&url, chrono::Local::now().naive_local())?;
    print!("{}", artifacts.get(kind.into()).content);
    Ok(())
}

pub fn handle_validate_command(raw: &str) -> Result<()> {
    let url = validate(raw)?;
    println!("{} {}", "valid".green().bold(), url.label());
    Ok(())
}

pub fn handle_init_command(force: bool) -> Result<()> {
    let dir = std::env::current_dir().context("Failed to get current directory")?;
    let path = config::write_default_config(&dir, force)?;
    println!("Created {}", path.display());
    Ok(())
}
