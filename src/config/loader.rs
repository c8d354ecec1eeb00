use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::ForgeConfig;
use crate::errors::{ConfigError, TemplateError};
use crate::templates::TemplateSet;

pub const CONFIG_FILE_NAME: &str = ".artifact-forge.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<ForgeConfig, String> {
    toml::from_str::<ForgeConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

/// Load an explicitly named config file. Missing or invalid is an error.
pub fn load_config_from(path: &Path) -> Result<ForgeConfig, ConfigError> {
    let contents = read_config_file(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try one candidate during discovery; problems are warnings.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ForgeConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{} ({}). Using defaults.", e, config_path.display());
            Some(ForgeConfig::default())
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its parents, at most `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the config file.
pub fn discover_config(start: PathBuf) -> ForgeConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ForgeConfig::default()
        })
}

/// Explicit path if given, otherwise discovery from the current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<ForgeConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }
    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(dir)),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(ForgeConfig::default())
        }
    }
}

/// Templates with the configured overrides applied.
pub fn load_templates(config: &ForgeConfig) -> Result<TemplateSet, TemplateError> {
    match config.template_dir() {
        Some(dir) => TemplateSet::with_overrides(&dir),
        None => Ok(TemplateSet::builtin()),
    }
}

/// The file `init` writes.
pub fn default_config_toml() -> String {
    let body = toml::to_string_pretty(&ForgeConfig::default()).unwrap_or_default();
    format!(
        "# artifact-forge configuration\n\
         # [export] download_dir and [templates] dir are optional.\n\n{}",
        body
    )
}

/// Write the default config into `dir`.
pub fn write_default_config(dir: &Path, force: bool) -> Result<PathBuf, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path));
    }
    fs::write(&path, default_config_toml()).map_err(|source| ConfigError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::info!("Wrote {}", path.display());
    Ok(path)
}
