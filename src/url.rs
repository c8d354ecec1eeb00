//! Repository URL validation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::errors::ValidationError;

static GITHUB_REPO_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://github\.com/[^/]+/[^/]+/?$").expect("static regex is valid")
});

/// A trimmed URL of the form `https://github.com/<owner>/<repo>[/]`.
///
/// The original text is kept as entered (minus surrounding whitespace);
/// only segment accessors ignore the optional trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ValidUrl(String);

impl ValidUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn segments(&self) -> (&str, &str) {
        let path = self
            .0
            .trim_end_matches('/')
            .trim_start_matches("https://github.com/");
        // Shape was checked on construction
        path.split_once('/').unwrap_or((path, path))
    }

    pub fn owner(&self) -> &str {
        self.segments().0
    }

    pub fn repo(&self) -> &str {
        self.segments().1
    }

    /// `owner/repo`
    pub fn label(&self) -> String {
        let (owner, repo) = self.segments();
        format!("{}/{}", owner, repo)
    }
}

impl fmt::Display for ValidUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ValidUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validate raw input from the URL field.
pub fn validate(input: &str) -> Result<ValidUrl, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !GITHUB_REPO_URL.is_match(trimmed) {
        return Err(ValidationError::InvalidFormat);
    }
    Ok(ValidUrl(trimmed.to_string()))
}
