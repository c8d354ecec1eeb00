//! Line-level styling for artifact content.
//!
//! This is not a parser: each line is classified on its own by the artifact's
//! language tag, which is enough to make the generated documents readable.

use ratatui::text::{Line, Span};

use super::theme::Theme;

const PYTHON_KEYWORDS: &[&str] = &[
    "def", "class", "import", "from", "return", "assert", "if", "else", "for", "in", "with",
    "as", "pass", "raise", "try", "except",
];

const DOCKER_INSTRUCTIONS: &[&str] = &[
    "FROM", "RUN", "CMD", "COPY", "ADD", "WORKDIR", "ENV", "EXPOSE", "ENTRYPOINT", "ARG",
    "USER", "LABEL", "VOLUME", "HEALTHCHECK",
];

/// Style one line of content in `language`.
pub fn highlight_line(language: &str, line: &str, theme: &Theme) -> Line<'static> {
    match language {
        "markdown" => markdown_line(line, theme),
        "yaml" => yaml_line(line, theme),
        "python" => python_line(line, theme),
        "dockerfile" => dockerfile_line(line, theme),
        _ => Line::from(Span::styled(line.to_string(), theme.text_style())),
    }
}

fn markdown_line(line: &str, theme: &Theme) -> Line<'static> {
    let trimmed = line.trim_start();
    let style = if trimmed.starts_with('#') {
        theme.heading_style()
    } else if trimmed.starts_with("```") {
        theme.comment_style()
    } else if trimmed.starts_with("- ") || trimmed.starts_with("* ") || trimmed.starts_with('|') {
        theme.emphasis_style()
    } else if trimmed.starts_with('>') {
        theme.comment_style()
    } else {
        theme.text_style()
    };
    Line::from(Span::styled(line.to_string(), style))
}

fn yaml_line(line: &str, theme: &Theme) -> Line<'static> {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        return Line::from(Span::styled(line.to_string(), theme.comment_style()));
    }
    match line.split_once(':') {
        Some((key, rest)) if is_yaml_key(key) => {
            let value_style = if rest.trim_start().starts_with(['"', '\'']) {
                theme.string_style()
            } else {
                theme.text_style()
            };
            Line::from(vec![
                Span::styled(key.to_string(), theme.key_style()),
                Span::styled(":".to_string(), theme.hint_style()),
                Span::styled(rest.to_string(), value_style),
            ])
        }
        _ => Line::from(Span::styled(line.to_string(), theme.text_style())),
    }
}

fn is_yaml_key(raw: &str) -> bool {
    let key = raw.trim_start();
    let key = key.strip_prefix("- ").unwrap_or(key);
    !key.is_empty() && !key.contains(' ')
}

fn python_line(line: &str, theme: &Theme) -> Line<'static> {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        return Line::from(Span::styled(line.to_string(), theme.comment_style()));
    }
    if trimmed.starts_with('@') {
        return Line::from(Span::styled(line.to_string(), theme.string_style()));
    }

    let indent = &line[..line.len() - trimmed.len()];
    let first_word = trimmed
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .next()
        .unwrap_or("");
    if PYTHON_KEYWORDS.contains(&first_word) && !first_word.is_empty() {
        let rest = &trimmed[first_word.len()..];
        Line::from(vec![
            Span::raw(indent.to_string()),
            Span::styled(first_word.to_string(), theme.keyword_style()),
            Span::styled(rest.to_string(), theme.text_style()),
        ])
    } else {
        Line::from(Span::styled(line.to_string(), theme.text_style()))
    }
}

fn dockerfile_line(line: &str, theme: &Theme) -> Line<'static> {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        return Line::from(Span::styled(line.to_string(), theme.comment_style()));
    }
    match trimmed.split_once(' ') {
        Some((word, rest)) if DOCKER_INSTRUCTIONS.contains(&word) => {
            let indent = &line[..line.len() - trimmed.len()];
            Line::from(vec![
                Span::raw(indent.to_string()),
                Span::styled(word.to_string(), theme.keyword_style()),
                Span::styled(format!(" {}", rest), theme.text_style()),
            ])
        }
        _ => Line::from(Span::styled(line.to_string(), theme.text_style())),
    }
}
