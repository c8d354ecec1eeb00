//! Exporter and generated content checks against a real directory.

use artifact_forge::export::{download_all, download_one, DirectoryTarget};
use artifact_forge::templates::KNOWN_PLACEHOLDERS;
use artifact_forge::{generate, validate, ArtifactKind, ArtifactSet, TemplateSet};
use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn react() -> ArtifactSet {
    generate(
        &TemplateSet::builtin(),
        &validate("https://github.com/facebook/react").unwrap(),
        now(),
    )
}

fn dir_entries(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}

#[test]
fn download_all_writes_every_file() {
    let dir = TempDir::new().unwrap();
    let mut target = DirectoryTarget::new(dir.path());
    let artifacts = react();

    let report = download_all(&mut target, &artifacts);

    assert!(report.all_succeeded());
    assert_eq!(
        report.outcomes.iter().map(|o| o.kind).collect::<Vec<_>>(),
        ArtifactKind::ALL.to_vec()
    );
    assert_eq!(
        dir_entries(&dir),
        vec!["Dockerfile", "README.md", "openapi.yaml", "security-audit.md", "tests.py"]
    );
    for artifact in &artifacts {
        let saved = std::fs::read_to_string(dir.path().join(&artifact.filename)).unwrap();
        assert_eq!(saved, artifact.content);
    }
}

#[test]
fn downloading_twice_replaces_the_file() {
    let dir = TempDir::new().unwrap();
    let mut target = DirectoryTarget::new(dir.path());
    let artifacts = react();
    let readme = artifacts.get(ArtifactKind::Readme);

    download_one(&mut target, readme).unwrap();
    download_one(&mut target, readme).unwrap();

    assert_eq!(dir_entries(&dir), vec!["README.md"]);
}

#[test]
fn download_into_blocked_directory_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("blocked"), "a file, not a directory").unwrap();
    let mut target = DirectoryTarget::new(dir.path().join("blocked"));
    let artifacts = react();

    let report = download_all(&mut target, &artifacts);

    assert_eq!(report.attempted(), 5);
    assert_eq!(report.failure_count(), 5);
    assert_eq!(dir_entries(&dir), vec!["blocked"]);
}

#[test]
fn download_all_creates_configured_directory() {
    let dir = TempDir::new().unwrap();
    let forge = dir.path().join("Downloads").join("forge");
    let mut target = DirectoryTarget::new(&forge);

    let report = download_all(&mut target, &react());

    assert!(report.all_succeeded());
    assert!(forge.join("README.md").is_file());
}

#[test]
fn openapi_artifact_is_valid_yaml() {
    let artifacts = react();
    let doc: serde_yaml::Value =
        serde_yaml::from_str(&artifacts.get(ArtifactKind::Openapi).content).unwrap();
    assert!(doc.get("openapi").is_some());
    assert!(doc.get("paths").is_some());
}

#[test]
fn no_known_placeholder_survives_generation() {
    for url in [
        "https://github.com/facebook/react",
        "https://github.com/vercel/next.js/",
    ] {
        let set = generate(&TemplateSet::builtin(), &validate(url).unwrap(), now());
        for artifact in &set {
            for placeholder in KNOWN_PLACEHOLDERS {
                assert!(
                    !artifact.content.contains(placeholder),
                    "{} left in {}",
                    placeholder,
                    artifact.filename
                );
            }
        }
    }
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(react(), react());
}
