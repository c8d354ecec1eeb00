//! Configuration loaded from `.artifact-forge.toml`.
//!
//! The file is looked up in the working directory and its ancestors unless a
//! path is passed with `--config`. Every section is optional and unknown keys
//! are rejected.

mod core;
mod loader;

pub use self::core::{
    AnalysisSettings, ExportSettings, ForgeConfig, NotificationSettings, TemplateSettings,
};
pub use loader::{
    default_config_toml, directory_ancestors, discover_config, load_config, load_config_from,
    load_templates, parse_config, write_default_config, CONFIG_FILE_NAME,
};

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, ForgeConfig::default());
        assert_eq!(config.analysis_delay(), Duration::from_millis(3000));
        assert_eq!(config.notification_durations().short, Duration::from_millis(2000));
        assert_eq!(config.notification_durations().long, Duration::from_millis(3000));
    }

    #[test]
    fn documented_file_parses() {
        let config = parse_config(indoc! {r#"
            [analysis]
            delay_ms = 500

            [export]
            download_dir = "/tmp/forge"

            [notifications]
            short_ms = 1000
            long_ms = 4000

            [templates]
            dir = "./my-templates"
        "#})
        .unwrap();

        assert_eq!(config.analysis.delay_ms, 500);
        assert_eq!(config.download_dir(), PathBuf::from("/tmp/forge"));
        assert_eq!(config.notifications.long_ms, 4000);
        assert_eq!(config.template_dir(), Some(PathBuf::from("./my-templates")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_config("[analysis]\ndelay = 5\n").is_err());
        assert!(parse_config("[colors]\ntheme = \"dark\"\n").is_err());
    }

    #[test]
    fn default_file_round_trips() {
        let config = parse_config(&default_config_toml()).unwrap();
        assert_eq!(config, ForgeConfig::default());
    }

    #[test]
    fn discovery_walks_up_to_ancestor() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[analysis]\ndelay_ms = 42\n",
        )
        .unwrap();

        let config = discover_config(nested);
        assert_eq!(config.analysis.delay_ms, 42);
    }

    #[test]
    fn invalid_discovered_file_falls_back_to_defaults() {
        let root = TempDir::new().unwrap();
        std::fs::write(root.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();
        assert_eq!(
            discover_config(root.path().to_path_buf()),
            ForgeConfig::default()
        );
    }

    #[test]
    fn explicit_path_must_load() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("nope.toml");
        assert!(matches!(
            load_config(Some(&missing)),
            Err(crate::errors::ConfigError::Read { .. })
        ));

        let bad = root.path().join("bad.toml");
        std::fs::write(&bad, "[analysis]\nspeed = 1\n").unwrap();
        assert!(matches!(
            load_config(Some(&bad)),
            Err(crate::errors::ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let root = TempDir::new().unwrap();
        let path = write_default_config(root.path(), false).unwrap();
        assert!(path.exists());
        assert!(matches!(
            write_default_config(root.path(), false),
            Err(crate::errors::ConfigError::AlreadyExists(_))
        ));
        assert!(write_default_config(root.path(), true).is_ok());
    }

    #[test]
    fn template_overrides_come_from_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("readme.tmpl"), "# {{project_name}}\n").unwrap();
        let mut config = ForgeConfig::default();
        config.templates.dir = Some(dir.path().to_path_buf());

        let templates = load_templates(&config).unwrap();
        assert_eq!(
            templates.get(crate::artifact::ArtifactKind::Readme).body,
            "# {{project_name}}\n"
        );
    }
}
