use hxglue::config::{Config, CONFIG_ENV, LOG_DIR_ENV, THEME_ENV};
use hxglue::theme::Theme;
use std::env;
use std::path::PathBuf;

/// Process environment is shared, so every env-dependent case lives in this one test.
#[test]
fn test_env_overrides_take_precedence_over_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("custom.toml");
    std::fs::write(
        &path,
        "theme = \"Light\"\nlog_dir = \"/from/file\"\nlog_filter = \"warn\"\n",
    )?;

    env::remove_var(THEME_ENV);
    env::remove_var(LOG_DIR_ENV);
    env::set_var(CONFIG_ENV, &path);

    // File picked up through HXGLUE_CONFIG
    let config = Config::load(None)?;
    assert_eq!(config.theme, Some(Theme::Light));
    assert_eq!(config.log_dir, Some(PathBuf::from("/from/file")));
    assert_eq!(config.log_filter, "warn");

    // Env values win over the file
    let log_dir = dir.path().join("logs");
    env::set_var(THEME_ENV, "DARK");
    env::set_var(LOG_DIR_ENV, &log_dir);
    let config = Config::load(None)?;
    assert_eq!(config.theme, Some(Theme::Dark));
    assert_eq!(config.log_dir, Some(log_dir));
    assert_eq!(config.log_filter, "warn");

    env::set_var(THEME_ENV, "sepia");
    let err = Config::load(None).unwrap_err();
    assert_eq!(err.to_string(), "Invalid HXGLUE_THEME value");
    assert!(format!("{:#}", err).contains("unknown theme 'sepia'"));

    env::remove_var(THEME_ENV);
    env::remove_var(LOG_DIR_ENV);
    env::remove_var(CONFIG_ENV);
    Ok(())
}
