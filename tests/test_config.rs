use hxglue::config::Config;
use hxglue::theme::Theme;
use std::path::Path;

#[test]
fn test_load_explicit_config_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("hxglue.toml");
    std::fs::write(&path, "theme = \"light\"\nlog_filter = \"warn\"\n")?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.theme, Some(Theme::Light));
    assert_eq!(config.log_filter, "warn");
    assert_eq!(config.log_dir, None);
    Ok(())
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let err = Config::load(Some(Path::new("/nonexistent/hxglue.toml"))).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_malformed_config_reports_path() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "theme = [")?;

    let err = Config::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
    Ok(())
}
