use orthoform_cli::config::{load_config, save_config, OrthoformConfig};
use orthoform_export::export::ExportFormat;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, OrthoformConfig::default());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let mut config = OrthoformConfig::default();
    config.default_format = ExportFormat::Docx;
    config.open_in_viewer = false;
    config.viewer = Some("evince".to_string());
    config.styles.pdf.line_height = 16.0;

    save_config(&config, &path).unwrap();
    assert!(!path.with_extension("json.tmp").exists());
    assert_eq!(load_config(&path).unwrap(), config);
}

#[cfg(unix)]
#[test]
fn saved_config_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config(&OrthoformConfig::default(), &path).unwrap();
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn partial_unversioned_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "release_delay_secs": 5, "default_format": "docx" }"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.release_delay_secs, 5);
    assert_eq!(config.default_format, ExportFormat::Docx);
    assert!(config.open_in_viewer);
    assert_eq!(config.viewer, None);
}

#[test]
fn newer_config_versions_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 99 }"#).unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}
