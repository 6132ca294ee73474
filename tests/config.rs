use std::path::PathBuf;

use cold_room_heat_load::{
    config::{self, Config, ConfigError},
    report::ReportFormat,
};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cold_room_config_{name}_{}.toml", std::process::id()))
}

#[test]
fn missing_config_is_created_with_defaults() {
    let path = temp_path("create");
    let _ = std::fs::remove_file(&path);
    let cfg = config::load_or_create(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(config::load_from(&path).unwrap(), cfg);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn saved_settings_read_back() {
    let path = temp_path("roundtrip");
    let mut cfg = Config::default();
    cfg.language = "ko".into();
    cfg.language_pack_dir = Some("lang".into());
    cfg.report.format = ReportFormat::Markdown;
    cfg.save_to(&path).unwrap();
    assert_eq!(config::load_from(&path).unwrap(), cfg);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn partial_config_uses_defaults() {
    let cfg: Config = toml::from_str("language = \"en\"\n[report]\nformat = \"toml\"\n").unwrap();
    assert_eq!(cfg.language, "en");
    assert_eq!(cfg.parameters_path(), PathBuf::from("heat_load.toml"));
    assert_eq!(cfg.report.format, ReportFormat::Toml);
    assert_eq!(cfg.report_dir(), PathBuf::from("reports"));
}

#[test]
fn malformed_config_is_a_parse_error() {
    let path = temp_path("broken");
    std::fs::write(&path, "language = ").unwrap();
    assert!(matches!(config::load_from(&path), Err(ConfigError::Parse(_))));
    let _ = std::fs::remove_file(&path);
}
