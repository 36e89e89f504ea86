use cliniscore_scales::config::{
    CURRENT_VERSION, ConfigError, EngineConfig, load_config, parse_config, save_config,
};
use cliniscore_scales::tier::Locale;

#[test]
fn default_is_current_english() {
    let config = EngineConfig::default();
    assert_eq!(config.config_version, CURRENT_VERSION);
    assert_eq!(config.locale, Locale::En);
}

#[test]
fn unversioned_config_is_migrated() {
    let config = parse_config("{}").unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.locale, Locale::En);
}

#[test]
fn current_config_keeps_locale() {
    let config = parse_config(r#"{"config_version":1,"locale":"vi"}"#).unwrap();
    assert_eq!(config.locale, Locale::Vi);
}

#[test]
fn newer_version_is_rejected() {
    let err = parse_config(r#"{"config_version":99}"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::UnsupportedVersion {
            found: 99,
            supported: CURRENT_VERSION
        }
    ));
}

#[test]
fn oversized_version_is_rejected_not_truncated() {
    let err = parse_config(r#"{"config_version":4294967297,"locale":"en"}"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::UnsupportedVersion {
            found: 4_294_967_297,
            supported: CURRENT_VERSION
        }
    ));
}

#[test]
fn non_object_is_rejected() {
    assert!(matches!(parse_config("[]"), Err(ConfigError::NotAnObject)));
    assert!(matches!(
        parse_config("not json"),
        Err(ConfigError::Serialization(_))
    ));
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.json");

    let config = EngineConfig {
        config_version: 0,
        locale: Locale::Vi,
    };
    save_config(&path, &config).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.locale, Locale::Vi);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
