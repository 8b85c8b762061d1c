use std::io::Write;
use std::path::PathBuf;

use folio::config::{ConfigError, DefaultSelection, ReaderConfig};
use folio::options::{OptionCatalog, SettingsKey};

#[test]
fn test_default_config() {
    let config = ReaderConfig::default();
    assert!(config.article.path.is_none());
    assert_eq!(config.defaults, DefaultSelection::default());

    let catalog = OptionCatalog::builtin();
    assert_eq!(config.resolve_defaults(&catalog).unwrap(), catalog.defaults);
}

#[test]
fn test_parse_toml() {
    let toml_str = r##"
[article]
path = "notes/article.txt"

[defaults]
fontFamily = "Ubuntu"
fontSize = "25px"
backgroundColor = "#000000"
"##;

    let config = ReaderConfig::from_toml(toml_str).unwrap();
    assert_eq!(config.article.path, Some(PathBuf::from("notes/article.txt")));
    assert_eq!(config.defaults.get(SettingsKey::FontFamily), Some("Ubuntu"));
    assert_eq!(config.defaults.get(SettingsKey::FontColor), None);

    let catalog = OptionCatalog::builtin();
    let record = config.resolve_defaults(&catalog).unwrap();
    assert_eq!(record.font_family.value, "Ubuntu");
    assert_eq!(record.font_size.value, "25px");
    assert_eq!(record.background_color.label, "Black");
    assert_eq!(record.font_color, catalog.defaults.font_color);
}

#[test]
fn test_unknown_option_rejected() {
    let config = ReaderConfig::from_toml("[defaults]\ncontentWidth = \"500px\"\n").unwrap();
    let err = config
        .resolve_defaults(&OptionCatalog::builtin())
        .unwrap_err();

    match err {
        ConfigError::UnknownOption { key, value } => {
            assert_eq!(key, SettingsKey::ContentWidth);
            assert_eq!(value, "500px");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_cli_overrides_layer_over_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[defaults]\nfontFamily = \"Merriweather\"\nfontSize = \"38px\""
    )
    .unwrap();

    let overrides = ReaderConfig {
        defaults: DefaultSelection {
            font_size: Some("18px".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    let config = ReaderConfig::load(Some(file.path()), &overrides).unwrap();
    assert_eq!(config.defaults.font_family.as_deref(), Some("Merriweather"));
    assert_eq!(config.defaults.font_size.as_deref(), Some("18px"));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = ReaderConfig::load(
        Some(std::path::Path::new("/nonexistent/folio.toml")),
        &ReaderConfig::default(),
    );
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let result = ReaderConfig::from_toml("[defaults\nfontSize = ");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_toml_snippet_reloads_to_same_record() {
    let catalog = OptionCatalog::builtin();
    let record = catalog
        .defaults
        .with_field(SettingsKey::ContentWidth, catalog.content_widths[1].clone());

    let config = ReaderConfig {
        defaults: DefaultSelection::from_record(&record),
        ..Default::default()
    };
    let content = config.to_toml().unwrap();
    assert!(content.contains("contentWidth = \"948px\""));

    let reloaded = ReaderConfig::from_toml(&content).unwrap();
    assert_eq!(reloaded.resolve_defaults(&catalog).unwrap(), record);
}
