//! Theme config from env-style lookups and JSON.

use pretty_assertions::assert_eq;
use powerlift_frontend::config::{self, ThemeConfig};
use powerlift_frontend::error::ThemeError;
use powerlift_frontend::theme::HostMode;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_environment_gives_defaults() {
    let config = ThemeConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ThemeConfig::default());
    assert_eq!(config.options().dark_theme, None);
    assert!(!config.options().dynamic_color);
    assert_eq!(config.host_mode(), HostMode::Interactive);
}

#[test]
fn reads_all_keys() {
    let config = ThemeConfig::from_lookup(lookup(&[
        (config::ENV_DARK_THEME, "true"),
        (config::ENV_DYNAMIC_COLOR, "on"),
        (config::ENV_API_LEVEL, "33"),
        (config::ENV_PREVIEW, "1"),
    ]))
    .unwrap();
    assert_eq!(
        config,
        ThemeConfig {
            dark_theme: Some(true),
            dynamic_color: true,
            api_level: 33,
            preview: true,
        }
    );
    assert_eq!(config.host_mode(), HostMode::Preview);
}

#[test]
fn system_keyword_follows_platform() {
    let config = ThemeConfig::from_lookup(lookup(&[(config::ENV_DARK_THEME, "system")])).unwrap();
    assert_eq!(config.dark_theme, None);
}

#[test]
fn rejects_bad_values_with_their_key() {
    let err = ThemeConfig::from_lookup(lookup(&[(config::ENV_API_LEVEL, "S")])).unwrap_err();
    match err {
        ThemeError::InvalidConfig { key, value } => {
            assert_eq!(key, config::ENV_API_LEVEL);
            assert_eq!(value, "S");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let config = ThemeConfig::from_json(r#"{ "dark_theme": false, "api_level": 31 }"#).unwrap();
    assert_eq!(config.dark_theme, Some(false));
    assert_eq!(config.api_level, 31);
    assert!(!config.dynamic_color);
    assert!(matches!(ThemeConfig::from_json("{"), Err(ThemeError::ConfigJson(_))));
}

#[test]
fn page_meta_without_content_leaves_config_alone() {
    assert_eq!(ThemeConfig::from_page_meta(None).unwrap(), None);
    assert_eq!(ThemeConfig::from_page_meta(Some("  ")).unwrap(), None);
}

#[test]
fn page_meta_json_becomes_config() {
    let config = ThemeConfig::from_page_meta(Some(r#"{ "dynamic_color": true, "preview": true }"#))
        .unwrap()
        .unwrap();
    assert!(config.dynamic_color);
    assert_eq!(config.host_mode(), HostMode::Preview);
    assert_eq!(config.dark_theme, None);
    assert!(matches!(
        ThemeConfig::from_page_meta(Some("dark")),
        Err(ThemeError::ConfigJson(_))
    ));
}
