use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_defaults_when_unset() {
    let config = AppConfig::from_lookup(lookup_from(&[]));
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.database_path, PathBuf::from("ios.sqlite"));
    assert_eq!(config.hdiutil, PathBuf::from("hdiutil"));
}

#[test]
fn test_overrides_from_lookup() {
    let config = AppConfig::from_lookup(lookup_from(&[
        (DATABASE_VAR, "/tmp/strings.sqlite"),
        (HDIUTIL_VAR, "/usr/local/bin/hdiutil"),
    ]));
    assert_eq!(config.database_path, PathBuf::from("/tmp/strings.sqlite"));
    assert_eq!(config.hdiutil, PathBuf::from("/usr/local/bin/hdiutil"));
}

#[test]
fn test_blank_values_fall_back() {
    let config = AppConfig::from_lookup(lookup_from(&[(DATABASE_VAR, "  ")]));
    assert_eq!(config.database_path, PathBuf::from(DEFAULT_DATABASE));
}
