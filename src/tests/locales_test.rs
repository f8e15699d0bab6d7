use std::fs;
use std::path::PathBuf;

use crate::locales::{SUPPORTED_LOCALES, app_locales, intersect, is_supported};
use crate::tests::TEST_PROJECT;

#[test]
fn test_intersection() {
    let generated = intersect(&["en", "fr", "de"], &["en", "fr", "xx"]);
    assert_eq!(generated, vec!["en", "fr"]);
}

#[test]
fn test_intersection_ignores_case() {
    let host = vec![String::from("en-gb"), String::from("ZH-HANT"), String::from("pt-BR")];
    let generated = intersect(&SUPPORTED_LOCALES, &host);
    // Keeps the spelling and order of the provider
    assert_eq!(generated, vec!["en-gb", "zh-hant"]);
}

#[test]
fn test_supported_locales() {
    assert!(SUPPORTED_LOCALES.iter().all(|locale| is_supported(locale)));
    assert!(is_supported("EN-GB"));
    assert!(!is_supported("pt-br"));
    assert!(!is_supported(""));
}

#[test]
fn test_app_locales() {
    let locales_dir = PathBuf::from(TEST_PROJECT).join("app/javascript/mastodon/locales");
    let locales = app_locales(&locales_dir).unwrap();
    // README.md is not a locale
    assert_eq!(locales, vec!["de", "en", "fr", "xx"]);
}

#[test]
fn test_app_locales_lowercase() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("en-GB.json"), "{}").unwrap();
    fs::write(dir.path().join("zh-TW.json"), "{}").unwrap();
    fs::create_dir(dir.path().join("nested.json")).unwrap();

    assert_eq!(app_locales(dir.path()).unwrap(), vec!["en-gb", "zh-tw"]);
}

#[test]
fn test_missing_locales_dir() {
    let dir = tempfile::tempdir().unwrap();
    assert!(app_locales(&dir.path().join("locales")).is_err());
}
