use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use crate::configs::config::GeneratorConfig;
use crate::errors::{DataError, GenerationError};
use crate::generator::{Generator, OutputCategory};
use crate::sources::Dataset;
use crate::sources::memory_source::MemorySource;
use crate::tests::{TEST_PROJECT, init_logger};

fn test_config(output_dir: &Path) -> GeneratorConfig {
    let mut config = GeneratorConfig::load_from_dir(Path::new(TEST_PROJECT)).unwrap();
    config.output_dir = output_dir.to_path_buf();
    config
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn memory_source() -> MemorySource {
    MemorySource::new()
        .with(&Dataset::Compact("en"), r#"[{"hexcode": "1F600", "label": "grinning face"}]"#)
        .with(&Dataset::Shortcodes { locale: "en", preset: "cldr" }, r#"{"1F600": "grinning_face"}"#)
        .with(&Dataset::Compact("fr"), r#"[{"hexcode": "1F600", "label": "visage rieur"}]"#)
        .with(&Dataset::Shortcodes { locale: "fr", preset: "cldr" }, r#"{"1F600": "visage_rieur"}"#)
        .with(&Dataset::Sheet, r#"[{"unified": "1F600", "sheet_x": 32, "sheet_y": 20}]"#)
}

fn memory_config(dir: &Path) -> GeneratorConfig {
    let locales_dir = dir.join("locales");
    fs::create_dir(&locales_dir).unwrap();
    fs::write(locales_dir.join("en.json"), "{}").unwrap();
    fs::write(locales_dir.join("fr.json"), "{}").unwrap();
    fs::write(locales_dir.join("xx.json"), "{}").unwrap();

    GeneratorConfig {
        project_root: dir.to_path_buf(),
        locales_dir: PathBuf::from("locales"),
        output_dir: PathBuf::from("output"),
        ..GeneratorConfig::default()
    }
}

#[test]
fn test_calculate_locales() {
    let output = tempfile::tempdir().unwrap();
    let generator = Generator::new(&test_config(output.path())).unwrap();
    assert_eq!(generator.calculate_locales().unwrap(), vec!["de", "en", "fr"]);
}

#[test]
fn test_missing_locales_dir() {
    let dir = tempfile::tempdir().unwrap();
    let generator = Generator::with_source(&GeneratorConfig::load_from_dir(dir.path()).unwrap(),
                                           Box::new(memory_source()));
    assert!(matches!(generator.generate_all(), Err(GenerationError::FileSystem { .. })));
}

#[test]
fn test_generate_all() {
    init_logger();
    let output = tempfile::tempdir().unwrap();
    let generator = Generator::new(&test_config(output.path())).unwrap();

    let errors = match generator.generate_all() {
        Err(error @ GenerationError::Multiple(_)) => error,
        other => panic!("Unexpected result: {:?}", other),
    };
    // The German dataset is malformed, which fails both of its files
    let errors = errors.errors();
    assert_eq!(errors.len(), 2);
    for error in errors {
        match error {
            GenerationError::Data { locale, error: DataError::MalformedData { .. }, .. } =>
                assert_eq!(locale, "de"),
            other => panic!("Unexpected error: {:?}", other),
        }
    }

    for category in &["locales", "meta"] {
        let dir = output.path().join(category);
        assert!(dir.join("en.json").is_file());
        assert!(dir.join("fr.json").is_file());
        assert!(!dir.join("de.json").exists());
        assert!(!dir.join("xx.json").exists());
    }
}

#[test]
fn test_generated_meta() {
    let output = tempfile::tempdir().unwrap();
    let generator = Generator::new(&test_config(output.path())).unwrap();
    let _ = generator.generate_all();

    assert_eq!(read_json(&output.path().join("meta/en.json")), json!([
        {"hexcode": "1F600", "x": 32, "y": 20, "labels": ["grinning_face", "grinning"]},
        {
            "hexcode": "1F44B",
            "x": 11,
            "y": 27,
            "labels": ["waving_hand", "wave"],
            "skins": [
                {"hexcode": "1F44B-1F3FB", "x": 11, "y": 28},
                {"hexcode": "1F44B-1F3FE", "x": 11, "y": 31}
            ]
        },
        // Only found with ignore_fe0f
        {"hexcode": "263A-FE0F", "x": 57, "y": 33, "labels": ["smiling_face", "smile_relaxed"]},
        {"hexcode": "1F937", "x": 45, "y": 50}
    ]));

    let french = read_json(&output.path().join("meta/fr.json"));
    assert_eq!(french[0]["labels"], json!(["visage_rieur"]));
    assert_eq!(french[1]["labels"], json!(["main_qui_fait_coucou"]));
}

#[test]
fn test_generated_locales() {
    let output = tempfile::tempdir().unwrap();
    let generator = Generator::new(&test_config(output.path())).unwrap();
    let _ = generator.generate_all();

    let path = output.path().join("locales/en.json");
    assert_eq!(read_json(&path), json!({
        "1F44B": "waving hand",
        "1F44B-1F3FB": "waving hand: light skin tone",
        "1F44B-1F3FE": "waving hand: medium-dark skin tone",
        "1F600": "grinning face",
        "1F914": "thinking face",
        "263A": "smiling face"
    }));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("{\n  \"1F44B\": \"waving hand\",\n"));
    assert!(content.ends_with('}'));
}

#[test]
fn test_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = memory_config(dir.path());
    let generator = Generator::with_source(&config, Box::new(memory_source()));

    let report = generator.generate_all().unwrap();

    assert_eq!(report.locales, vec!["en", "fr"]);
    assert_eq!(report.written.len(), 4);
    assert!(report.written.iter().all(|path| path.is_file()));
    for category in &[OutputCategory::Locales, OutputCategory::Meta] {
        let mut locales = report.generated[category].clone();
        locales.sort();
        assert_eq!(locales, vec!["en", "fr"]);
    }
    assert_eq!(read_json(&dir.path().join("output/meta/fr.json")),
               json!([{"hexcode": "1F600", "x": 32, "y": 20, "labels": ["visage_rieur"]}]));
}

#[test]
fn test_selected_categories() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        categories: vec![OutputCategory::Meta, OutputCategory::Meta],
        ..memory_config(dir.path())
    };
    let generator = Generator::with_source(&config, Box::new(memory_source()));

    let report = generator.generate_all().unwrap();

    assert_eq!(report.written.len(), 2);
    assert!(!dir.path().join("output/locales").exists());
}

#[test]
fn test_overwrites_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = memory_config(dir.path());
    let stale = dir.path().join("output/locales/en.json");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "stale").unwrap();

    let generator = Generator::with_source(&config, Box::new(memory_source()));
    generator.generate_all().unwrap();

    assert_eq!(read_json(&stale), json!({"1F600": "grinning face"}));
}

#[test]
fn test_category_dir_failure() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let config = memory_config(dir.path());
    // A file is in the way of the meta directory
    fs::create_dir(dir.path().join("output")).unwrap();
    fs::write(dir.path().join("output/meta"), "").unwrap();

    let generator = Generator::with_source(&config, Box::new(memory_source()));
    let errors = match generator.generate_all() {
        Err(GenerationError::Multiple(errors)) => errors,
        other => panic!("Unexpected result: {:?}", other),
    };

    assert_eq!(errors.len(), 1);
    match &errors[0] {
        GenerationError::FileSystem { path, .. } => assert_eq!(path, &dir.path().join("output/meta")),
        other => panic!("Unexpected error: {:?}", other),
    }
    // The other category isn't affected
    assert!(dir.path().join("output/locales/en.json").is_file());
    assert!(dir.path().join("output/locales/fr.json").is_file());
}

#[test]
fn test_missing_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let config = memory_config(dir.path());
    let source = MemorySource::new()
        .with(&Dataset::Compact("en"), r#"[{"hexcode": "1F600", "label": "grinning face"}]"#)
        .with(&Dataset::Shortcodes { locale: "en", preset: "cldr" }, "{}")
        .with(&Dataset::Compact("fr"), r#"[{"hexcode": "1F600", "label": "visage rieur"}]"#)
        .with(&Dataset::Shortcodes { locale: "fr", preset: "cldr" }, "{}");
    let generator = Generator::with_source(&config, Box::new(source));

    let errors = match generator.generate_all() {
        Err(error) => error,
        Ok(report) => panic!("Unexpected report: {:?}", report),
    };
    let errors = errors.errors();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|error| matches!(error,
        GenerationError::Data { category: OutputCategory::Meta, .. })));
    assert!(dir.path().join("output/locales/en.json").is_file());
}

#[test]
fn test_generated_categories() {
    let output = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        categories: vec![OutputCategory::Categories],
        ..test_config(output.path())
    };
    let generator = Generator::new(&config).unwrap();

    let errors = match generator.generate_all() {
        Err(error) => error,
        Ok(report) => panic!("Unexpected report: {:?}", report),
    };
    let errors = errors.errors();
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], GenerationError::Data { category: OutputCategory::Categories, .. }));

    assert_eq!(read_json(&output.path().join("categories/en.json")), json!({
        "categories": [
            {
                "id": "smileys-emotion",
                "name": "smileys & emotion",
                "emojis": ["grinning_face", "smiling_face", "thinking_face"]
            },
            {"id": "people-body", "name": "people & body", "emojis": ["waving_hand"]},
            {"id": "component", "name": "components", "emojis": []}
        ],
        "aliases": {
            "grinning": "grinning_face",
            "smile_relaxed": "smiling_face",
            "wave": "waving_hand"
        }
    }));
    let french = read_json(&output.path().join("categories/fr.json"));
    assert_eq!(french["categories"][1]["name"], "personnes et corps");
    assert_eq!(french["categories"][1]["emojis"], json!(["main_qui_fait_coucou"]));
    // The meta files keep their format
    assert!(!output.path().join("meta").exists());
}

#[test]
fn test_missing_messages() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        categories: vec![OutputCategory::Meta, OutputCategory::Categories],
        ..memory_config(dir.path())
    };
    let generator = Generator::with_source(&config, Box::new(memory_source()));

    let errors = match generator.generate_all() {
        Err(GenerationError::Multiple(errors)) => errors,
        other => panic!("Unexpected result: {:?}", other),
    };

    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|error| matches!(error, GenerationError::Data {
        category: OutputCategory::Categories,
        error: DataError::MissingLocaleData { .. },
        ..
    })));
    assert!(dir.path().join("output/meta/en.json").is_file());
}
