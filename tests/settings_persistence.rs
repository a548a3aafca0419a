use commit_composer::settings::{Settings, FONT_SIZE_MAX, FONT_SIZE_MIN};
use tempfile::tempdir;

fn path_in(dir: &tempfile::TempDir) -> String {
    dir.path()
        .join("commit_settings.json")
        .to_string_lossy()
        .into_owned()
}

#[test]
fn virgin_load_returns_the_defaults() {
    let dir = tempdir().unwrap();
    let settings = Settings::load(&path_in(&dir));
    assert_eq!(settings.preview_font_size, 16);
    assert!(!settings.auto_save);
    assert_eq!(settings, Settings::default());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let path = path_in(&dir);

    let settings = Settings {
        preview_font_size: 20,
        auto_save: true,
        ..Settings::default()
    };
    settings.save(&path).unwrap();

    let loaded = Settings::load(&path);
    assert_eq!(loaded.preview_font_size, 20);
    assert!(loaded.auto_save);
    assert_eq!(loaded, settings);
}

#[test]
fn save_overwrites_wholesale() {
    let dir = tempdir().unwrap();
    let path = path_in(&dir);

    Settings {
        preview_font_size: 24,
        auto_save: true,
        ..Settings::default()
    }
    .save(&path)
    .unwrap();
    Settings::default().save(&path).unwrap();

    let loaded = Settings::load(&path);
    assert_eq!(loaded, Settings::default());
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = path_in(&dir);
    std::fs::write(&path, b"{ nope").unwrap();
    assert_eq!(Settings::load(&path), Settings::default());
}

#[test]
fn missing_fields_take_their_defaults() {
    let dir = tempdir().unwrap();
    let path = path_in(&dir);
    std::fs::write(&path, br#"{ "previewFontSize": 18 }"#).unwrap();

    let loaded = Settings::load(&path);
    assert_eq!(loaded.preview_font_size, 18);
    assert!(!loaded.auto_save);
    assert!(loaded.enable_toasts);
}

#[test]
fn out_of_range_font_size_is_clamped_on_load() {
    let dir = tempdir().unwrap();
    let path = path_in(&dir);

    std::fs::write(&path, br#"{ "previewFontSize": 500, "autoSave": false }"#).unwrap();
    assert_eq!(Settings::load(&path).preview_font_size, FONT_SIZE_MAX);

    std::fs::write(&path, br#"{ "previewFontSize": 0, "autoSave": false }"#).unwrap();
    assert_eq!(Settings::load(&path).preview_font_size, FONT_SIZE_MIN);
}
