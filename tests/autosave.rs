use commit_composer::controller::{Controller, StorePaths};
use commit_composer::draft::{self, CommitDraft};
use commit_composer::history::HistoryStore;
use commit_composer::settings::Settings;
use tempfile::tempdir;

fn draft(kind: &str, scope: &str, description: &str) -> CommitDraft {
    CommitDraft {
        kind: kind.into(),
        custom_kind: String::new(),
        scope: scope.into(),
        description: description.into(),
    }
}

fn controller_with(settings: Settings, paths: &StorePaths) -> Controller {
    let history = HistoryStore::load(&paths.history);
    Controller::new(settings, history, paths.clone())
}

#[test]
fn enabled_autosave_overwrites_the_snapshot_on_each_recompute() {
    let dir = tempdir().unwrap();
    let paths = StorePaths::in_dir(dir.path());
    let settings = Settings {
        auto_save: true,
        ..Settings::default()
    };
    let mut controller = controller_with(settings, &paths);

    controller
        .refresh_preview(&draft("feat", "ui", "first"))
        .unwrap();
    let first = draft::load_snapshot(&paths.autosave).unwrap().unwrap();
    assert_eq!(first.description, "first");

    controller
        .refresh_preview(&draft("fix", "api", "second"))
        .unwrap();
    let second = draft::load_snapshot(&paths.autosave).unwrap().unwrap();
    assert_eq!(second, draft("fix", "api", "second"));
}

#[test]
fn disabled_autosave_never_writes_and_leaves_stale_data_alone() {
    let dir = tempdir().unwrap();
    let paths = StorePaths::in_dir(dir.path());

    // A snapshot from an earlier session with auto-save on.
    let stale = draft("docs", "readme", "old draft");
    draft::save_snapshot(&paths.autosave, &stale).unwrap();

    let mut controller = controller_with(Settings::default(), &paths);
    controller
        .refresh_preview(&draft("feat", "", "fresh work"))
        .unwrap();

    let on_disk = draft::load_snapshot(&paths.autosave).unwrap().unwrap();
    assert_eq!(on_disk, stale);
}

#[test]
fn failed_format_does_not_touch_the_snapshot() {
    let dir = tempdir().unwrap();
    let paths = StorePaths::in_dir(dir.path());
    let settings = Settings {
        auto_save: true,
        ..Settings::default()
    };
    let mut controller = controller_with(settings, &paths);

    assert!(controller.refresh_preview(&draft("feat", "ui", "  ")).is_err());
    assert!(draft::load_snapshot(&paths.autosave).unwrap().is_none());
}

#[test]
fn restore_returns_the_snapshot_only_when_enabled() {
    let dir = tempdir().unwrap();
    let paths = StorePaths::in_dir(dir.path());
    let saved = draft("custom", "", "spike");
    draft::save_snapshot(&paths.autosave, &saved).unwrap();

    assert_eq!(draft::restore_snapshot(&paths.autosave, true), saved);
    assert_eq!(
        draft::restore_snapshot(&paths.autosave, false),
        CommitDraft::default()
    );
}

#[test]
fn restore_falls_back_to_a_fresh_draft() {
    let dir = tempdir().unwrap();
    let paths = StorePaths::in_dir(dir.path());

    // no file at all
    assert_eq!(
        draft::restore_snapshot(&paths.autosave, true),
        CommitDraft::default()
    );

    // corrupt file
    std::fs::write(&paths.autosave, b"{ nope").unwrap();
    assert_eq!(
        draft::restore_snapshot(&paths.autosave, true),
        CommitDraft::default()
    );
}

#[test]
fn snapshot_round_trips_through_its_camel_case_form() {
    let dir = tempdir().unwrap();
    let paths = StorePaths::in_dir(dir.path());
    let original = CommitDraft {
        kind: "custom".into(),
        custom_kind: "wip".into(),
        scope: "ui".into(),
        description: "half-done toggle".into(),
    };
    draft::save_snapshot(&paths.autosave, &original).unwrap();

    let raw = std::fs::read_to_string(&paths.autosave).unwrap();
    assert!(raw.contains("\"type\""));
    assert!(raw.contains("\"customType\""));

    assert_eq!(
        draft::load_snapshot(&paths.autosave).unwrap().unwrap(),
        original
    );
}
