use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::clipboard::ClipboardAccess;
use crate::draft::{self, CommitDraft, AUTOSAVE_FILE};
use crate::history::{HistoryStore, HISTORY_FILE};
use crate::message::{format_commit, FormatError};
use crate::settings::{Settings, SETTINGS_FILE};

/// File name of the download artifact.
pub const ARTIFACT_NAME: &str = "commit-message.txt";

/// Quiet period after the last draft edit before the preview recomputes.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(200);

/// Where the persisted snapshots live. Tests point these at a tempdir.
#[derive(Debug, Clone)]
pub struct StorePaths {
    pub history: String,
    pub settings: String,
    pub autosave: String,
}

impl Default for StorePaths {
    fn default() -> Self {
        Self {
            history: HISTORY_FILE.into(),
            settings: SETTINGS_FILE.into(),
            autosave: AUTOSAVE_FILE.into(),
        }
    }
}

impl StorePaths {
    /// Resolve all three snapshot files under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        let join = |name: &str| dir.join(name).to_string_lossy().into_owned();
        Self {
            history: join(HISTORY_FILE),
            settings: join(SETTINGS_FILE),
            autosave: join(AUTOSAVE_FILE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// User-visible notice; the presentation layer decides how to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Editing,
    PreviewReady,
}

/// Orchestrates the formatter, stores and clipboard. Free of any
/// presentation dependency; the GUI raises intents as method calls and
/// renders whatever comes back.
pub struct Controller {
    settings: Settings,
    history: HistoryStore,
    paths: StorePaths,
    state: SessionState,
    preview: Option<String>,
    github_style: bool,
}

impl Controller {
    pub fn new(settings: Settings, history: HistoryStore, paths: StorePaths) -> Self {
        Self {
            settings,
            history,
            paths,
            state: SessionState::Editing,
            preview: None,
            github_style: false,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn github_style(&self) -> bool {
        self.github_style
    }

    /// Recompute the preview from the current draft. On success the session
    /// enters `PreviewReady` and, with auto-save enabled, the draft snapshot
    /// is overwritten; a snapshot write failure is logged, never surfaced.
    /// On an empty description the preview is dropped and the session stays
    /// in `Editing`.
    pub fn refresh_preview(&mut self, draft: &CommitDraft) -> Result<(), FormatError> {
        match format_commit(draft.effective_kind(), &draft.scope, &draft.description) {
            Ok(message) => {
                if self.settings.auto_save {
                    if let Err(e) = draft::save_snapshot(&self.paths.autosave, draft) {
                        tracing::warn!("failed to write draft snapshot: {e}");
                    }
                }
                self.preview = Some(message);
                self.state = SessionState::PreviewReady;
                Ok(())
            }
            Err(e) => {
                self.preview = None;
                self.state = SessionState::Editing;
                Err(e)
            }
        }
    }

    /// Place the preview on the clipboard. Only a confirmed write updates
    /// the history; a denied clipboard leaves it untouched.
    pub fn copy_preview(&mut self, clipboard: &mut dyn ClipboardAccess) -> Notice {
        let Some(message) = self.preview.clone() else {
            return Notice::error("Nothing to copy yet.");
        };
        match clipboard.set_text(&message) {
            Ok(()) => {
                self.remember(&message);
                Notice::success("Copied to clipboard!")
            }
            Err(e) => {
                tracing::warn!("clipboard write failed: {e}");
                Notice::error("Failed to copy.")
            }
        }
    }

    /// Copy a past message. The history itself is not modified.
    pub fn copy_history_entry(
        &mut self,
        index: usize,
        clipboard: &mut dyn ClipboardAccess,
    ) -> Notice {
        let Some(message) = self.history.get(index) else {
            return Notice::error("No such history entry.");
        };
        match clipboard.set_text(message) {
            Ok(()) => Notice::success("Copied from history!"),
            Err(e) => {
                tracing::warn!("clipboard write failed: {e}");
                Notice::error("Failed to copy.")
            }
        }
    }

    /// Write the preview to `<dir>/commit-message.txt`. The message is
    /// appended to the history before the write, unconditionally.
    pub fn download_preview(&mut self, dir: &Path) -> anyhow::Result<PathBuf> {
        let Some(message) = self.preview.clone() else {
            anyhow::bail!("no preview to save");
        };
        self.remember(&message);
        let path = dir.join(ARTIFACT_NAME);
        std::fs::write(&path, &message)?;
        Ok(path)
    }

    /// Flip the rendering flag; the logical session state is unaffected.
    pub fn toggle_github_style(&mut self) -> bool {
        self.github_style = !self.github_style;
        self.github_style
    }

    /// Replace the settings wholesale and persist the new snapshot.
    pub fn apply_settings(&mut self, settings: Settings) -> anyhow::Result<()> {
        self.settings = settings;
        self.settings.save(&self.paths.settings)
    }

    pub fn clear_history(&mut self) -> anyhow::Result<()> {
        self.history.clear();
        self.history.save(&self.paths.history)
    }

    /// Back to `Editing` with no preview. The draft itself is cleared by
    /// its owner, the presentation layer.
    pub fn reset(&mut self) {
        self.preview = None;
        self.state = SessionState::Editing;
    }

    fn remember(&mut self, message: &str) {
        if self.history.add(message) {
            if let Err(e) = self.history.save(&self.paths.history) {
                tracing::error!("failed to persist history: {e}");
            }
        }
    }
}

/// Single-slot trailing-edge debounce. `arm` replaces any pending run, so
/// at most one run is outstanding; `ready` fires it at most once.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule a run after the quiet period, cancelling any pending one.
    pub fn arm(&mut self) {
        self.pending = Some(Instant::now());
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending run fires, if one is scheduled.
    pub fn remaining(&self) -> Option<Duration> {
        self.pending
            .map(|armed| self.delay.saturating_sub(armed.elapsed()))
    }

    /// True exactly once per arm, once the quiet period has elapsed.
    pub fn ready(&mut self) -> bool {
        match self.pending {
            Some(armed) if armed.elapsed() >= self.delay => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
