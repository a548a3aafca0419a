use crate::message::CUSTOM_KIND;
use serde::{Deserialize, Serialize};

pub const AUTOSAVE_FILE: &str = "commit_autosave.json";

/// The transient editing state behind the form fields. Owned by the
/// presentation layer; persisted only through the auto-save snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitDraft {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "customType", default)]
    pub custom_kind: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub description: String,
}

impl Default for CommitDraft {
    fn default() -> Self {
        Self {
            kind: "feat".into(),
            custom_kind: String::new(),
            scope: String::new(),
            description: String::new(),
        }
    }
}

impl CommitDraft {
    /// The type that actually enters the message: the trimmed free-form
    /// field when the selector is on the `custom` sentinel, the selector
    /// value otherwise.
    pub fn effective_kind(&self) -> &str {
        if self.kind == CUSTOM_KIND {
            self.custom_kind.trim()
        } else {
            &self.kind
        }
    }

    pub fn is_custom(&self) -> bool {
        self.kind == CUSTOM_KIND
    }
}

/// Load the auto-save snapshot from `path`, if one exists.
pub fn load_snapshot(path: &str) -> anyhow::Result<Option<CommitDraft>> {
    let content = std::fs::read_to_string(path).unwrap_or_default();
    if content.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(&content)?))
}

/// Overwrite the auto-save snapshot at `path` with the current draft.
pub fn save_snapshot(path: &str, draft: &CommitDraft) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(draft)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Draft to start the session with. Restores the snapshot when auto-save is
/// enabled; any read failure falls back to a fresh draft. When auto-save is
/// disabled the snapshot is never read.
pub fn restore_snapshot(path: &str, auto_save: bool) -> CommitDraft {
    if !auto_save {
        return CommitDraft::default();
    }
    match load_snapshot(path) {
        Ok(Some(draft)) => draft,
        Ok(None) => CommitDraft::default(),
        Err(e) => {
            tracing::warn!("failed to restore draft snapshot from {path}: {e}");
            CommitDraft::default()
        }
    }
}
