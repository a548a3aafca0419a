use std::collections::VecDeque;

pub const HISTORY_FILE: &str = "commit_history.json";

/// Maximum number of recent messages kept.
pub const HISTORY_LIMIT: usize = 5;

/// Bounded, deduplicated list of generated messages, most recent first.
#[derive(Debug, Default, Clone)]
pub struct HistoryStore {
    entries: VecDeque<String>,
}

impl HistoryStore {
    /// Load the persisted history from `path`. A missing, empty or
    /// malformed file yields an empty store; the failure is logged and
    /// never reaches the caller.
    pub fn load(path: &str) -> Self {
        match load_entries(path) {
            Ok(entries) => Self { entries },
            Err(e) => {
                tracing::error!("failed to load history from {path}: {e}");
                Self::default()
            }
        }
    }

    /// Insert `message` at the front unless it is already present. Returns
    /// whether the list changed. The list never grows beyond
    /// [`HISTORY_LIMIT`]; the oldest entry is evicted first.
    pub fn add(&mut self, message: &str) -> bool {
        if self.entries.iter().any(|m| m == message) {
            return false;
        }
        self.entries.push_front(message.to_string());
        while self.entries.len() > HISTORY_LIMIT {
            self.entries.pop_back();
        }
        true
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    /// Cloned most-recent-first snapshot.
    pub fn list(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Persist the full ordered list to `path` as a JSON array.
    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let list: Vec<&String> = self.entries.iter().collect();
        let json = serde_json::to_string_pretty(&list)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

fn load_entries(path: &str) -> anyhow::Result<VecDeque<String>> {
    let content = std::fs::read_to_string(path).unwrap_or_default();
    if content.is_empty() {
        return Ok(VecDeque::new());
    }
    let list: Vec<String> = serde_json::from_str(&content)?;
    let mut entries: VecDeque<String> = list.into();
    // A file edited by hand may exceed the cap; re-apply it on load.
    entries.truncate(HISTORY_LIMIT);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_reports_whether_the_list_changed() {
        let mut store = HistoryStore::default();
        assert!(store.add("feat: one"));
        assert!(!store.add("feat: one"));
        assert_eq!(store.len(), 1);
    }
}
