//! In-memory code version history.

use chrono::Local;
use pagesmith_core::types::{CodeVersion, VersionId};

/// Append-only snapshot store for one artifact's code.
///
/// Versions are kept newest first. The store is seeded with a single
/// "Initial Generation" entry and never shrinks; identical consecutive
/// snapshots are stored as distinct versions.
#[derive(Debug, Clone)]
pub struct VersionStore {
    versions: Vec<CodeVersion>,
    next_id: u64,
}

impl VersionStore {
    pub fn new(seed_content: &str) -> Self {
        let seed = CodeVersion {
            id: VersionId(1),
            timestamp: Local::now(),
            content: seed_content.to_string(),
            label: Some("Initial Generation".to_string()),
        };
        Self { versions: vec![seed], next_id: 2 }
    }

    /// Snapshot `content` as the newest version, labelled `Version N`
    /// where N counts existing versions plus one.
    pub fn save(&mut self, content: &str) -> VersionId {
        let id = VersionId(self.next_id);
        self.next_id += 1;
        let label = format!("Version {}", self.versions.len() + 1);
        self.versions.insert(
            0,
            CodeVersion {
                id,
                timestamp: Local::now(),
                content: content.to_string(),
                label: Some(label),
            },
        );
        id
    }

    /// Version at `index`, 0 being the newest
    pub fn get(&self, index: usize) -> Option<&CodeVersion> {
        self.versions.get(index)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Newest-first iteration for the history dropdown
    pub fn iter(&self) -> impl Iterator<Item = &CodeVersion> {
        self.versions.iter()
    }
}
