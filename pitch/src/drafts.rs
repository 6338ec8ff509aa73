//! In-memory draft history: newest first, capped at [`MAX_DRAFTS`]. Nothing is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::mode::{AudienceMode, LengthMode};

pub const MAX_DRAFTS: usize = 20;

/// Saved snapshot of a pitch and the modes active when it was saved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftEntry {
    pub id: Uuid,
    pub pitch: String,
    pub audience: AudienceMode,
    pub length: LengthMode,
    pub saved_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default)]
pub struct DraftStore {
    entries: Vec<DraftEntry>,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends a new entry and evicts the oldest beyond [`MAX_DRAFTS`].
    /// Returns `None` without touching the store when `pitch` is empty.
    pub fn save(
        &mut self,
        pitch: &str,
        audience: AudienceMode,
        length: LengthMode,
    ) -> Option<&DraftEntry> {
        if pitch.is_empty() {
            return None;
        }
        let entry = DraftEntry {
            id: Uuid::new_v4(),
            pitch: pitch.to_string(),
            audience,
            length,
            saved_at: Utc::now(),
        };
        tracing::debug!(id = %entry.id, "draft saved");
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_DRAFTS);
        self.entries.first()
    }

    /// Deletes the entry with `id`. Returns whether an entry was removed; absent ids are fine.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn get(&self, id: Uuid) -> Option<&DraftEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries newest first.
    pub fn iter(&self) -> impl Iterator<Item = &DraftEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
