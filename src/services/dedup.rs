use std::collections::HashSet;

use crate::model::entry::VocabEntry;

/// First-occurrence sets for one run.
#[derive(Debug, Default)]
pub struct SeenSets {
    words: HashSet<String>,
    transcriptions: HashSet<String>,
    glosses: HashSet<String>,
}

impl SeenSets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `entry` and returns true if neither its word nor its
    /// transcription has been seen. A rejected entry records nothing.
    pub fn first_entry(&mut self, entry: &VocabEntry) -> bool {
        if self.words.contains(&entry.word) || self.transcriptions.contains(&entry.transcription) {
            return false;
        }
        self.words.insert(entry.word.clone());
        self.transcriptions.insert(entry.transcription.clone());
        true
    }

    /// Records a target-language gloss; false if it was already emitted.
    pub fn first_gloss(&mut self, gloss: &str) -> bool {
        if self.glosses.contains(gloss) {
            return false;
        }
        self.glosses.insert(gloss.to_string());
        true
    }
}

/// Keeps, in order, the entries whose word and transcription are both first
/// occurrences.
pub fn dedup_entries(catalog: &[VocabEntry], seen: &mut SeenSets) -> Vec<VocabEntry> {
    catalog
        .iter()
        .filter(|e| seen.first_entry(e))
        .cloned()
        .collect()
}
