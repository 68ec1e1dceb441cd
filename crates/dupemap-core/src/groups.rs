//! Grouping of manifest entries by checksum.

use std::path::PathBuf;

use compact_str::CompactString;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::manifest::ManifestEntry;

/// Insertion-ordered table mapping checksums to the filenames that share
/// them.
///
/// Groups appear in the order their checksum was first seen; filenames within
/// a group keep manifest order and are never deduplicated. Built once per
/// run, discarded at exit.
#[derive(Debug, Default)]
pub struct GroupTable {
    groups: IndexMap<CompactString, Vec<PathBuf>>,
    entries: u64,
}

impl GroupTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the group keyed by its checksum, creating the
    /// group if absent.
    pub fn insert(&mut self, entry: ManifestEntry) {
        self.groups
            .entry(entry.checksum)
            .or_default()
            .push(entry.filename);
        self.entries += 1;
    }

    /// Total entries inserted.
    pub fn entry_count(&self) -> u64 {
        self.entries
    }

    /// Number of distinct checksums.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Check whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Build the duplicate report: groups meeting the configured minimum
    /// size, in first-seen order, truncated to the configured cap.
    pub fn into_report(self, config: &ReportConfig) -> DuplicateReport {
        let entries_scanned = self.entries;

        let mut groups: Vec<DuplicateGroup> = self
            .groups
            .into_iter()
            .filter(|(_, paths)| paths.len() >= config.min_group_size)
            .map(|(checksum, paths)| DuplicateGroup { checksum, paths })
            .collect();

        if config.max_groups > 0 && groups.len() > config.max_groups {
            groups.truncate(config.max_groups);
        }

        let files_with_duplicates = groups.iter().map(|g| g.paths.len() as u64).sum();
        let group_count = groups.len();

        DuplicateReport {
            groups,
            entries_scanned,
            files_with_duplicates,
            group_count,
        }
    }
}

/// A group of filenames sharing one checksum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateGroup {
    /// Checksum shared by all files in this group.
    pub checksum: CompactString,

    /// Filenames in manifest order.
    pub paths: Vec<PathBuf>,
}

impl DuplicateGroup {
    /// Get the number of files in this group.
    pub fn count(&self) -> usize {
        self.paths.len()
    }
}

/// Results from grouping a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateReport {
    /// Duplicate groups in first-seen checksum order.
    pub groups: Vec<DuplicateGroup>,

    /// Number of manifest entries scanned.
    pub entries_scanned: u64,

    /// Number of files that have duplicates.
    pub files_with_duplicates: u64,

    /// Number of duplicate groups.
    pub group_count: usize,
}

impl DuplicateReport {
    /// Check if any duplicates were found.
    pub fn has_duplicates(&self) -> bool {
        !self.groups.is_empty()
    }

    /// Total number of duplicate files across all groups.
    pub fn total_duplicate_files(&self) -> usize {
        self.groups.iter().map(|g| g.paths.len()).sum()
    }
}
