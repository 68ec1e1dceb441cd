//! Manifest line parsing and loading.
//!
//! A manifest is plain text, one record per line, in the form
//! `<checksum>\t<filename>`. The split happens on the FIRST tab only, so
//! filenames containing tabs survive intact. Lines beginning with `!` mark
//! records the producing tool failed on; encountering one aborts the run.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use compact_str::CompactString;

use crate::error::ManifestError;
use crate::groups::GroupTable;

/// Leading character marking a failed record; fatal wherever it appears.
pub const SENTINEL: char = '!';

/// One parsed manifest record: a checksum and the filename it was computed
/// from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub checksum: CompactString,
    pub filename: PathBuf,
}

impl ManifestEntry {
    /// Parse a single manifest line.
    ///
    /// The line must already have its `\n` stripped; a trailing `\r` from
    /// CRLF input is removed here. `line_number` is 1-based and only used in
    /// errors.
    pub fn parse_line(line: &str, line_number: usize) -> Result<Self, ManifestError> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.starts_with(SENTINEL) {
            return Err(ManifestError::SentinelLine {
                line: line_number,
                content: line.to_string(),
            });
        }

        let (checksum, filename) = line
            .split_once('\t')
            .ok_or(ManifestError::MissingSeparator { line: line_number })?;

        Ok(Self {
            checksum: CompactString::from(checksum),
            filename: PathBuf::from(filename),
        })
    }
}

/// Read a manifest file and build its group table.
pub fn load_path(path: impl AsRef<Path>) -> Result<GroupTable, ManifestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ManifestError::io(path, e))?;
    load_reader(BufReader::new(file))
}

/// Build a group table from any line source.
///
/// The whole input is consumed before anything is reported, so a bad line
/// fails the run with nothing written.
pub fn load_reader<R: BufRead>(reader: R) -> Result<GroupTable, ManifestError> {
    let mut table = GroupTable::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_number = idx + 1;
        let line = line.map_err(|source| ManifestError::Read {
            line: line_number,
            source,
        })?;
        table.insert(ManifestEntry::parse_line(&line, line_number)?);
    }
    Ok(table)
}
