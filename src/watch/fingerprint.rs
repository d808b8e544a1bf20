// src/watch/fingerprint.rs

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Last observed state of a watched path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fingerprint {
    /// Hex-encoded content digest.
    Digest(String),
    /// Checked and confirmed absent.
    Missing,
}

impl Fingerprint {
    pub fn is_missing(&self) -> bool {
        matches!(self, Fingerprint::Missing)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fingerprint::Digest(hex) => f.write_str(hex),
            Fingerprint::Missing => f.write_str("missing"),
        }
    }
}

/// In-memory map from watched path to its last recorded fingerprint.
///
/// A path with no record has never been checked. Records are created lazily
/// and live as long as the store; nothing is ever removed.
#[derive(Debug, Default)]
pub struct FingerprintStore {
    records: HashMap<PathBuf, Fingerprint>,
}

impl FingerprintStore {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    pub fn get(&self, path: &Path) -> Option<&Fingerprint> {
        self.records.get(path)
    }

    pub fn record(&mut self, path: &Path, fingerprint: Fingerprint) {
        self.records.insert(path.to_path_buf(), fingerprint);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
