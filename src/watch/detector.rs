// src/watch/detector.rs

//! Poll-and-compare change detection over a fixed list of files.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::fs::{FileSystem, RealFileSystem};
use crate::watch::fingerprint::{Fingerprint, FingerprintStore};
use crate::watch::hash::compute_file_hash;

/// Compares the current content of each watched path against the
/// [`FingerprintStore`].
///
/// The detector owns its store outright; it is meant to live inside the single
/// task that polls it.
#[derive(Debug)]
pub struct ChangeDetector<F: FileSystem = RealFileSystem> {
    fs: F,
    paths: Vec<PathBuf>,
    store: FingerprintStore,
}

impl ChangeDetector<RealFileSystem> {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self::with_fs(RealFileSystem, paths)
    }
}

impl<F: FileSystem> ChangeDetector<F> {
    pub fn with_fs(fs: F, paths: Vec<PathBuf>) -> Self {
        Self {
            fs,
            paths,
            store: FingerprintStore::new(),
        }
    }

    pub fn store(&self) -> &FingerprintStore {
        &self.store
    }

    /// Check the watched paths in configured order, stopping at the first one
    /// that changed.
    pub fn check_all(&mut self) -> bool {
        // Index loop: `check_path` needs `&mut self` while we walk `self.paths`.
        for idx in 0..self.paths.len() {
            let path = self.paths[idx].clone();
            if self.check_path(&path) {
                return true;
            }
        }
        false
    }

    /// Check a single path and report whether it changed since it was last
    /// recorded.
    ///
    /// On the check that reports a change the stored record is left as it
    /// was; a restart is already underway at that point.
    pub fn check_path(&mut self, path: &Path) -> bool {
        let previous = self.store.get(path).cloned();

        let digest = match compute_file_hash(&self.fs, path) {
            Ok(digest) => digest,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return self.on_missing(path, previous);
            }
            Err(e) => {
                warn!(path = ?path, error = %e, "cannot determine hash");
                return false;
            }
        };

        let current = Fingerprint::Digest(digest);
        match previous {
            Some(prev) if prev != current => {
                info!(path = ?path, "detected change");
                true
            }
            _ => {
                debug!(path = ?path, fingerprint = %current, "fingerprint recorded");
                self.store.record(path, current);
                false
            }
        }
    }

    fn on_missing(&mut self, path: &Path, previous: Option<Fingerprint>) -> bool {
        match previous {
            Some(prev) if !prev.is_missing() => {
                info!(path = ?path, "file has been removed but was previously present");
                true
            }
            _ => {
                debug!(path = ?path, "file missing");
                self.store.record(path, Fingerprint::Missing);
                false
            }
        }
    }
}
