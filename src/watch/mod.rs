// src/watch/mod.rs

//! File change detection.
//!
//! This module is responsible for:
//! - Hashing file contents (`blake3`).
//! - Remembering the last fingerprint seen for each watched path.
//! - Comparing the two on every poll tick.
//!
//! It knows nothing about processes or signals; it only answers "did anything
//! change since last time?".

pub mod detector;
pub mod fingerprint;
pub mod hash;

pub use detector::ChangeDetector;
pub use fingerprint::{Fingerprint, FingerprintStore};
pub use hash::{compute_file_hash, hash_reader};
