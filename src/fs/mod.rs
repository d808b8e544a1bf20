// src/fs/mod.rs

//! Filesystem access used by change detection.
//!
//! Detection only ever needs to open a file for streaming reads, so the trait
//! is deliberately narrow. Errors are plain `io::Error`s because the detector
//! has to tell "not found" apart from every other failure.

use std::fmt::Debug;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

pub mod mock;

/// Abstract filesystem interface.
pub trait FileSystem: Send + Sync + Debug {
    /// Open `path` for reading its full contents.
    fn open_read(&self, path: &Path) -> io::Result<Box<dyn Read + Send>>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn open_read(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        let file = fs::File::open(path)?;
        Ok(Box::new(file))
    }
}
