// src/watch/hash.rs

use std::io::{self, Read};
use std::path::Path;

use blake3::Hasher;
use tracing::trace;

use crate::fs::FileSystem;

/// Stream everything `reader` yields into blake3 and return the hex digest.
pub fn hash_reader(mut reader: impl Read) -> io::Result<String> {
    let mut hasher = Hasher::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize().to_hex().to_string())
}

/// Compute the hash of a single file.
pub fn compute_file_hash(fs: &dyn FileSystem, path: &Path) -> io::Result<String> {
    let reader = fs.open_read(path)?;
    let hash = hash_reader(reader)?;
    trace!(path = ?path, hash = %hash, "computed file hash");
    Ok(hash)
}
