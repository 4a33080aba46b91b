//! Shared test utilities for integration tests

use dirgest::{DigestEngine, MemoryFileSystem};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Engine over an in-memory filesystem
pub fn memory_engine(memfs: MemoryFileSystem, algorithm: &str) -> DigestEngine {
    DigestEngine::with_filesystem(algorithm, Arc::new(memfs)).unwrap()
}

/// Write `files` (relative path, content) under a fresh temp directory
pub fn temp_tree(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (rel, content) in files {
        write_file(temp_dir.path(), rel, content);
    }
    temp_dir
}

pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// Whether `s` is a lowercase hex digest of the given length
pub fn is_hex_digest(s: &str, len: usize) -> bool {
    s.len() == len && s.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}
