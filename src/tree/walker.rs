//! Single-level directory walker
//!
//! Lists one directory through a `FileSystem` and classifies each entry.
//! Recursion is driven by the engine, not by the walker.

use crate::error::DigestError;
use crate::tree::fs::{EntryKind, FileSystem};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};

/// Digestible directory entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A regular file with its name and full path
    File { name: String, path: PathBuf },
    /// A sub-directory with its name and full path
    Directory { name: String, path: PathBuf },
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::File { name, .. } | Entry::Directory { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Entry::File { path, .. } | Entry::Directory { path, .. } => path,
        }
    }
}

/// Directory walker over a filesystem capability
pub struct Walker<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> Walker<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// List the digestible entries of `dir`
    ///
    /// Symlinks and special files are dropped here and only show up in the
    /// log. The returned order is whatever the filesystem produced.
    ///
    /// Paths are joined from the raw on-disk name. Two kept entries whose
    /// names only differ in undecodable bytes would share a result key, so
    /// that is reported as an error.
    pub async fn list(&self, dir: &Path) -> Result<Vec<Entry>, DigestError> {
        let raw = self
            .fs
            .list_entries(dir)
            .await
            .map_err(|e| DigestError::io(dir, e))?;
        trace!(path = %dir.display(), entry_count = raw.len(), "Listed directory");

        let mut entries = Vec::with_capacity(raw.len());
        let mut seen = HashSet::with_capacity(raw.len());
        for entry in raw {
            let path = dir.join(&entry.file_name);
            if matches!(entry.kind, EntryKind::Symlink | EntryKind::Other) {
                warn!(path = %path.display(), kind = ?entry.kind, "Skipping hash of non-regular entry");
                continue;
            }
            if !seen.insert(entry.name.clone()) {
                return Err(DigestError::DuplicateEntryName {
                    dir: dir.to_path_buf(),
                    name: entry.name,
                });
            }
            match entry.kind {
                EntryKind::File => entries.push(Entry::File {
                    name: entry.name,
                    path,
                }),
                _ => entries.push(Entry::Directory {
                    name: entry.name,
                    path,
                }),
            }
        }

        Ok(entries)
    }
}
