//! Digest result types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Digest of one directory: its own hash plus its named children
///
/// Serialized with the `files` / `hash` keys, in that order, so the JSON
/// output keeps the established shape:
/// `{"files": {"a.txt": "...", "sub": {...}}, "hash": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestNode {
    /// Entry name to leaf digest or nested directory digest
    #[serde(rename = "files")]
    pub children: BTreeMap<String, DigestEntry>,
    /// Lowercase hex digest, or `""` when the directory has no digestible entries
    #[serde(rename = "hash")]
    pub digest: String,
}

/// A single child of a directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DigestEntry {
    /// Regular file, hex digest of its content
    File(String),
    /// Sub-directory
    Directory(DigestNode),
}

impl DigestEntry {
    /// Digest string this entry contributes to its parent
    pub fn digest(&self) -> &str {
        match self {
            DigestEntry::File(hash) => hash,
            DigestEntry::Directory(node) => &node.digest,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, DigestEntry::Directory(_))
    }
}

impl DigestNode {
    /// Result for a directory with no digestible entries
    pub fn empty() -> Self {
        Self {
            digest: String::new(),
            children: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of regular files in this subtree
    pub fn file_count(&self) -> usize {
        self.children
            .values()
            .map(|entry| match entry {
                DigestEntry::File(_) => 1,
                DigestEntry::Directory(node) => node.file_count(),
            })
            .sum()
    }
}
